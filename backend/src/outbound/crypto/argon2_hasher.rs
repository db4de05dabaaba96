//! Argon2id implementation of [`CredentialHasher`].

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use rand::rngs::OsRng;

use crate::domain::CredentialHash;
use crate::domain::ports::{CredentialHashError, CredentialHasher};

/// Memory cost in KiB.
pub const MEMORY_COST_KIB: u32 = 19_456;
/// Number of passes over memory.
pub const ITERATIONS: u32 = 2;
/// Degree of parallelism.
pub const PARALLELISM: u32 = 1;

/// Argon2id hasher with a fixed work factor and per-hash random salt.
///
/// Hashes are PHC strings (`$argon2id$v=19$m=19456,t=2,p=1$...`), so the
/// parameters travel with each stored credential.
#[derive(Debug, Clone)]
pub struct Argon2CredentialHasher {
    params: Params,
}

impl Argon2CredentialHasher {
    /// Build a hasher with the fixed work factor.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialHashError::Hashing`] if the parameters are rejected.
    pub fn new() -> Result<Self, CredentialHashError> {
        Params::new(MEMORY_COST_KIB, ITERATIONS, PARALLELISM, None)
            .map(|params| Self { params })
            .map_err(|err| CredentialHashError::hashing(err.to_string()))
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl CredentialHasher for Argon2CredentialHasher {
    fn hash(&self, plaintext: &str) -> Result<CredentialHash, CredentialHashError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2()
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| CredentialHash::from_phc(hash.to_string()))
            .map_err(|err| CredentialHashError::hashing(err.to_string()))
    }

    fn verify(&self, plaintext: &str, hash: &CredentialHash) -> bool {
        PasswordHash::new(hash.as_str()).is_ok_and(|parsed| {
            self.argon2()
                .verify_password(plaintext.as_bytes(), &parsed)
                .is_ok()
        })
    }
}
