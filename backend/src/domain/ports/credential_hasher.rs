//! One-way credential hashing port.

use super::define_port_error;
use crate::domain::user::CredentialHash;

define_port_error! {
    /// Failures raised while hashing a credential.
    pub enum CredentialHashError {
        /// The hasher rejected its parameters or input.
        Hashing {
            /// Hasher error text.
            message: String,
        } => "credential hashing failed: {message}",
    }
}

/// Synchronous, CPU-bound hasher for user credentials.
///
/// Callers run it on a blocking thread; implementations must not touch the
/// async runtime.
pub trait CredentialHasher: Send + Sync {
    /// Hash `plaintext` with a fresh random salt.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialHashError::Hashing`] when the hasher fails.
    fn hash(&self, plaintext: &str) -> Result<CredentialHash, CredentialHashError>;

    /// Check `plaintext` against a previously produced hash.
    fn verify(&self, plaintext: &str, hash: &CredentialHash) -> bool;
}
