//! User records and their create payload.
//!
//! The plaintext credential only ever lives in [`UserDraft`]; it is wiped
//! when the draft drops. Everything past preparation carries a
//! [`CredentialHash`] instead.

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use super::resource::{NaturalKeyResource, UserResource, null_as_empty};

/// Decoded body of `POST /api/users`.
///
/// Absent or `null` fields decode as empty strings so validation can report
/// them with the resource's missing-fields message.
#[derive(Default, Deserialize)]
pub struct UserDraft {
    /// Requested username.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub username: String,
    /// Plaintext credential. `password` is accepted as an alias.
    #[serde(default, alias = "password", deserialize_with = "null_as_empty")]
    pub hash: String,
}

impl UserDraft {
    /// Build a draft from its parts.
    pub fn new(username: impl Into<String>, credential: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            hash: credential.into(),
        }
    }
}

impl std::fmt::Debug for UserDraft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserDraft")
            .field("username", &self.username)
            .field("hash", &"<redacted>")
            .finish()
    }
}

impl Drop for UserDraft {
    fn drop(&mut self) {
        self.hash.zeroize();
    }
}

/// PHC-formatted one-way hash of a user credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialHash(String);

impl CredentialHash {
    /// Wrap an encoded hash produced by a [`super::ports::CredentialHasher`].
    pub fn from_phc(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Encoded hash string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// User ready for insertion; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    username: String,
    hash: CredentialHash,
}

impl NewUser {
    /// Pair a username with its hashed credential.
    pub fn new(username: impl Into<String>, hash: CredentialHash) -> Self {
        Self {
            username: username.into(),
            hash,
        }
    }

    /// Requested username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Hashed credential.
    #[must_use]
    pub fn hash(&self) -> &CredentialHash {
        &self.hash
    }
}

/// Stored user as returned by list and get.
///
/// Serialised as `{"id", "username", "hash"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: i32,
    username: String,
    hash: String,
}

impl User {
    /// Assemble a stored user.
    pub fn new(id: i32, username: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            hash: hash.into(),
        }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Unique username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Encoded credential hash.
    #[must_use]
    pub fn hash(&self) -> &str {
        &self.hash
    }
}

impl NaturalKeyResource for UserResource {
    type Draft = UserDraft;
    type NewRecord = NewUser;
    type Record = User;

    const LABEL: &'static str = "User";
    const NOUN: &'static str = "user";
    const ROUTE: &'static str = "/api/users";
    const KEY_PARAM: &'static str = "username";
    const MISSING_FIELDS: &'static str = "Missing one or more fields: username, hash";
    const CONFLICT: &'static str = "Username already exists";

    fn is_valid(draft: &UserDraft) -> bool {
        !draft.username.is_empty() && !draft.hash.is_empty()
    }

    fn new_record_key(record: &NewUser) -> &str {
        record.username()
    }

    fn record_key(record: &User) -> &str {
        record.username()
    }
}
