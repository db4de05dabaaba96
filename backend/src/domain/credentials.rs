//! Draft preparation for users: replaces the plaintext credential with a hash.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use super::ports::{CredentialHasher, DraftPreparer};
use super::resource::{NaturalKeyResource, UserResource};
use super::user::{NewUser, UserDraft};
use super::Error;

/// Hashes user credentials on a blocking thread before insertion.
#[derive(Clone)]
pub struct CredentialPreparer {
    hasher: Arc<dyn CredentialHasher>,
}

impl CredentialPreparer {
    /// Wrap a hasher implementation.
    pub fn new(hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { hasher }
    }
}

fn creation_failed() -> Error {
    Error::internal(format!("Error creating {}", UserResource::NOUN))
}

#[async_trait]
impl DraftPreparer<UserResource> for CredentialPreparer {
    async fn prepare(&self, draft: UserDraft) -> Result<NewUser, Error> {
        let hasher = Arc::clone(&self.hasher);
        let username = draft.username.clone();
        // The draft moves onto the blocking thread and is wiped when it drops there.
        let outcome = tokio::task::spawn_blocking(move || hasher.hash(&draft.hash)).await;

        match outcome {
            Ok(Ok(hash)) => Ok(NewUser::new(username, hash)),
            Ok(Err(err)) => {
                error!(error = %err, "credential hashing failed");
                Err(creation_failed())
            }
            Err(err) => {
                error!(error = %err, "credential hashing task aborted");
                Err(creation_failed())
            }
        }
    }
}
