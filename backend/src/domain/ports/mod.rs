//! Domain ports implemented by outbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod credential_hasher;
mod draft_preparer;
mod resource_repository;

pub use credential_hasher::{CredentialHashError, CredentialHasher};
pub use draft_preparer::{DraftPreparer, PassThroughPreparer};
pub use resource_repository::{RepositoryError, ResourceRepository};
