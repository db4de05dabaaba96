//! Store port for natural-key resources.
//!
//! One trait serves both users and tasks. Adapters translate their native
//! failures into [`RepositoryError`] and never let driver types escape.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::resource::NaturalKeyResource;

define_port_error! {
    /// Failures raised by [`ResourceRepository`] implementations.
    pub enum RepositoryError {
        /// The store could not be reached or a connection could not be checked out.
        Connection {
            /// Driver or pool error text.
            message: String,
        } => "store connection failed: {message}",
        /// The statement failed for a reason other than a key collision.
        Query {
            /// Driver error text.
            message: String,
        } => "store query failed: {message}",
        /// A returned row could not be mapped into the record shape.
        Decode {
            /// Decoder error text.
            message: String,
        } => "store row could not be decoded: {message}",
        /// The insert collided with an existing natural key.
        DuplicateKey {
            /// Constraint name or driver error text.
            message: String,
        } => "natural key already exists: {message}",
        /// The store did not answer before the service deadline.
        Timeout {
            /// Store call that ran out of time.
            operation: String,
        } => "store {operation} timed out",
    }
}

/// Persistence operations shared by every natural-key resource.
#[async_trait]
pub trait ResourceRepository<R: NaturalKeyResource>: Send + Sync {
    /// Fetch every record ordered by natural key.
    async fn list(&self) -> Result<Vec<R::Record>, RepositoryError>;

    /// Insert a prepared record.
    ///
    /// Returns [`RepositoryError::DuplicateKey`] when the natural key is taken.
    async fn insert(&self, record: &R::NewRecord) -> Result<(), RepositoryError>;

    /// Look up the natural key column only, returning the stored value.
    async fn find_key(&self, key: &str) -> Result<Option<String>, RepositoryError>;

    /// Fetch the full record for `key`.
    async fn find(&self, key: &str) -> Result<Option<R::Record>, RepositoryError>;

    /// Delete the record for `key`, returning the number of rows removed.
    async fn delete(&self, key: &str) -> Result<usize, RepositoryError>;
}
