//! Generic CRUD service over a natural-key resource.
//!
//! [`ResourceService`] turns store and preparation failures into domain
//! [`Error`]s with client-safe messages. Raw store text is logged and never
//! returned. Every store call is bounded by the configured deadline.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info};

use super::Error;
use super::ports::{DraftPreparer, RepositoryError, ResourceRepository};
use super::resource::NaturalKeyResource;

/// Deadline applied to each store call unless overridden.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(30);

/// List, create, get, delete, and update for one resource type.
pub struct ResourceService<R: NaturalKeyResource> {
    repository: Arc<dyn ResourceRepository<R>>,
    preparer: Arc<dyn DraftPreparer<R>>,
    store_timeout: Duration,
}

impl<R: NaturalKeyResource> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            preparer: Arc::clone(&self.preparer),
            store_timeout: self.store_timeout,
        }
    }
}

impl<R: NaturalKeyResource> ResourceService<R> {
    /// Wire a service from its store and preparer.
    pub fn new(
        repository: Arc<dyn ResourceRepository<R>>,
        preparer: Arc<dyn DraftPreparer<R>>,
    ) -> Self {
        Self {
            repository,
            preparer,
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    /// Override the per-call store deadline.
    #[must_use]
    pub fn with_store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = timeout;
        self
    }

    /// Base route served by this service, e.g. `/api/users`.
    #[must_use]
    pub fn service_name(&self) -> &'static str {
        R::ROUTE
    }

    async fn bounded<T, F>(&self, operation: &'static str, call: F) -> Result<T, RepositoryError>
    where
        F: Future<Output = Result<T, RepositoryError>>,
    {
        tokio::time::timeout(self.store_timeout, call)
            .await
            .unwrap_or_else(|_| Err(RepositoryError::timeout(operation)))
    }

    /// Every record, ordered by natural key.
    ///
    /// # Errors
    ///
    /// Returns an internal error when the query or row decoding fails.
    pub async fn list(&self) -> Result<Vec<R::Record>, Error> {
        let records = self
            .bounded("list", self.repository.list())
            .await
            .map_err(|err| {
                error!(resource = R::NOUN, error = %err, "listing failed");
                match err {
                    RepositoryError::Decode { .. } => {
                        Error::internal(format!("Error reading {} values", R::NOUN))
                    }
                    _ => Error::internal("Error executing query"),
                }
            })?;
        debug!(resource = R::NOUN, count = records.len(), "listed records");
        Ok(records)
    }

    /// Validate, prepare, and insert `draft`.
    ///
    /// Returns the confirmation message on success.
    ///
    /// # Errors
    ///
    /// - invalid request when a required field is missing or empty
    /// - conflict when the natural key is taken
    /// - internal error when preparation or the insert fails
    pub async fn create(&self, draft: R::Draft) -> Result<String, Error> {
        if !R::is_valid(&draft) {
            return Err(Error::invalid_request(R::MISSING_FIELDS));
        }

        let record = self.preparer.prepare(draft).await?;
        let key = R::new_record_key(&record);

        match self.bounded("insert", self.repository.insert(&record)).await {
            Ok(()) => {
                info!(resource = R::NOUN, key, "record created");
                Ok(format!("{} {key} created", R::LABEL))
            }
            Err(RepositoryError::DuplicateKey { .. }) => {
                debug!(resource = R::NOUN, key, "natural key already taken");
                Err(Error::conflict(R::CONFLICT))
            }
            Err(err) => {
                error!(resource = R::NOUN, key, error = %err, "insert failed");
                Err(Error::internal(format!("Error creating {}", R::NOUN)))
            }
        }
    }

    /// Remove the record addressed by `key`.
    ///
    /// # Errors
    ///
    /// - not found when no record carries `key`
    /// - internal error when the lookup or the delete fails
    pub async fn delete(&self, key: &str) -> Result<String, Error> {
        let delete_failed = || Error::internal(format!("Could not delete {} {key}", R::NOUN));

        match self.bounded("lookup", self.repository.find_key(key)).await {
            Ok(Some(found)) if !found.is_empty() => {}
            Ok(_) => return Err(self.missing(key)),
            Err(err) => {
                error!(resource = R::NOUN, key, error = %err, "lookup before delete failed");
                return Err(delete_failed());
            }
        }

        let removed = self
            .bounded("delete", self.repository.delete(key))
            .await
            .map_err(|err| {
                error!(resource = R::NOUN, key, error = %err, "delete failed");
                delete_failed()
            })?;
        info!(resource = R::NOUN, key, removed, "record deleted");
        Ok(format!("{} {key} deleted", R::LABEL))
    }

    /// Fetch the record addressed by `key`.
    ///
    /// # Errors
    ///
    /// - not found when no record carries `key`
    /// - internal error when the lookup fails
    pub async fn get(&self, key: &str) -> Result<R::Record, Error> {
        self.bounded("find", self.repository.find(key))
            .await
            .map_err(|err| {
                error!(resource = R::NOUN, key, error = %err, "lookup failed");
                Error::internal(format!("Error reading {} values", R::NOUN))
            })?
            .ok_or_else(|| self.missing(key))
    }

    /// Updating records is not supported.
    ///
    /// # Errors
    ///
    /// Always returns a not-implemented error naming the resource and key.
    pub fn update(&self, key: &str) -> Result<R::Record, Error> {
        debug!(resource = R::NOUN, key, route = self.service_name(), "update rejected");
        Err(Error::not_implemented(format!(
            "Updating {} {key} is not implemented",
            R::NOUN
        )))
    }

    fn missing(&self, key: &str) -> Error {
        debug!(resource = R::NOUN, key, route = self.service_name(), "record not found");
        Error::not_found(format!("{} {key} does not exist", R::LABEL))
    }
}
