//! In-memory store and wiring helpers for integration tests.
//!
//! Enabled with the `test-support` feature. The store honours natural-key
//! uniqueness the way the PostgreSQL constraints do, and can be told to fail
//! so error paths can be driven end to end.

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::ports::{
    CredentialHasher, PassThroughPreparer, RepositoryError, ResourceRepository,
};
use crate::domain::{
    CredentialPreparer, NaturalKeyResource, NewUser, ResourceService, Task, TaskResource, User,
    UserResource,
};
use crate::inbound::http::ApiRoutes;
use crate::outbound::crypto::Argon2CredentialHasher;

/// Resources that can be materialised by [`InMemoryRepository`].
pub trait InMemoryRecord: NaturalKeyResource {
    /// Turn an insert into the stored record; `id` is a fresh serial value.
    fn materialise(record: &Self::NewRecord, id: i32) -> Self::Record;
}

impl InMemoryRecord for UserResource {
    fn materialise(record: &NewUser, id: i32) -> User {
        User::new(id, record.username(), record.hash().as_str())
    }
}

impl InMemoryRecord for TaskResource {
    fn materialise(record: &Task, _id: i32) -> Task {
        record.clone()
    }
}

/// Store keeping records in a vector guarded by a mutex.
pub struct InMemoryRepository<R: InMemoryRecord> {
    rows: Mutex<Vec<R::Record>>,
    next_id: AtomicI32,
    failure: Mutex<Option<RepositoryError>>,
}

impl<R: InMemoryRecord> Default for InMemoryRepository<R> {
    fn default() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
            failure: Mutex::new(None),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<R: InMemoryRecord> InMemoryRepository<R> {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with `err` until cleared.
    pub fn fail_with(&self, err: RepositoryError) {
        *lock(&self.failure) = Some(err);
    }

    /// Stop injecting failures.
    pub fn clear_failure(&self) {
        *lock(&self.failure) = None;
    }

    /// Copy of the stored records in key order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<R::Record> {
        let mut rows = lock(&self.rows).clone();
        rows.sort_by(|a, b| R::record_key(a).cmp(R::record_key(b)));
        rows
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        lock(&self.rows).len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check(&self) -> Result<(), RepositoryError> {
        lock(&self.failure).clone().map_or(Ok(()), Err)
    }
}

#[async_trait]
impl<R: InMemoryRecord> ResourceRepository<R> for InMemoryRepository<R> {
    async fn list(&self) -> Result<Vec<R::Record>, RepositoryError> {
        self.check()?;
        Ok(self.snapshot())
    }

    async fn insert(&self, record: &R::NewRecord) -> Result<(), RepositoryError> {
        self.check()?;
        let key = R::new_record_key(record);
        let mut rows = lock(&self.rows);
        if rows.iter().any(|row| R::record_key(row) == key) {
            return Err(RepositoryError::duplicate_key(format!(
                "{} {key} already stored",
                R::NOUN
            )));
        }
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        rows.push(R::materialise(record, id));
        Ok(())
    }

    async fn find_key(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        Ok(self
            .find(key)
            .await?
            .map(|record| R::record_key(&record).to_owned()))
    }

    async fn find(&self, key: &str) -> Result<Option<R::Record>, RepositoryError> {
        self.check()?;
        Ok(lock(&self.rows)
            .iter()
            .find(|row| R::record_key(row) == key)
            .cloned())
    }

    async fn delete(&self, key: &str) -> Result<usize, RepositoryError> {
        self.check()?;
        let mut rows = lock(&self.rows);
        let before = rows.len();
        rows.retain(|row| R::record_key(row) != key);
        Ok(before - rows.len())
    }
}

/// Route table wired to fresh in-memory stores, plus handles on those stores.
pub struct InMemoryApp {
    /// Routes ready to mount on an `App`.
    pub routes: ApiRoutes,
    /// Backing user store.
    pub users: Arc<InMemoryRepository<UserResource>>,
    /// Backing task store.
    pub tasks: Arc<InMemoryRepository<TaskResource>>,
    /// Hasher used for user credentials.
    pub hasher: Arc<dyn CredentialHasher>,
}

impl InMemoryApp {
    /// Wire services over empty stores with the production Argon2id hasher.
    ///
    /// # Panics
    ///
    /// Panics if the fixed Argon2 parameters are rejected.
    #[must_use]
    pub fn new() -> Self {
        let hasher: Arc<dyn CredentialHasher> = match Argon2CredentialHasher::new() {
            Ok(hasher) => Arc::new(hasher),
            Err(err) => panic!("fixed Argon2 parameters must be valid: {err}"),
        };
        let users = Arc::new(InMemoryRepository::<UserResource>::new());
        let tasks = Arc::new(InMemoryRepository::<TaskResource>::new());
        let routes = ApiRoutes::new(
            ResourceService::<UserResource>::new(
                users.clone(),
                Arc::new(CredentialPreparer::new(Arc::clone(&hasher))),
            ),
            ResourceService::<TaskResource>::new(tasks.clone(), Arc::new(PassThroughPreparer)),
        );
        Self {
            routes,
            users,
            tasks,
            hasher,
        }
    }
}

impl Default for InMemoryApp {
    fn default() -> Self {
        Self::new()
    }
}
