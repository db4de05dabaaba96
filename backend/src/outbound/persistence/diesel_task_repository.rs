//! PostgreSQL-backed store for tasks.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewTaskRow, TaskRow};
use super::pool::DbPool;
use super::schema::tasks;
use crate::domain::ports::{RepositoryError, ResourceRepository};
use crate::domain::{Task, TaskResource};

/// Diesel implementation of the task store.
#[derive(Clone)]
pub struct DieselTaskRepository {
    pool: DbPool,
}

impl DieselTaskRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResourceRepository<TaskResource> for DieselTaskRepository {
    async fn list(&self) -> Result<Vec<Task>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<TaskRow> = tasks::table
            .select(TaskRow::as_select())
            .order(tasks::name.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Task::from).collect())
    }

    async fn insert(&self, record: &Task) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(tasks::table)
            .values(NewTaskRow::from(record))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_key(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let found: Option<String> = tasks::table
            .find(key)
            .select(tasks::name)
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(found)
    }

    async fn find(&self, key: &str) -> Result<Option<Task>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<TaskRow> = tasks::table
            .find(key)
            .select(TaskRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Task::from))
    }

    async fn delete(&self, key: &str) -> Result<usize, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(tasks::table.find(key))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)
    }
}
