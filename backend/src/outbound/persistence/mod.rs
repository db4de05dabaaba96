//! PostgreSQL persistence adapters using Diesel.
//!
//! Repositories translate between Diesel rows and domain records and map
//! driver failures into [`crate::domain::ports::RepositoryError`]. Row
//! models and the schema stay private to this module.
//!
//! # Example
//!
//! ```ignore
//! use todo_backend::outbound::persistence::{DbPool, DieselTaskRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/todo")).await?;
//! let tasks = DieselTaskRepository::new(pool);
//! ```

mod diesel_task_repository;
mod diesel_user_repository;
mod error_mapping;
mod models;
mod pool;
mod schema;

pub use diesel_task_repository::DieselTaskRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
