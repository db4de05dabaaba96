//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod health;
pub mod resources;
pub mod routes;
pub mod schemas;
pub mod tasks;
pub mod users;

pub use error::{ApiResult, ErrorBody};
pub use routes::{ApiRoutes, default_service};
