//! Translation of pool and Diesel failures into [`RepositoryError`].
//!
//! Driver text is kept in the error for logging; the service layer decides
//! what reaches clients.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;
use crate::domain::ports::RepositoryError;

/// Map a pool failure to a connection error.
pub(super) fn map_pool_error(error: PoolError) -> RepositoryError {
    debug!(error = %error, "connection checkout failed");
    RepositoryError::connection(error.message())
}

/// Map a Diesel failure, singling out unique-constraint violations.
pub(super) fn map_diesel_error(error: DieselError) -> RepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            RepositoryError::duplicate_key(info.constraint_name().unwrap_or(info.message()))
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            RepositoryError::connection(info.message())
        }
        DieselError::DatabaseError(_, info) => RepositoryError::query(info.message()),
        DieselError::DeserializationError(err) => RepositoryError::decode(err.to_string()),
        other => RepositoryError::query(other.to_string()),
    }
}
