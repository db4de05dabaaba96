//! Natural-key resource abstraction.
//!
//! Users and tasks share one lifecycle: decode a draft, validate required
//! fields, prepare an insert, and address records by a user-facing unique
//! key. [`NaturalKeyResource`] captures the per-resource vocabulary so a single
//! [`crate::domain::ResourceService`] can serve both.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Describes a resource addressed by a natural key.
pub trait NaturalKeyResource: Send + Sync + 'static {
    /// Decoded create payload, before validation.
    type Draft: DeserializeOwned + Send + 'static;
    /// Persistence-ready insert produced by the preparer.
    type NewRecord: Send + Sync + 'static;
    /// Shape returned by list and get.
    type Record: Serialize + Clone + Send + Sync + 'static;

    /// Capitalised label used in confirmations, e.g. `User`.
    const LABEL: &'static str;
    /// Lower-case noun used in failure messages, e.g. `user`.
    const NOUN: &'static str;
    /// Collection route, e.g. `/api/users`.
    const ROUTE: &'static str;
    /// Name of the item path parameter.
    const KEY_PARAM: &'static str;
    /// Message returned when required fields are missing.
    const MISSING_FIELDS: &'static str;
    /// Message returned when the natural key is already taken.
    const CONFLICT: &'static str;

    /// Whether every required field of `draft` is present and non-empty.
    fn is_valid(draft: &Self::Draft) -> bool;

    /// Natural key of a prepared insert.
    fn new_record_key(record: &Self::NewRecord) -> &str;

    /// Natural key of a stored record.
    fn record_key(record: &Self::Record) -> &str;

    /// Item route template, e.g. `/api/users/{username}`.
    #[must_use]
    fn item_route() -> String {
        format!("{}/{{{}}}", Self::ROUTE, Self::KEY_PARAM)
    }
}

/// Marker for the user resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserResource;

/// Marker for the task resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskResource;

/// Decode a required text field, reading `null` as an empty string.
///
/// Explicit nulls then fail validation with the resource's missing-fields
/// message instead of being rejected as malformed JSON.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
