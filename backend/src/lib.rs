//! Todo backend library: users and tasks over PostgreSQL.
//!
//! Layout follows ports and adapters. [`domain`] holds records, errors, the
//! generic resource service, and its ports; [`inbound`] maps HTTP onto the
//! service; [`outbound`] implements the ports with Diesel and Argon2.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[cfg(feature = "test-support")]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
