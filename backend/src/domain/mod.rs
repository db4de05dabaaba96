//! Domain primitives, services, and ports.
//!
//! Purpose: define the transport-agnostic core of the service. Records and
//! drafts for users and tasks, the natural-key resource abstraction, the
//! generic [`ResourceService`], and the ports its adapters implement.
//!
//! Public surface:
//! - Error / ErrorCode: domain error taxonomy mapped to HTTP by the inbound layer.
//! - NaturalKeyResource with the UserResource and TaskResource markers.
//! - ResourceService: list, create, get, delete, update for one resource.
//! - CredentialPreparer: hashes user credentials before insertion.

pub mod credentials;
pub mod error;
pub mod ports;
pub mod resource;
pub mod resource_service;
pub mod task;
pub mod trace_id;
pub mod user;

pub use self::credentials::CredentialPreparer;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::resource::{NaturalKeyResource, TaskResource, UserResource};
pub use self::resource_service::{DEFAULT_STORE_TIMEOUT, ResourceService};
pub use self::task::{Task, TaskDraft};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{CredentialHash, NewUser, User, UserDraft};
