//! Outbound adapters: PostgreSQL persistence and credential hashing.

pub mod crypto;
pub mod persistence;
