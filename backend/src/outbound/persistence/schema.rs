//! Diesel table definitions.
//!
//! The tables are provisioned outside this service; these definitions only
//! describe the columns the adapters read and write.

diesel::table! {
    /// Registered users. `username` carries a unique constraint.
    users (id) {
        /// Store-assigned serial identifier.
        id -> Int4,
        /// Unique natural key.
        username -> Varchar,
        /// PHC-encoded Argon2id hash of the credential.
        pwhash -> Varchar,
    }
}

diesel::table! {
    /// Tasks keyed by their title.
    tasks (name) {
        /// Task title; primary key.
        name -> Varchar,
        description -> Varchar,
        due_date -> Nullable<Varchar>,
        status -> Varchar,
    }
}
