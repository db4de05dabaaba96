//! OpenAPI schema definitions for domain records and drafts.
//!
//! Domain types stay free of utoipa; these mirrors describe their wire
//! shape for the generated document.

use utoipa::ToSchema;

/// Stored user as returned by list and get.
#[derive(ToSchema)]
#[schema(as = User)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct UserSchema {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    id: i32,
    /// Unique username.
    #[schema(example = "ada")]
    username: String,
    /// PHC-encoded Argon2id credential hash.
    #[schema(example = "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA")]
    hash: String,
}

/// Body of `POST /api/users`.
#[derive(ToSchema)]
#[schema(as = UserDraft)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct UserDraftSchema {
    /// Requested username.
    #[schema(example = "ada")]
    username: String,
    /// Plaintext credential; hashed before storage. `password` is accepted too.
    #[schema(example = "correct horse")]
    hash: String,
}

/// Task as returned by list and get.
#[derive(ToSchema)]
#[schema(as = Task)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct TaskSchema {
    /// Unique title.
    #[schema(example = "t1")]
    title: String,
    /// Free-text description.
    #[schema(example = "write the report")]
    description: String,
    /// Optional free-form due date; omitted when absent.
    #[schema(example = "2026-11-01")]
    due_date: Option<String>,
    /// Open status string.
    #[schema(example = "open")]
    status: String,
}

/// Body of `POST /api/tasks`.
#[derive(ToSchema)]
#[schema(as = TaskDraft)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct TaskDraftSchema {
    /// Unique title.
    #[schema(example = "t1")]
    title: String,
    /// Free-text description.
    #[schema(example = "write the report")]
    description: String,
    /// Optional free-form due date.
    due_date: Option<String>,
    /// Open status string.
    #[schema(example = "open")]
    status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::PartialSchema;

    fn schema_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[rstest]
    fn schema_names_match_domain_types() {
        assert_eq!(UserSchema::name(), "User");
        assert_eq!(UserDraftSchema::name(), "UserDraft");
        assert_eq!(TaskSchema::name(), "Task");
        assert_eq!(TaskDraftSchema::name(), "TaskDraft");
    }

    #[rstest]
    fn user_schema_lists_wire_fields() {
        let json = schema_json::<UserSchema>();
        for field in ["id", "username", "hash"] {
            assert!(json.contains(field), "missing {field}");
        }
    }

    #[rstest]
    fn task_schema_makes_due_date_optional() {
        let json: serde_json::Value =
            serde_json::from_str(&schema_json::<TaskSchema>()).expect("schema json");
        let required = json["required"].as_array().expect("required list");
        assert!(!required.iter().any(|name| name == "due_date"));
        assert!(required.iter().any(|name| name == "title"));
    }
}
