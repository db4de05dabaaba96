//! Task records and their create payload.

use serde::{Deserialize, Serialize};

use super::resource::{NaturalKeyResource, TaskResource, null_as_empty};

/// Decoded body of `POST /api/tasks`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TaskDraft {
    /// Unique title; stored in the `name` column.
    #[serde(alias = "name", deserialize_with = "null_as_empty")]
    pub title: String,
    /// Free-text description.
    #[serde(deserialize_with = "null_as_empty")]
    pub description: String,
    /// Optional free-form due date.
    pub due_date: Option<String>,
    /// Open status string such as `open` or `done`.
    #[serde(deserialize_with = "null_as_empty")]
    pub status: String,
}

/// Stored task, also used as the insert shape.
///
/// `due_date` is omitted from the JSON body when absent. A blank due date
/// in the draft is stored as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    title: String,
    description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    due_date: Option<String>,
    status: String,
}

impl Task {
    /// Assemble a task.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: Option<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            due_date: due_date.filter(|value| !value.trim().is_empty()),
            status: status.into(),
        }
    }

    /// Unique title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Free-text description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Due date, if one was given.
    #[must_use]
    pub fn due_date(&self) -> Option<&str> {
        self.due_date.as_deref()
    }

    /// Status string.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }
}

impl From<TaskDraft> for Task {
    fn from(draft: TaskDraft) -> Self {
        Self::new(draft.title, draft.description, draft.due_date, draft.status)
    }
}

impl NaturalKeyResource for TaskResource {
    type Draft = TaskDraft;
    type NewRecord = Task;
    type Record = Task;

    const LABEL: &'static str = "Task";
    const NOUN: &'static str = "task";
    const ROUTE: &'static str = "/api/tasks";
    const KEY_PARAM: &'static str = "taskname";
    const MISSING_FIELDS: &'static str = "Missing one or more fields: title, description, status";
    const CONFLICT: &'static str = "Task name already exists";

    fn is_valid(draft: &TaskDraft) -> bool {
        !draft.title.is_empty() && !draft.description.is_empty() && !draft.status.is_empty()
    }

    fn new_record_key(record: &Task) -> &str {
        record.title()
    }

    fn record_key(record: &Task) -> &str {
        record.title()
    }
}
