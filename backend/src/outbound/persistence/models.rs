//! Internal Diesel row structs.
//!
//! Row types never leave the persistence layer; repositories convert them
//! into domain records.

use diesel::prelude::*;

use super::schema::{tasks, users};
use crate::domain::{Task, User};

/// Row read from `users`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub username: String,
    pub pwhash: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self::new(row.id, row.username, row.pwhash)
    }
}

/// Insert into `users`; the id comes from the serial column.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub username: &'a str,
    pub pwhash: &'a str,
}

/// Row read from `tasks`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TaskRow {
    pub name: String,
    pub description: String,
    pub due_date: Option<String>,
    pub status: String,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Self::new(row.name, row.description, row.due_date, row.status)
    }
}

/// Insert into `tasks`.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub(crate) struct NewTaskRow<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub due_date: Option<&'a str>,
    pub status: &'a str,
}

impl<'a> From<&'a Task> for NewTaskRow<'a> {
    fn from(task: &'a Task) -> Self {
        Self {
            name: task.title(),
            description: task.description(),
            due_date: task.due_date(),
            status: task.status(),
        }
    }
}
