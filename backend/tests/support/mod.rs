//! Shared helpers for integration tests that need PostgreSQL.
//!
//! Diesel suites run only when `TODO_TEST_DATABASE_URL` points at a server
//! the tests may create schemas in. Each test gets its own schema so suites
//! can run in parallel against one database.

use diesel_async::RunQueryDsl;
use todo_backend::outbound::persistence::{DbPool, PoolConfig};
use uuid::Uuid;

/// Environment variable naming the test database.
pub const TEST_DATABASE_URL: &str = "TODO_TEST_DATABASE_URL";

/// Returns the configured test database URL, if any.
pub fn test_database_url() -> Option<String> {
    std::env::var(TEST_DATABASE_URL)
        .ok()
        .filter(|url| !url.trim().is_empty())
}

const TABLES: [&str; 2] = [
    "CREATE TABLE users (
        id SERIAL PRIMARY KEY,
        username VARCHAR NOT NULL UNIQUE,
        pwhash VARCHAR NOT NULL
    )",
    "CREATE TABLE tasks (
        name VARCHAR PRIMARY KEY,
        description VARCHAR NOT NULL,
        due_date VARCHAR NULL,
        status VARCHAR NOT NULL
    )",
];

/// Open a single-connection pool whose search path is a fresh schema
/// holding empty `users` and `tasks` tables.
///
/// The pool keeps exactly one connection, so the `search_path` set here
/// applies to every later checkout.
pub async fn isolated_pool(database_url: &str) -> DbPool {
    let config = PoolConfig::new(database_url)
        .with_max_size(1)
        .with_min_idle(Some(1));
    let pool = DbPool::new(config).await.expect("test pool");
    let schema = format!("todo_test_{}", Uuid::new_v4().simple());

    let mut conn = pool.get().await.expect("checkout");
    for statement in [
        format!("CREATE SCHEMA {schema}"),
        format!("SET search_path TO {schema}"),
    ]
    .into_iter()
    .chain(TABLES.map(str::to_owned))
    {
        diesel::sql_query(statement)
            .execute(&mut conn)
            .await
            .expect("schema setup");
    }
    drop(conn);
    pool
}
