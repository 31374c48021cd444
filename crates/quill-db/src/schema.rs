//! Schema bootstrap.
//!
//! The schema is two tables and deliberately has no migrations
//! framework behind it: `ensure_schema` runs idempotent
//! `CREATE TABLE IF NOT EXISTS` statements at startup, the same way
//! every prior deployment of this service has. All columns are TEXT;
//! identifiers and timestamps are generated application-side.

use sqlx::AnyPool;
use tracing::info;

use quill_core::{Error, Result};

const CREATE_USERS: &str = "\
CREATE TABLE IF NOT EXISTS users (
    id         TEXT PRIMARY KEY,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    name       TEXT NOT NULL,
    api_key    TEXT NOT NULL UNIQUE
)";

const CREATE_NOTES: &str = "\
CREATE TABLE IF NOT EXISTS notes (
    id         TEXT PRIMARY KEY,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    note       TEXT NOT NULL,
    user_id    TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE
)";

const CREATE_NOTES_USER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_notes_user_id ON notes(user_id)";

/// Create the `users` and `notes` tables if they do not exist.
///
/// Safe to run on every startup. SQLite and PostgreSQL both accept
/// this dialect unchanged.
pub async fn ensure_schema(pool: &AnyPool) -> Result<()> {
    for statement in [CREATE_USERS, CREATE_NOTES, CREATE_NOTES_USER_INDEX] {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(Error::Database)?;
    }

    info!(
        subsystem = "database",
        component = "schema",
        op = "ensure",
        "Schema ready"
    );
    Ok(())
}
