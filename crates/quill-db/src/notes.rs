//! Note repository implementation.

use async_trait::async_trait;
use sqlx::any::AnyRow;
use sqlx::AnyPool;
use sqlx::Row;
use tracing::debug;

use quill_core::{ident, Error, Note, NoteRepository, Result};

/// sqlx-backed implementation of NoteRepository.
#[derive(Clone)]
pub struct SqlNoteRepository {
    pool: AnyPool,
}

impl SqlNoteRepository {
    /// Create a new SqlNoteRepository with the given connection pool.
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }
}

fn map_row(row: AnyRow) -> Result<Note> {
    Ok(Note {
        id: row.try_get("id").map_err(Error::Database)?,
        created_at: row.try_get("created_at").map_err(Error::Database)?,
        updated_at: row.try_get("updated_at").map_err(Error::Database)?,
        note: row.try_get("note").map_err(Error::Database)?,
        user_id: row.try_get("user_id").map_err(Error::Database)?,
    })
}

#[async_trait]
impl NoteRepository for SqlNoteRepository {
    async fn create(&self, note: &str, user_id: &str) -> Result<Note> {
        let id = ident::new_entity_id();
        let now = ident::utc_timestamp();

        sqlx::query(
            "INSERT INTO notes (id, created_at, updated_at, note, user_id) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&id)
        .bind(&now)
        .bind(&now)
        .bind(note)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        // Read back so the returned record reflects stored state.
        let row = sqlx::query(
            "SELECT id, created_at, updated_at, note, user_id FROM notes WHERE id = $1",
        )
        .bind(&id)
        .fetch_one(&self.pool)
        .await?;

        debug!(
            subsystem = "database",
            component = "notes",
            op = "create",
            note_id = %id,
            user_id = %user_id,
            "Note created"
        );

        map_row(row)
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Note>> {
        let rows = sqlx::query(
            "SELECT id, created_at, updated_at, note, user_id FROM notes WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(map_row).collect()
    }
}
