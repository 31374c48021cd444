//! User repository implementation.

use async_trait::async_trait;
use sqlx::any::AnyRow;
use sqlx::AnyPool;
use sqlx::Row;
use tracing::debug;

use quill_core::{ident, Error, Result, User, UserRepository};

/// sqlx-backed implementation of UserRepository.
#[derive(Clone)]
pub struct SqlUserRepository {
    pool: AnyPool,
}

impl SqlUserRepository {
    /// Create a new SqlUserRepository with the given connection pool.
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }
}

fn map_row(row: AnyRow) -> Result<User> {
    Ok(User {
        id: row.try_get("id").map_err(Error::Database)?,
        created_at: row.try_get("created_at").map_err(Error::Database)?,
        updated_at: row.try_get("updated_at").map_err(Error::Database)?,
        name: row.try_get("name").map_err(Error::Database)?,
        api_key: row.try_get("api_key").map_err(Error::Database)?,
    })
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn create(&self, name: &str) -> Result<User> {
        let id = ident::new_entity_id();
        let api_key = ident::new_api_key();
        let now = ident::utc_timestamp();

        sqlx::query(
            "INSERT INTO users (id, created_at, updated_at, name, api_key) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&id)
        .bind(&now)
        .bind(&now)
        .bind(name)
        .bind(&api_key)
        .execute(&self.pool)
        .await?;

        // Read back so the returned record reflects stored state.
        let row = sqlx::query("SELECT id, created_at, updated_at, name, api_key FROM users WHERE id = $1")
            .bind(&id)
            .fetch_one(&self.pool)
            .await?;

        debug!(
            subsystem = "database",
            component = "users",
            op = "create",
            user_id = %id,
            "User created"
        );

        map_row(row)
    }

    async fn find_by_api_key(&self, api_key: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            "SELECT id, created_at, updated_at, name, api_key FROM users WHERE api_key = $1",
        )
        .bind(api_key)
        .fetch_optional(&self.pool)
        .await?;

        row.map(map_row).transpose()
    }
}
