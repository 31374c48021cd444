//! # quill-db
//!
//! Database layer for the quill note backend.
//!
//! This crate provides:
//! - Connection pool management over sqlx's `Any` driver, so one
//!   `DATABASE_URL` covers a local SQLite file or a PostgreSQL server
//! - Repository implementations for users and notes
//! - Idempotent schema bootstrap (no migrations framework)
//!
//! ## Example
//!
//! ```rust,ignore
//! use quill_db::Database;
//! use quill_core::{NoteRepository, UserRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("sqlite://quill.db").await?;
//!     db.ensure_schema().await?;
//!
//!     let user = db.users.create("Alice").await?;
//!     let note = db.notes.create("Hello, world!", &user.id).await?;
//!     println!("Created note: {}", note.id);
//!     Ok(())
//! }
//! ```

pub mod notes;
pub mod pool;
pub mod schema;
pub mod users;

// Re-export core types
pub use quill_core::*;

// Re-export repository implementations
pub use notes::SqlNoteRepository;
pub use pool::{
    create_pool, create_pool_with_config, is_sqlite_url, log_pool_metrics,
    normalize_database_url, PoolConfig,
};
pub use schema::ensure_schema;
pub use users::SqlUserRepository;

/// Combined database context with all repositories.
///
/// One `Database` (and its pool) is created at process start and
/// shared; handlers reach storage only through the repositories, and
/// the pool scopes one connection per request under the hood.
#[derive(Clone)]
pub struct Database {
    /// The underlying connection pool.
    pub pool: sqlx::AnyPool,
    /// User repository for registration and key lookup.
    pub users: SqlUserRepository,
    /// Note repository for per-user note CRUD.
    pub notes: SqlNoteRepository,
}

impl Database {
    /// Create a new Database instance from a connection pool.
    pub fn new(pool: sqlx::AnyPool) -> Self {
        Self {
            users: SqlUserRepository::new(pool.clone()),
            notes: SqlNoteRepository::new(pool.clone()),
            pool,
        }
    }

    /// Create a new Database instance by connecting to the given URL.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = create_pool(url).await?;
        Ok(Self::new(pool))
    }

    /// Create with custom pool configuration.
    pub async fn connect_with_config(url: &str, config: PoolConfig) -> Result<Self> {
        let pool = create_pool_with_config(url, config).await?;
        Ok(Self::new(pool))
    }

    /// Create the schema if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<()> {
        schema::ensure_schema(&self.pool).await
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &sqlx::AnyPool {
        &self.pool
    }
}
