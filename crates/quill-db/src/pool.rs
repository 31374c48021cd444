//! Database connection pool management.
//!
//! Pools are built on sqlx's `Any` driver so a single `DATABASE_URL`
//! can point at a local SQLite file or a network-addressable
//! PostgreSQL server. Connection strings are normalized first; the
//! deployment environment historically handed out `file:` and bare
//! `sqlite:` URLs.

use std::sync::Once;
use std::time::{Duration, Instant};

use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;
use sqlx::Executor;
use tracing::{debug, info, warn};

use quill_core::{Error, Result};

/// Default maximum number of connections in the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Default connection timeout in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Default idle timeout in seconds.
pub const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600;

static INSTALL_DRIVERS: Once = Once::new();

/// Pool configuration options.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Maximum number of connections in the pool.
    pub max_connections: u32,
    /// Minimum number of connections to maintain.
    pub min_connections: u32,
    /// Connection timeout duration.
    pub connect_timeout: Duration,
    /// Idle connection timeout duration.
    pub idle_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            min_connections: 1,
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            idle_timeout: Duration::from_secs(DEFAULT_IDLE_TIMEOUT_SECS),
        }
    }
}

impl PoolConfig {
    /// Create a new pool configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of connections.
    pub fn max_connections(mut self, n: u32) -> Self {
        self.max_connections = n;
        self
    }

    /// Set the minimum number of connections.
    pub fn min_connections(mut self, n: u32) -> Self {
        self.min_connections = n;
        self
    }

    /// Set the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
}

/// Rewrite legacy connection-string forms into URLs sqlx understands.
///
/// - `file:notes.db` becomes `sqlite://notes.db`
/// - `sqlite:notes.db` (no slashes) becomes `sqlite://notes.db`
/// - SQLite URLs without a query string gain `?mode=rwc` so the
///   database file is created on first run (`:memory:` excepted)
/// - everything else (postgres://, already-normalized sqlite://)
///   passes through untouched
pub fn normalize_database_url(url: &str) -> String {
    let url = if let Some(path) = url.strip_prefix("file:") {
        format!("sqlite://{}", path)
    } else if url.starts_with("sqlite:") && !url.starts_with("sqlite://") {
        format!("sqlite://{}", &url["sqlite:".len()..])
    } else {
        url.to_string()
    };

    if is_sqlite_url(&url) && !url.contains('?') && !url.contains(":memory:") {
        format!("{}?mode=rwc", url)
    } else {
        url
    }
}

/// Whether a (normalized) connection string targets SQLite.
pub fn is_sqlite_url(url: &str) -> bool {
    url.starts_with("sqlite:")
}

/// Create a new connection pool with default configuration.
pub async fn create_pool(database_url: &str) -> Result<AnyPool> {
    create_pool_with_config(database_url, PoolConfig::default()).await
}

/// Create a new connection pool with custom configuration.
pub async fn create_pool_with_config(database_url: &str, config: PoolConfig) -> Result<AnyPool> {
    INSTALL_DRIVERS.call_once(sqlx::any::install_default_drivers);

    let url = normalize_database_url(database_url);
    let start = Instant::now();

    info!(
        subsystem = "database",
        component = "pool",
        op = "create",
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        connect_timeout_secs = config.connect_timeout.as_secs(),
        sqlite = is_sqlite_url(&url),
        "Creating database connection pool"
    );

    let mut options = AnyPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.connect_timeout)
        .idle_timeout(config.idle_timeout);

    // SQLite ships with foreign-key enforcement off per connection;
    // the notes.user_id cascade depends on it.
    if is_sqlite_url(&url) {
        options = options.after_connect(|conn, _meta| {
            Box::pin(async move {
                conn.execute("PRAGMA foreign_keys = ON").await?;
                Ok(())
            })
        });
    }

    let pool = options.connect(&url).await.map_err(Error::Database)?;

    info!(
        subsystem = "database",
        component = "pool",
        op = "established",
        pool_size = pool.size(),
        pool_idle = pool.num_idle(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Database connection pool established"
    );
    Ok(pool)
}

/// Log current pool health metrics.
pub fn log_pool_metrics(pool: &AnyPool) {
    let size = pool.size();
    let idle = pool.num_idle();

    debug!(
        subsystem = "database",
        component = "pool",
        op = "metrics",
        pool_size = size,
        pool_idle = idle,
        "Pool health check"
    );

    if idle == 0 && size > 0 {
        warn!(
            subsystem = "database",
            component = "pool",
            pool_size = size,
            "Connection pool has no idle connections"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_max_connections() {
        assert_eq!(DEFAULT_MAX_CONNECTIONS, 10);
    }

    #[test]
    fn test_pool_config_builder() {
        let config = PoolConfig::new()
            .max_connections(20)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(60));

        assert_eq!(config.max_connections, 20);
        assert_eq!(config.min_connections, 5);
        assert_eq!(config.connect_timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_normalize_file_url() {
        assert_eq!(
            normalize_database_url("file:notes.db"),
            "sqlite://notes.db?mode=rwc"
        );
    }

    #[test]
    fn test_normalize_bare_sqlite_url() {
        assert_eq!(
            normalize_database_url("sqlite:notes.db"),
            "sqlite://notes.db?mode=rwc"
        );
    }

    #[test]
    fn test_normalize_leaves_full_sqlite_url_query_alone() {
        assert_eq!(
            normalize_database_url("sqlite://notes.db?mode=ro"),
            "sqlite://notes.db?mode=ro"
        );
    }

    #[test]
    fn test_normalize_leaves_memory_url_alone() {
        assert_eq!(
            normalize_database_url("sqlite://:memory:"),
            "sqlite://:memory:"
        );
    }

    #[test]
    fn test_normalize_passes_postgres_through() {
        assert_eq!(
            normalize_database_url("postgres://localhost/quill"),
            "postgres://localhost/quill"
        );
    }

    #[test]
    fn test_is_sqlite_url() {
        assert!(is_sqlite_url("sqlite://notes.db"));
        assert!(!is_sqlite_url("postgres://localhost/quill"));
    }
}
