//! Process entry point: environment wiring and startup.

use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quill_api::{router, AppState};
use quill_db::Database;

/// Listen port used when PORT is unset or unparseable.
const DEFAULT_PORT: u16 = 8080;

/// Resolve the listen port from a raw PORT value.
///
/// A value that does not parse as a port is a misconfiguration worth
/// surfacing, so the fallback is logged rather than silent.
fn resolve_port(raw: Option<String>) -> u16 {
    match raw {
        None => DEFAULT_PORT,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(
                port = %raw,
                fallback = DEFAULT_PORT,
                "PORT is not a valid port number, using fallback"
            );
            DEFAULT_PORT
        }),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with configurable output
    //
    // Environment variables:
    //   LOG_FORMAT - "json" or "text" (default: "text")
    //   RUST_LOG   - standard env filter (default: "quill_api=debug,tower_http=debug")
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "quill_api=debug,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(env_filter);
    if log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    info!(log_format = %log_format, "Logging initialized");

    // Get configuration from environment
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://quill.db".to_string());
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = resolve_port(std::env::var("PORT").ok());
    let static_dir =
        PathBuf::from(std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()));

    // Connect to database and bootstrap the schema
    info!("Connecting to database...");
    let db = Database::connect(&database_url).await?;
    db.ensure_schema().await?;
    info!("Database ready");

    // Build router
    let state = AppState { db, static_dir };
    let app = router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
