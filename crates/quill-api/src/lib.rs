//! quill-api - HTTP API server for the quill note backend.
//!
//! Router construction lives here so integration tests can stand up
//! the exact production app against a scratch database; `main.rs`
//! only does environment wiring.

pub mod auth;
pub mod error;
pub mod handlers;

use std::path::PathBuf;

use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use uuid::Uuid;

use quill_db::Database;

/// Generates time-ordered UUIDv7 request correlation IDs.
///
/// UUIDv7 embeds a Unix timestamp, so IDs sort chronologically —
/// useful for log correlation when debugging production incidents.
#[derive(Clone, Default)]
struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Process-scoped database handle; the pool scopes one connection
    /// per request internally.
    pub db: Database,
    /// Directory holding index.html and other static assets.
    pub static_dir: PathBuf,
}

/// Build the application router.
///
/// `/static` is mounted only when the directory actually exists, so a
/// backend-only deployment starts cleanly without one.
pub fn router(state: AppState) -> Router {
    let mut app = Router::new()
        .route("/v1/healthz", get(handlers::healthz))
        .route(
            "/v1/users",
            get(handlers::get_user).post(handlers::create_user),
        )
        .route(
            "/v1/notes",
            get(handlers::list_notes).post(handlers::create_note),
        )
        .route("/", get(handlers::index));

    if state.static_dir.is_dir() {
        app = app.nest_service("/static", ServeDir::new(&state.static_dir));
    }

    app.layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer(
            // Mirrors the historical deployment: any origin, no
            // credentials, so the permissive wildcard is safe.
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers(Any),
        )
        .with_state(state)
}
