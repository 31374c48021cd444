//! Route handlers.

use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::Json;
use tracing::info;

use quill_core::{CreateNoteRequest, CreateUserRequest, Note, NoteRepository, User, UserRepository};

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::AppState;

/// Liveness probe.
pub async fn healthz() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Register a new user and issue its API key.
///
/// The response is the only time the key is ever shown; there is no
/// rotation or recovery path.
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<Json<User>, ApiError> {
    let user = state.db.users.create(&req.name).await?;

    info!(
        subsystem = "api",
        component = "users",
        op = "create",
        user_id = %user.id,
        "User registered"
    );

    Ok(Json(user))
}

/// Return the authenticated caller's own record ("whoami").
pub async fn get_user(AuthUser(user): AuthUser) -> Json<User> {
    Json(user)
}

/// Create a note owned by the authenticated caller.
pub async fn create_note(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(req): Json<CreateNoteRequest>,
) -> Result<Json<Note>, ApiError> {
    let note = state.db.notes.create(&req.note, &user.id).await?;

    info!(
        subsystem = "api",
        component = "notes",
        op = "create",
        note_id = %note.id,
        user_id = %user.id,
        "Note created"
    );

    Ok(Json(note))
}

/// List all notes owned by the authenticated caller.
pub async fn list_notes(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Note>>, ApiError> {
    let notes = state.db.notes.list_for_user(&user.id).await?;
    Ok(Json(notes))
}

/// Serve the front-end entry point, if one is deployed alongside.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let index_path = state.static_dir.join("index.html");
    match tokio::fs::read_to_string(&index_path).await {
        Ok(contents) => Ok(Html(contents)),
        Err(_) => Err(ApiError::NotFound("index.html not found".to_string())),
    }
}
