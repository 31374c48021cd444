//! Boundary types for the quill API.
//!
//! Request types are what clients POST; output types mirror the stored
//! rows one-to-one. Timestamps are ISO-8601 UTC strings fixed at
//! creation time (no update path exists, so `updated_at` never moves).

use serde::{Deserialize, Serialize};

/// A registered user.
///
/// The output schema intentionally includes `api_key`: the key is
/// issued exactly once at registration and this response is the only
/// place the client ever sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque UUIDv4 identifier, generated application-side.
    pub id: String,
    /// ISO-8601 UTC creation timestamp.
    pub created_at: String,
    /// ISO-8601 UTC timestamp, equal to `created_at` in practice.
    pub updated_at: String,
    /// Free-text display name.
    pub name: String,
    /// Hex-encoded 256-bit secret, the sole credential.
    pub api_key: String,
}

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
}

/// A note owned by a single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Opaque UUIDv4 identifier, generated application-side.
    pub id: String,
    /// ISO-8601 UTC creation timestamp.
    pub created_at: String,
    /// ISO-8601 UTC timestamp, equal to `created_at` in practice.
    pub updated_at: String,
    /// Free-text note body.
    pub note: String,
    /// Owning user's id (cascade-deleted with the user).
    pub user_id: String,
}

/// Note creation request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNoteRequest {
    pub note: String,
}
