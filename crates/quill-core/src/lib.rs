//! # quill-core
//!
//! Core types, traits, and abstractions for the quill note backend.
//!
//! This crate provides the foundational data structures and trait
//! definitions that the database and API crates depend on.

pub mod auth;
pub mod error;
pub mod ident;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use auth::{
    parse_api_key, API_KEY_SCHEME, MSG_MALFORMED_AUTH_HEADER, MSG_NO_AUTH_HEADER,
    MSG_USER_NOT_FOUND,
};
pub use error::{Error, Result};
pub use ident::{new_api_key, new_entity_id, utc_timestamp, API_KEY_BYTES};
pub use models::{CreateNoteRequest, CreateUserRequest, Note, User};
pub use traits::{NoteRepository, UserRepository};
