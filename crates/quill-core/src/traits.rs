//! Core traits for quill abstractions.
//!
//! These traits define the persistence interfaces that concrete
//! implementations must satisfy, enabling pluggable backends and
//! testability.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Note, User};

/// Repository for user records.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a user with a generated id, api_key, and timestamps.
    ///
    /// The returned record is read back from storage after the commit.
    async fn create(&self, name: &str) -> Result<User>;

    /// Resolve an API key to its owning user.
    ///
    /// `api_key` is unique, so this matches at most one record.
    /// Absence is a normal outcome, not an error.
    async fn find_by_api_key(&self, api_key: &str) -> Result<Option<User>>;
}

/// Repository for note records.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Create a note owned by `user_id`.
    ///
    /// The returned record is read back from storage after the commit.
    async fn create(&self, note: &str, user_id: &str) -> Result<Note>;

    /// All notes owned by `user_id`, in storage-natural order.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Note>>;
}
