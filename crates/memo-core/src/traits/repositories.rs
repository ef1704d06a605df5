//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Individual reads and writes are assumed
//! atomic at the store boundary; this core holds no locks of its own.

use async_trait::async_trait;

use crate::entities::{Attachment, Memo, Reaction, User};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Memo Repository
// ============================================================================

#[async_trait]
pub trait MemoRepository: Send + Sync {
    /// Find memo by internal ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Memo>>;

    /// Find memo by its stable UID
    async fn find_by_uid(&self, uid: &str) -> RepoResult<Option<Memo>>;

    /// List all memos created by a user, regardless of visibility
    ///
    /// Visibility filtering is the caller's concern; this returns the full
    /// candidate set.
    async fn find_by_creator(&self, creator_id: Snowflake) -> RepoResult<Vec<Memo>>;

    /// Create a new memo
    async fn create(&self, memo: &Memo) -> RepoResult<()>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find reaction by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Reaction>>;

    /// Get all reactions targeting a content item
    async fn find_by_content(&self, content_id: &str) -> RepoResult<Vec<Reaction>>;

    /// Insert or replace under the `(creator_id, content_id, reaction_type)`
    /// natural key, returning the stored row
    ///
    /// Concurrent upserts of the same key resolve to a single logical
    /// reaction through the store's upsert semantics.
    async fn upsert(&self, reaction: &Reaction) -> RepoResult<Reaction>;

    /// Remove a reaction
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Attachment Repository
// ============================================================================

#[async_trait]
pub trait AttachmentRepository: Send + Sync {
    /// Find attachments for a memo
    async fn find_by_memo(&self, memo_id: Snowflake) -> RepoResult<Vec<Attachment>>;

    /// Create a new attachment record
    async fn create(&self, attachment: &Attachment) -> RepoResult<()>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Create a new user
    async fn create(&self, user: &User) -> RepoResult<()>;
}
