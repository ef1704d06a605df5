//! In-memory repository fixtures
//!
//! Implement the memo-core repository traits over `parking_lot` locks so
//! service behavior can be exercised without PostgreSQL. Each store has a
//! failure toggle to simulate a broken backend.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use memo_core::entities::{Attachment, Memo, Reaction, User};
use memo_core::traits::{
    AttachmentRepository, MemoRepository, ReactionRepository, RepoResult, UserRepository,
};
use memo_core::{DomainError, Snowflake};
use memo_service::dto::MemoReactedPayload;
use memo_service::WebhookTransport;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

fn backend_down() -> DomainError {
    DomainError::DatabaseError("backend unavailable".to_string())
}

/// In-memory memo store
#[derive(Default)]
pub struct InMemoryMemoRepository {
    memos: RwLock<Vec<Memo>>,
    fail_reads: AtomicBool,
}

impl InMemoryMemoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every read fail until cleared
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    fn check(&self) -> RepoResult<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(backend_down());
        }
        Ok(())
    }
}

#[async_trait]
impl MemoRepository for InMemoryMemoRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Memo>> {
        self.check()?;
        Ok(self.memos.read().iter().find(|m| m.id == id).cloned())
    }

    async fn find_by_uid(&self, uid: &str) -> RepoResult<Option<Memo>> {
        self.check()?;
        Ok(self.memos.read().iter().find(|m| m.uid == uid).cloned())
    }

    async fn find_by_creator(&self, creator_id: Snowflake) -> RepoResult<Vec<Memo>> {
        self.check()?;
        Ok(self
            .memos
            .read()
            .iter()
            .filter(|m| m.creator_id == creator_id)
            .cloned()
            .collect())
    }

    async fn create(&self, memo: &Memo) -> RepoResult<()> {
        self.memos.write().push(memo.clone());
        Ok(())
    }
}

/// In-memory reaction store
///
/// Upsert resolves `(creator_id, content_id, reaction_type)` collisions to
/// the already-stored row, matching the SQL `ON CONFLICT` behavior.
#[derive(Default)]
pub struct InMemoryReactionRepository {
    reactions: RwLock<Vec<Reaction>>,
    fail_reads: AtomicBool,
}

impl InMemoryReactionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    fn check(&self) -> RepoResult<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(backend_down());
        }
        Ok(())
    }
}

#[async_trait]
impl ReactionRepository for InMemoryReactionRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Reaction>> {
        self.check()?;
        Ok(self.reactions.read().iter().find(|r| r.id == id).cloned())
    }

    async fn find_by_content(&self, content_id: &str) -> RepoResult<Vec<Reaction>> {
        self.check()?;
        Ok(self
            .reactions
            .read()
            .iter()
            .filter(|r| r.content_id == content_id)
            .cloned()
            .collect())
    }

    async fn upsert(&self, reaction: &Reaction) -> RepoResult<Reaction> {
        let mut reactions = self.reactions.write();
        if let Some(existing) = reactions.iter().find(|r| {
            r.creator_id == reaction.creator_id
                && r.content_id == reaction.content_id
                && r.reaction_type == reaction.reaction_type
        }) {
            return Ok(existing.clone());
        }
        reactions.push(reaction.clone());
        Ok(reaction.clone())
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        self.reactions.write().retain(|r| r.id != id);
        Ok(())
    }
}

/// In-memory attachment store
#[derive(Default)]
pub struct InMemoryAttachmentRepository {
    attachments: RwLock<Vec<Attachment>>,
    fail_reads: AtomicBool,
}

impl InMemoryAttachmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl AttachmentRepository for InMemoryAttachmentRepository {
    async fn find_by_memo(&self, memo_id: Snowflake) -> RepoResult<Vec<Attachment>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(backend_down());
        }
        Ok(self
            .attachments
            .read()
            .iter()
            .filter(|a| a.memo_id == memo_id)
            .cloned()
            .collect())
    }

    async fn create(&self, attachment: &Attachment) -> RepoResult<()> {
        self.attachments.write().push(attachment.clone());
        Ok(())
    }
}

/// In-memory user store
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        Ok(self.users.read().iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, user: &User) -> RepoResult<()> {
        self.users.write().push(user.clone());
        Ok(())
    }
}

/// Webhook transport that records every delivered payload
#[derive(Default)]
pub struct RecordingWebhookTransport {
    deliveries: RwLock<Vec<MemoReactedPayload>>,
    fail: AtomicBool,
}

impl RecordingWebhookTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every delivery fail until cleared
    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Payloads delivered so far
    pub fn deliveries(&self) -> Vec<MemoReactedPayload> {
        self.deliveries.read().clone()
    }
}

#[async_trait]
impl WebhookTransport for RecordingWebhookTransport {
    async fn deliver(&self, payload: &MemoReactedPayload) -> anyhow::Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            anyhow::bail!("receiver unreachable");
        }
        self.deliveries.write().push(payload.clone());
        Ok(())
    }
}
