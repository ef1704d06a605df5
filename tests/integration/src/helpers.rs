//! Test helpers for integration tests
//!
//! Wires a [`ServiceContext`] over the in-memory fixtures and provides
//! shortcuts for seeding users and memos.

use std::sync::Arc;

use anyhow::Result;

use memo_core::entities::{Memo, User, UserRole};
use memo_core::traits::{MemoRepository, UserRepository};
use memo_core::{Requester, Snowflake, SnowflakeGenerator, Visibility};
use memo_service::{ServiceContext, ServiceContextBuilder};

use crate::fixtures::{
    unique_suffix, InMemoryAttachmentRepository, InMemoryMemoRepository,
    InMemoryReactionRepository, InMemoryUserRepository, RecordingWebhookTransport,
};

/// A fully wired service context over in-memory stores
pub struct TestEnv {
    pub ctx: ServiceContext,
    pub memos: Arc<InMemoryMemoRepository>,
    pub reactions: Arc<InMemoryReactionRepository>,
    pub attachments: Arc<InMemoryAttachmentRepository>,
    pub users: Arc<InMemoryUserRepository>,
    pub webhooks: Arc<RecordingWebhookTransport>,
    generator: Arc<SnowflakeGenerator>,
}

impl TestEnv {
    /// Build a fresh environment with empty stores
    pub fn new() -> Result<Self> {
        let memos = Arc::new(InMemoryMemoRepository::new());
        let reactions = Arc::new(InMemoryReactionRepository::new());
        let attachments = Arc::new(InMemoryAttachmentRepository::new());
        let users = Arc::new(InMemoryUserRepository::new());
        let webhooks = Arc::new(RecordingWebhookTransport::new());
        let generator = Arc::new(SnowflakeGenerator::new(0));

        let ctx = ServiceContextBuilder::new()
            .memo_repo(memos.clone())
            .reaction_repo(reactions.clone())
            .attachment_repo(attachments.clone())
            .user_repo(users.clone())
            .webhook_transport(webhooks.clone())
            .snowflake_generator(generator.clone())
            .build()
            .map_err(|e| anyhow::anyhow!("context setup failed: {e}"))?;

        Ok(Self {
            ctx,
            memos,
            reactions,
            attachments,
            users,
            webhooks,
            generator,
        })
    }

    /// Mint a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.generator.generate()
    }

    /// Seed a regular user and return a requester acting as them
    pub async fn create_user(&self) -> Result<(User, Requester)> {
        self.create_user_with_role(UserRole::User).await
    }

    /// Seed a host user and return a requester acting as them
    pub async fn create_host(&self) -> Result<(User, Requester)> {
        self.create_user_with_role(UserRole::Host).await
    }

    async fn create_user_with_role(&self, role: UserRole) -> Result<(User, Requester)> {
        let suffix = unique_suffix();
        let user = User::new(self.generate_id(), format!("testuser{suffix}"), role);
        self.users.create(&user).await?;
        let requester = Requester::from(&user);
        Ok((user, requester))
    }

    /// Seed a memo and return it
    pub async fn create_memo(
        &self,
        creator: &User,
        visibility: Visibility,
        tags: &[&str],
    ) -> Result<Memo> {
        let suffix = unique_suffix();
        let memo = Memo::new(
            self.generate_id(),
            format!("memo-{suffix}"),
            creator.id,
            format!("content {suffix}"),
        )
        .with_visibility(visibility)
        .with_tags(tags.iter().map(ToString::to_string).collect());
        self.memos.create(&memo).await?;
        Ok(memo)
    }
}
