//! Service context - dependency container for services
//!
//! Holds the repositories, the webhook transport, and the ID generator
//! needed by services.

use std::sync::Arc;

use memo_core::traits::{
    AttachmentRepository, MemoRepository, ReactionRepository, UserRepository,
};
use memo_core::SnowflakeGenerator;

use super::webhook::WebhookTransport;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - Webhook delivery transport
/// - Snowflake generator for ID generation
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    memo_repo: Arc<dyn MemoRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,
    attachment_repo: Arc<dyn AttachmentRepository>,
    user_repo: Arc<dyn UserRepository>,

    // Outbound webhook delivery
    webhook_transport: Arc<dyn WebhookTransport>,

    // Services
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        memo_repo: Arc<dyn MemoRepository>,
        reaction_repo: Arc<dyn ReactionRepository>,
        attachment_repo: Arc<dyn AttachmentRepository>,
        user_repo: Arc<dyn UserRepository>,
        webhook_transport: Arc<dyn WebhookTransport>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            memo_repo,
            reaction_repo,
            attachment_repo,
            user_repo,
            webhook_transport,
            snowflake_generator,
        }
    }

    // === Repositories ===

    /// Get the memo repository
    pub fn memo_repo(&self) -> &dyn MemoRepository {
        self.memo_repo.as_ref()
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    /// Get the attachment repository
    pub fn attachment_repo(&self) -> &dyn AttachmentRepository {
        self.attachment_repo.as_ref()
    }

    /// Get the user repository
    ///
    /// The services here carry the caller as an already-resolved
    /// [`Requester`](memo_core::Requester); this accessor exists for the
    /// authentication layer in front of them, which looks up the user
    /// record to build that requester.
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    // === Webhooks ===

    /// Get the webhook delivery transport
    pub fn webhook_transport(&self) -> &dyn WebhookTransport {
        self.webhook_transport.as_ref()
    }

    // === Services ===

    /// Get the snowflake ID generator
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> memo_core::Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("webhook_transport", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    memo_repo: Option<Arc<dyn MemoRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    attachment_repo: Option<Arc<dyn AttachmentRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    webhook_transport: Option<Arc<dyn WebhookTransport>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            memo_repo: None,
            reaction_repo: None,
            attachment_repo: None,
            user_repo: None,
            webhook_transport: None,
            snowflake_generator: None,
        }
    }

    pub fn memo_repo(mut self, repo: Arc<dyn MemoRepository>) -> Self {
        self.memo_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn attachment_repo(mut self, repo: Arc<dyn AttachmentRepository>) -> Self {
        self.attachment_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn webhook_transport(mut self, transport: Arc<dyn WebhookTransport>) -> Self {
        self.webhook_transport = Some(transport);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::InvalidArgument` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.memo_repo
                .ok_or_else(|| ServiceError::invalid_argument("memo_repo is required"))?,
            self.reaction_repo
                .ok_or_else(|| ServiceError::invalid_argument("reaction_repo is required"))?,
            self.attachment_repo
                .ok_or_else(|| ServiceError::invalid_argument("attachment_repo is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::invalid_argument("user_repo is required"))?,
            self.webhook_transport
                .ok_or_else(|| ServiceError::invalid_argument("webhook_transport is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::invalid_argument("snowflake_generator is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
