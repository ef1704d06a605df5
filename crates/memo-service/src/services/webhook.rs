//! Webhook dispatch
//!
//! Builds the enriched `memo.reacted` payload and hands it to the delivery
//! transport. Dispatch is strictly best-effort: nothing in here may fail the
//! operation that triggered it, so every failure path logs and returns.

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use memo_common::extract_memo_uid;
use memo_core::entities::Reaction;

use crate::dto::MemoReactedPayload;

use super::context::ServiceContext;

/// Outbound webhook delivery transport
///
/// The HTTP client, endpoint configuration, retries, and timeouts live
/// behind this trait in an external layer.
#[async_trait]
pub trait WebhookTransport: Send + Sync {
    /// Deliver a `memo.reacted` payload to all configured receivers
    async fn deliver(&self, payload: &MemoReactedPayload) -> anyhow::Result<()>;
}

/// Webhook dispatcher
pub struct WebhookDispatcher<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> WebhookDispatcher<'a> {
    /// Create a new WebhookDispatcher
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Notify receivers that a reaction was stored
    ///
    /// The payload carries the full memo regardless of its visibility;
    /// receiver endpoints are configured by the memo's owner. Enrichment
    /// failures degrade the payload (empty reaction or attachment lists)
    /// rather than aborting delivery; only an unresolvable memo skips it.
    #[instrument(skip(self, reaction), fields(content_id = %reaction.content_id))]
    pub async fn dispatch_memo_reacted(&self, reaction: &Reaction) {
        let uid = match extract_memo_uid(&reaction.content_id) {
            Ok(uid) => uid,
            Err(_) => {
                debug!(content_id = %reaction.content_id, "Reaction targets a non-memo resource, skipping webhook");
                return;
            }
        };

        let memo = match self.ctx.memo_repo().find_by_uid(uid).await {
            Ok(Some(memo)) => memo,
            Ok(None) => {
                debug!(uid, "Memo no longer exists, skipping webhook");
                return;
            }
            Err(e) => {
                warn!(uid, error = %e, "Failed to load memo for webhook");
                return;
            }
        };

        let reactions = match self
            .ctx
            .reaction_repo()
            .find_by_content(&reaction.content_id)
            .await
        {
            Ok(reactions) => reactions,
            Err(e) => {
                warn!(uid, error = %e, "Failed to load reactions for webhook");
                Vec::new()
            }
        };

        let attachments = match self.ctx.attachment_repo().find_by_memo(memo.id).await {
            Ok(attachments) => attachments,
            Err(e) => {
                warn!(uid, error = %e, "Failed to load attachments for webhook");
                Vec::new()
            }
        };

        let payload = MemoReactedPayload::new(&memo, &reactions, &attachments, reaction);

        if let Err(e) = self.ctx.webhook_transport().deliver(&payload).await {
            warn!(uid, error = %e, "Webhook delivery failed");
        }
    }
}
