//! Reaction service
//!
//! Handles memo reactions (list, upsert, delete) and triggers the
//! `memo.reacted` webhook on upsert.

use tracing::{info, instrument};

use memo_common::{extract_memo_uid, format_memo_name, parse_reaction_name};
use memo_core::entities::Reaction;
use memo_core::Requester;

use crate::dto::ReactionResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::webhook::WebhookDispatcher;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all reactions on a content item, oldest first
    ///
    /// A content id with no reactions (including one that names no existing
    /// memo) yields an empty list.
    #[instrument(skip(self))]
    pub async fn list_reactions(&self, content_id: &str) -> ServiceResult<Vec<ReactionResponse>> {
        let reactions = self
            .ctx
            .reaction_repo()
            .find_by_content(content_id)
            .await?;

        Ok(reactions.iter().map(ReactionResponse::from).collect())
    }

    /// Add or refresh the requester's reaction on a content item
    ///
    /// Repeating the same `(requester, content, type)` combination is
    /// idempotent and returns the already-stored reaction. A successful
    /// upsert triggers the `memo.reacted` webhook; webhook problems never
    /// surface to the caller.
    #[instrument(skip(self))]
    pub async fn upsert_reaction(
        &self,
        requester: &Requester,
        content_id: &str,
        reaction_type: &str,
    ) -> ServiceResult<ReactionResponse> {
        let user_id = requester.user_id().ok_or(ServiceError::Unauthenticated)?;

        if reaction_type.trim().is_empty() {
            return Err(ServiceError::invalid_argument("reaction type is required"));
        }
        extract_memo_uid(content_id)?;

        let reaction = Reaction::new(
            self.ctx.generate_id(),
            user_id,
            content_id.to_string(),
            reaction_type.to_string(),
        );

        let stored = self
            .ctx
            .reaction_repo()
            .upsert(&reaction)
            .await?;

        info!(
            reaction_id = %stored.id,
            content_id = %stored.content_id,
            reaction_type = %stored.reaction_type,
            "Reaction upserted"
        );

        WebhookDispatcher::new(self.ctx)
            .dispatch_memo_reacted(&stored)
            .await;

        Ok(ReactionResponse::from(&stored))
    }

    /// Delete a reaction by its resource name
    ///
    /// A reaction that does not exist, lives under a different memo than
    /// the name claims, or belongs to another user all answer with the same
    /// `PermissionDenied`; the response never confirms existence. Privileged
    /// requesters may delete any reaction.
    #[instrument(skip(self))]
    pub async fn delete_reaction(&self, requester: &Requester, name: &str) -> ServiceResult<()> {
        let user_id = requester.user_id().ok_or(ServiceError::Unauthenticated)?;

        let (uid, reaction_id) = parse_reaction_name(name)?;

        let reaction = self
            .ctx
            .reaction_repo()
            .find_by_id(reaction_id)
            .await?
            .ok_or(ServiceError::PermissionDenied)?;

        if reaction.content_id != format_memo_name(uid) {
            return Err(ServiceError::PermissionDenied);
        }

        if !reaction.is_created_by(user_id) && !requester.is_privileged() {
            return Err(ServiceError::PermissionDenied);
        }

        self.ctx
            .reaction_repo()
            .delete(reaction_id)
            .await?;

        info!(reaction_id = %reaction_id, "Reaction deleted");

        Ok(())
    }
}
