//! Entity to DTO mappers

use memo_common::{format_memo_name, format_reaction_name, format_user_name};
use memo_core::entities::{Attachment, Memo, Reaction};

use super::responses::{
    AttachmentResponse, MemoReactedPayload, MemoResponse, ReactionResponse,
};

impl From<&Reaction> for ReactionResponse {
    fn from(reaction: &Reaction) -> Self {
        Self {
            name: format_reaction_name(&reaction.content_id, reaction.id),
            creator: format_user_name(reaction.creator_id),
            content_id: reaction.content_id.clone(),
            reaction_type: reaction.reaction_type.clone(),
            created_at: reaction.created_at,
        }
    }
}

impl From<&Memo> for MemoResponse {
    fn from(memo: &Memo) -> Self {
        Self {
            name: format_memo_name(&memo.uid),
            creator: format_user_name(memo.creator_id),
            content: memo.content.clone(),
            visibility: memo.visibility.as_str().to_string(),
            tags: memo.tags.clone(),
            pinned: memo.pinned,
            created_at: memo.created_at,
            updated_at: memo.updated_at,
        }
    }
}

impl From<&Attachment> for AttachmentResponse {
    fn from(attachment: &Attachment) -> Self {
        Self {
            name: format!("attachments/{}", attachment.id),
            filename: attachment.filename.clone(),
            media_type: attachment.media_type.clone(),
            size: attachment.size,
            created_at: attachment.created_at,
        }
    }
}

impl MemoReactedPayload {
    /// Assemble the enriched payload for a stored reaction
    pub fn new(
        memo: &Memo,
        reactions: &[Reaction],
        attachments: &[Attachment],
        reaction: &Reaction,
    ) -> Self {
        Self {
            activity_type: Self::ACTIVITY_TYPE,
            memo: MemoResponse::from(memo),
            reactions: reactions.iter().map(ReactionResponse::from).collect(),
            attachments: attachments.iter().map(AttachmentResponse::from).collect(),
            reaction: ReactionResponse::from(reaction),
        }
    }
}
