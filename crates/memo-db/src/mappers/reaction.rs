//! Reaction entity <-> model mapper

use memo_core::entities::Reaction;
use memo_core::value_objects::Snowflake;

use crate::models::ReactionModel;

/// Convert ReactionModel to Reaction entity
impl From<ReactionModel> for Reaction {
    fn from(model: ReactionModel) -> Self {
        Reaction {
            id: Snowflake::new(model.id),
            creator_id: Snowflake::new(model.creator_id),
            content_id: model.content_id,
            reaction_type: model.reaction_type,
            created_at: model.created_at,
        }
    }
}
