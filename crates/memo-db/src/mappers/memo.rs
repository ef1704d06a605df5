//! Memo entity <-> model mapper

use memo_core::entities::Memo;
use memo_core::error::DomainError;
use memo_core::value_objects::{Snowflake, Visibility};

use crate::models::MemoModel;

/// Convert MemoModel to Memo entity
///
/// Fails with [`DomainError::InvalidVisibility`] when the stored visibility
/// string is not one of the canonical tiers.
impl TryFrom<MemoModel> for Memo {
    type Error = DomainError;

    fn try_from(model: MemoModel) -> Result<Self, Self::Error> {
        let visibility = model
            .visibility
            .parse::<Visibility>()
            .map_err(|e| DomainError::InvalidVisibility(e.0))?;

        Ok(Memo {
            id: Snowflake::new(model.id),
            uid: model.uid,
            creator_id: Snowflake::new(model.creator_id),
            content: model.content,
            visibility,
            tags: model.tags.0,
            pinned: model.pinned,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
