//! Reaction entity - a typed reaction a user attaches to a memo

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Reaction entity
///
/// `(creator_id, content_id, reaction_type)` is the natural key; the store
/// resolves concurrent upserts of the same key to a single logical row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub id: Snowflake,
    pub creator_id: Snowflake,
    /// Resource name of the memo this reaction targets (`memos/{uid}`)
    pub content_id: String,
    /// Opaque reaction kind, e.g. an emoji code
    pub reaction_type: String,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(
        id: Snowflake,
        creator_id: Snowflake,
        content_id: String,
        reaction_type: String,
    ) -> Self {
        Self {
            id,
            creator_id,
            content_id,
            reaction_type,
            created_at: Utc::now(),
        }
    }

    /// Check if the given user created this reaction
    ///
    /// Ownership is checked against the reaction's own creator, not the
    /// creator of the memo it targets.
    #[inline]
    pub fn is_created_by(&self, user_id: Snowflake) -> bool {
        self.creator_id == user_id
    }
}
