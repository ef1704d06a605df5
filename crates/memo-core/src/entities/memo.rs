//! Memo entity - a short text entry with tags and a visibility tier

use chrono::{DateTime, Utc};

use crate::value_objects::{Snowflake, Visibility};

/// Memo entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memo {
    pub id: Snowflake,
    /// Opaque stable identifier; surfaces as the resource name `memos/{uid}`
    pub uid: String,
    pub creator_id: Snowflake,
    pub content: String,
    pub visibility: Visibility,
    /// Free-form tags; `/` separates hierarchy segments
    pub tags: Vec<String>,
    pub pinned: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Memo {
    /// Create a new Memo with required fields
    pub fn new(id: Snowflake, uid: String, creator_id: Snowflake, content: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            uid,
            creator_id,
            content,
            visibility: Visibility::default(),
            tags: Vec::new(),
            pinned: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Check if the given user created this memo
    #[inline]
    pub fn is_created_by(&self, user_id: Snowflake) -> bool {
        self.creator_id == user_id
    }
}
