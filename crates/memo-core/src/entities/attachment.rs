//! Attachment entity - a file attached to a memo
//!
//! Blob storage and URL construction live in an external layer; this core
//! only carries the metadata needed for listing and webhook enrichment.

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Attachment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub id: Snowflake,
    pub memo_id: Snowflake,
    pub filename: String,
    pub media_type: String,
    pub size: i64,
    pub created_at: DateTime<Utc>,
}

impl Attachment {
    /// Create a new Attachment
    pub fn new(
        id: Snowflake,
        memo_id: Snowflake,
        filename: String,
        media_type: String,
        size: i64,
    ) -> Self {
        Self {
            id,
            memo_id,
            filename,
            media_type,
            size,
            created_at: Utc::now(),
        }
    }
}
