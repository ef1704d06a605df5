//! Attachment database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for attachments table
#[derive(Debug, Clone, FromRow)]
pub struct AttachmentModel {
    pub id: i64,
    pub memo_id: i64,
    pub filename: String,
    pub media_type: String,
    pub size: i64,
    pub created_at: DateTime<Utc>,
}
