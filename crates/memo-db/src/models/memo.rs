//! Memo database model

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;

/// Database model for memos table
///
/// Tags are stored as a JSONB array; visibility as its canonical
/// SCREAMING_SNAKE_CASE string.
#[derive(Debug, Clone, FromRow)]
pub struct MemoModel {
    pub id: i64,
    pub uid: String,
    pub creator_id: i64,
    pub content: String,
    pub visibility: String,
    pub tags: Json<Vec<String>>,
    pub pinned: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
