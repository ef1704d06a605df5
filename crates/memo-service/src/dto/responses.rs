//! Response DTOs for API endpoints and webhook payloads
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Records are addressed by their resource names; Snowflake IDs never
//! appear as bare integers.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Reaction Responses
// ============================================================================

/// A stored reaction
#[derive(Debug, Clone, Serialize)]
pub struct ReactionResponse {
    /// Resource name: `memos/{uid}/reactions/{id}`
    pub name: String,
    /// Resource name of the reacting user: `users/{id}`
    pub creator: String,
    /// Resource name of the reacted-to content: `memos/{uid}`
    pub content_id: String,
    pub reaction_type: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Memo Responses
// ============================================================================

/// A memo with its metadata
#[derive(Debug, Clone, Serialize)]
pub struct MemoResponse {
    /// Resource name: `memos/{uid}`
    pub name: String,
    /// Resource name of the author: `users/{id}`
    pub creator: String,
    pub content: String,
    pub visibility: String,
    pub tags: Vec<String>,
    pub pinned: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An attachment on a memo
#[derive(Debug, Clone, Serialize)]
pub struct AttachmentResponse {
    /// Resource name: `attachments/{id}`
    pub name: String,
    pub filename: String,
    pub media_type: String,
    pub size: i64,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Webhook Payloads
// ============================================================================

/// Payload of the `memo.reacted` webhook
///
/// Carries the full memo plus its current reactions and attachments so
/// receivers need no follow-up reads.
#[derive(Debug, Clone, Serialize)]
pub struct MemoReactedPayload {
    pub activity_type: &'static str,
    /// The memo the reaction targets, with enrichment
    pub memo: MemoResponse,
    pub reactions: Vec<ReactionResponse>,
    pub attachments: Vec<AttachmentResponse>,
    /// The reaction that triggered this notification
    pub reaction: ReactionResponse,
}

impl MemoReactedPayload {
    /// Webhook activity type identifier
    pub const ACTIVITY_TYPE: &'static str = "memos.memo.reacted";
}
