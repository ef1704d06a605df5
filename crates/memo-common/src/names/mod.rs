//! Resource name parsing and formatting
//!
//! The external API addresses records with path-style resource names:
//!
//! - users:     `users/{id}`
//! - memos:     `memos/{uid}`
//! - reactions: `memos/{uid}/reactions/{id}` (nested under their memo)

use memo_core::Snowflake;
use thiserror::Error;

/// Prefix of user resource names
pub const USER_NAME_PREFIX: &str = "users/";
/// Prefix of memo resource names
pub const MEMO_NAME_PREFIX: &str = "memos/";

const REACTION_SEGMENT: &str = "/reactions/";

/// Error for malformed resource names
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("invalid user name: {0}")]
    InvalidUserName(String),

    #[error("invalid memo name: {0}")]
    InvalidMemoName(String),

    #[error("invalid reaction name: {0}")]
    InvalidReactionName(String),
}

/// Parse `users/{id}` into the user id
pub fn parse_user_name(name: &str) -> Result<Snowflake, NameError> {
    let id = name
        .strip_prefix(USER_NAME_PREFIX)
        .filter(|rest| !rest.is_empty() && !rest.contains('/'))
        .and_then(|rest| Snowflake::parse(rest).ok())
        .ok_or_else(|| NameError::InvalidUserName(name.to_string()))?;
    Ok(id)
}

/// Format a user id as `users/{id}`
pub fn format_user_name(id: Snowflake) -> String {
    format!("{USER_NAME_PREFIX}{id}")
}

/// Extract the memo UID from `memos/{uid}`
pub fn extract_memo_uid(name: &str) -> Result<&str, NameError> {
    name.strip_prefix(MEMO_NAME_PREFIX)
        .filter(|uid| !uid.is_empty() && !uid.contains('/'))
        .ok_or_else(|| NameError::InvalidMemoName(name.to_string()))
}

/// Format a memo UID as `memos/{uid}`
pub fn format_memo_name(uid: &str) -> String {
    format!("{MEMO_NAME_PREFIX}{uid}")
}

/// Parse `memos/{uid}/reactions/{id}` into the memo UID and reaction id
pub fn parse_reaction_name(name: &str) -> Result<(&str, Snowflake), NameError> {
    let invalid = || NameError::InvalidReactionName(name.to_string());

    let (memo_name, reaction_id) = name.split_once(REACTION_SEGMENT).ok_or_else(invalid)?;
    let uid = extract_memo_uid(memo_name).map_err(|_| invalid())?;
    let id = Snowflake::parse(reaction_id).map_err(|_| invalid())?;
    Ok((uid, id))
}

/// Format a reaction name nested under its memo
///
/// `content_id` is already the memo resource name (`memos/{uid}`).
pub fn format_reaction_name(content_id: &str, id: Snowflake) -> String {
    format!("{content_id}{REACTION_SEGMENT}{id}")
}
