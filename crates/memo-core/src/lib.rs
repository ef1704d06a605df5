//! # memo-core
//!
//! Domain layer containing entities, value objects, the visibility policy,
//! hierarchical tag aggregation, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod policy;
pub mod tags;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Attachment, Memo, Reaction, User, UserRole};
pub use error::DomainError;
pub use traits::{
    AttachmentRepository, MemoRepository, ReactionRepository, RepoResult, UserRepository,
};
pub use value_objects::{
    Requester, Snowflake, SnowflakeGenerator, SnowflakeParseError, Visibility,
    VisibilityParseError,
};
