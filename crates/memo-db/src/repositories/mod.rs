//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in memo-core.
//! Each repository handles database operations for a specific domain entity.

mod attachment;
mod error;
mod memo;
mod reaction;
mod user;

pub use attachment::PgAttachmentRepository;
pub use memo::PgMemoRepository;
pub use reaction::PgReactionRepository;
pub use user::PgUserRepository;
