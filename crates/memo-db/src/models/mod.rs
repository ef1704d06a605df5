//! Database models - SQLx-compatible structs for PostgreSQL tables

mod attachment;
mod memo;
mod reaction;
mod user;

pub use attachment::AttachmentModel;
pub use memo::MemoModel;
pub use reaction::ReactionModel;
pub use user::UserModel;
