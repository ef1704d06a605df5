//! Domain entities - core business objects

mod attachment;
mod memo;
mod reaction;
mod user;

pub use attachment::Attachment;
pub use memo::Memo;
pub use reaction::Reaction;
pub use user::{User, UserRole};
