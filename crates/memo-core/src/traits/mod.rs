//! Domain ports - interfaces implemented by the infrastructure layer

mod repositories;

pub use repositories::{
    AttachmentRepository, MemoRepository, ReactionRepository, RepoResult, UserRepository,
};
