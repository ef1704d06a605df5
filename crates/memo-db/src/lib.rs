//! # memo-db
//!
//! Database layer implementing the `memo-core` repository traits with
//! PostgreSQL via SQLx. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, create_pool_with, PgPool, PoolError, PoolSettings};
pub use repositories::{
    PgAttachmentRepository, PgMemoRepository, PgReactionRepository, PgUserRepository,
};
