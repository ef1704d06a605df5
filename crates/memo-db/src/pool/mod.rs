//! Connection pool management

mod postgres;

pub use postgres::{create_pool, create_pool_from_env, create_pool_with, PoolError, PoolSettings};
pub use sqlx::PgPool;
