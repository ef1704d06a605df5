//! # memo-common
//!
//! Shared utilities including configuration, error handling, resource-name
//! parsing, and telemetry.

pub mod config;
pub mod error;
pub mod names;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{
    AppConfig, AppSettings, ConfigError, DatabaseConfig, Environment, ServerConfig,
    SnowflakeConfig, WebhookConfig,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use names::{
    extract_memo_uid, format_memo_name, format_reaction_name, format_user_name, parse_reaction_name,
    parse_user_name, NameError, MEMO_NAME_PREFIX, USER_NAME_PREFIX,
};
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig, TracingError};
