//! Value objects - immutable types that represent domain concepts

mod requester;
mod snowflake;
mod visibility;

pub use requester::Requester;
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
pub use visibility::{Visibility, VisibilityParseError};
