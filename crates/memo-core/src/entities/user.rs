//! User entity - represents a memo service account

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Role of a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserRole {
    /// Instance owner
    Host,
    /// Administrator
    Admin,
    /// Regular user
    #[default]
    User,
}

impl UserRole {
    /// Canonical stored string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Host => "HOST",
            Self::Admin => "ADMIN",
            Self::User => "USER",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "HOST" => Some(Self::Host),
            "ADMIN" => Some(Self::Admin),
            "USER" => Some(Self::User),
            _ => None,
        }
    }
}

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new User
    pub fn new(id: Snowflake, username: String, role: UserRole) -> Self {
        Self {
            id,
            username,
            role,
            created_at: Utc::now(),
        }
    }

    /// Hosts and admins bypass ownership and visibility checks
    #[inline]
    pub fn is_superuser(&self) -> bool {
        matches!(self.role, UserRole::Host | UserRole::Admin)
    }
}
