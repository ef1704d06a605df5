//! Requester identity - the already-authenticated caller of an operation
//!
//! Authentication itself happens in an external layer; this core only sees
//! the resolved identity.

use crate::entities::User;
use crate::value_objects::Snowflake;

/// The identity an operation is performed as
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requester {
    /// No credentials presented
    Anonymous,
    /// An authenticated user; privileged requesters bypass ownership and
    /// visibility checks
    Authenticated {
        user_id: Snowflake,
        privileged: bool,
    },
}

impl Requester {
    /// Authenticated, non-privileged requester
    pub fn user(user_id: Snowflake) -> Self {
        Self::Authenticated {
            user_id,
            privileged: false,
        }
    }

    /// Authenticated requester with administrative capability
    pub fn privileged(user_id: Snowflake) -> Self {
        Self::Authenticated {
            user_id,
            privileged: true,
        }
    }

    /// The authenticated user id, if any
    pub fn user_id(&self) -> Option<Snowflake> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { user_id, .. } => Some(*user_id),
        }
    }

    #[inline]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    #[inline]
    pub fn is_privileged(&self) -> bool {
        matches!(self, Self::Authenticated { privileged: true, .. })
    }
}

impl From<&User> for Requester {
    fn from(user: &User) -> Self {
        Self::Authenticated {
            user_id: user.id,
            privileged: user.is_superuser(),
        }
    }
}
