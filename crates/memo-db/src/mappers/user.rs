//! User entity <-> model mapper

use memo_core::entities::{User, UserRole};
use memo_core::error::DomainError;
use memo_core::value_objects::Snowflake;

use crate::models::UserModel;

/// Convert UserModel to User entity
///
/// A role string outside the known set indicates corrupt data and maps to
/// [`DomainError::InternalError`].
impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let role = UserRole::parse(&model.role)
            .ok_or_else(|| DomainError::InternalError(format!("unknown user role: {}", model.role)))?;

        Ok(User {
            id: Snowflake::new(model.id),
            username: model.username,
            role,
            created_at: model.created_at,
        })
    }
}
