//! Service layer error types
//!
//! Provides a unified error type for all service operations.
//!
//! `PermissionDenied` deliberately carries no payload: the same error covers
//! a reaction that does not exist and a reaction the caller may not touch,
//! so the response never reveals whether a resource exists.

use memo_common::{AppError, NameError};
use memo_core::DomainError;
use std::fmt;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Malformed request input (bad resource name, empty reaction type)
    InvalidArgument(String),

    /// Operation requires an authenticated requester
    Unauthenticated,

    /// Caller may not perform this operation on this resource
    PermissionDenied,

    /// Internal failure (storage, data corruption)
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            Self::Unauthenticated => write!(f, "Unauthenticated"),
            Self::PermissionDenied => write!(f, "Permission denied"),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {}

impl ServiceError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidArgument(_) => 400,
            Self::Unauthenticated => 401,
            Self::PermissionDenied => 403,
            Self::Internal(_) => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::PermissionDenied => "PERMISSION_DENIED",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Storage and data errors surface uniformly as internal failures; the
/// services map not-found cases themselves before this conversion applies.
impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<NameError> for ServiceError {
    fn from(err: NameError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidArgument(msg) => AppError::InvalidArgument(msg),
            ServiceError::Unauthenticated => AppError::Unauthenticated,
            ServiceError::PermissionDenied => AppError::PermissionDenied,
            ServiceError::Internal(msg) => AppError::Internal(anyhow::anyhow!(msg)),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
