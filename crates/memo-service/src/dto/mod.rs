//! Data transfer objects for API responses and webhook payloads
//!
//! This module provides:
//! - Response DTOs for serializing API outputs
//! - The enriched webhook payload
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod responses;

// Re-export commonly used response types
pub use responses::{
    AttachmentResponse, MemoReactedPayload, MemoResponse, ReactionResponse,
};
