//! Entity <-> model mappers
//!
//! Conversions between database models and domain entities. Memo and user
//! conversions are fallible because visibility and role are stored as
//! strings that must parse back into their domain enums.

mod attachment;
mod memo;
mod reaction;
mod user;
