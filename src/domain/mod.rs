//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `session` - Client-held sessions: issuance, token codec, validation
//! - `payment` - Payment request normalization and the gateway contract
//! - `notification` - Gift card request notifications and templates

pub mod foundation;
pub mod notification;
pub mod payment;
pub mod session;
