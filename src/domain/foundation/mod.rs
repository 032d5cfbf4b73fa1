//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects, identifiers, and error types that form
//! the vocabulary of the CardVault domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::ValidationError;
pub use ids::PrincipalId;
pub use timestamp::Timestamp;
