//! Session domain module.
//!
//! Client-held sessions: issuance, signed token encoding, and validation.
//! Nothing here performs I/O; the HTTP layer owns cookies and transport.
//!
//! # Module Structure
//!
//! - `session` - Session entity and expiry rule
//! - `codec` - Signed token encode/decode
//! - `issuer` - Session issuance with the validity window
//! - `validator` - Cookie value to request verdict

mod codec;
mod issuer;
mod session;
mod validator;

pub use codec::{DecodeError, TokenCodec};
pub use issuer::{IssuedSession, SessionIssuer, DEFAULT_VALIDITY_DAYS};
pub use session::Session;
pub use validator::{PrincipalContext, RejectReason, SessionValidator, SessionVerdict};
