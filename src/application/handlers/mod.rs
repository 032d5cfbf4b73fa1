//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod notification;
pub mod payment;
pub mod session;

pub use notification::{
    DispatchError, DispatchNotificationCommand, DispatchNotificationHandler,
    DispatchNotificationResult,
};
pub use payment::{
    InitializeCheckoutCommand, InitializeCheckoutHandler, InitializeCheckoutResult,
    InitiateTransferCommand, InitiateTransferHandler, InitiateTransferResult,
};
pub use session::{
    CreateSessionCommand, CreateSessionHandler, CreateSessionResult, ResolveProfileHandler,
    ResolveProfileQuery,
};
