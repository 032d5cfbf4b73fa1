//! Notification domain module.
//!
//! The three gift card request notifications: kind parsing, recipient
//! resolution, and the pure mail templates.

mod event;
pub mod templates;

pub use event::{NotificationEvent, NotificationKind};
