//! Notification command handlers.

mod dispatch_notification;

pub use dispatch_notification::{
    DispatchError, DispatchNotificationCommand, DispatchNotificationHandler,
    DispatchNotificationResult,
};
