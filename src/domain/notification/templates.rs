//! Notification mail templates.
//!
//! Subjects and bodies are pure functions of the event: same event, same
//! text, no clocks, counters, or randomness.

use super::event::{NotificationEvent, NotificationKind};

/// Subject line for a notification kind.
pub fn subject(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Submission => "New Gift Card Request Submitted",
        NotificationKind::Confirmation => "Gift Card Request Confirmed",
        NotificationKind::Unavailable => "Gift Card Request Not Available",
    }
}

/// Plain-text body for an event.
pub fn body(event: &NotificationEvent) -> String {
    match event.kind {
        NotificationKind::Submission => format!(
            "A new gift card request has been submitted:\n\
             \n\
             Category: {}\n\
             Subcategory: {}\n\
             Amount: {}\n\
             Quantity: {}\n\
             User Email: {}\n\
             \n\
             Please review this request at your earliest convenience.",
            event.category, event.subcategory, event.amount, event.quantity, event.user_email
        ),
        NotificationKind::Confirmation => format!(
            "Your gift card request has been confirmed:\n\
             \n\
             Category: {}\n\
             Subcategory: {}\n\
             Amount: {}\n\
             Quantity: {}\n\
             \n\
             Go to your dashboard and click on the payment button to make payment\n\
             The gift card(s) will be processed and sent to you shortly.",
            event.category, event.subcategory, event.amount, event.quantity
        ),
        NotificationKind::Unavailable => format!(
            "We regret to inform you that your gift card request is not available:\n\
             \n\
             Category: {}\n\
             Subcategory: {}\n\
             Amount: {}\n\
             Quantity: {}\n\
             \n\
             Please contact support for further assistance.",
            event.category, event.subcategory, event.amount, event.quantity
        ),
    }
}
