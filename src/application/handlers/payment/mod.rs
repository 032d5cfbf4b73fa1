//! Payment command handlers.

mod initialize_checkout;
mod initiate_transfer;

pub use initialize_checkout::{
    InitializeCheckoutCommand, InitializeCheckoutHandler, InitializeCheckoutResult,
};
pub use initiate_transfer::{
    InitiateTransferCommand, InitiateTransferHandler, InitiateTransferResult,
};
