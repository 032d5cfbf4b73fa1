//! Payment domain module.
//!
//! Request normalization and the gateway orchestration contract. All
//! money handling is exact: major-unit decimals in, integer minor units
//! out, no floating point anywhere.
//!
//! # Module Structure
//!
//! - `amount` - Amount value object and minor-unit conversion
//! - `request` - Transfer/checkout inputs and normalized orders
//! - `gateway` - GatewayCall and the GatewayOutcome sum type

mod amount;
mod gateway;
mod request;

pub use amount::{Amount, AmountError, MINOR_UNITS_PER_MAJOR};
pub use gateway::{GatewayCall, GatewayOutcome};
pub use request::{CheckoutInput, CheckoutOrder, TransferInput, TransferOrder};
