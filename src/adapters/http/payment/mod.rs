//! HTTP adapter for payment endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CheckoutRequest, DataResponse, ErrorResponse, TransferRequest};
pub use handlers::PaymentHandlers;
pub use routes::payment_routes;
