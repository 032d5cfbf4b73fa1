//! CardVault - Gift card exchange backend
//!
//! This crate implements the server side of the CardVault gift card
//! exchange: cookie-based login sessions, payment orchestration against
//! the Paystack gateway, and notification mail dispatch.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
