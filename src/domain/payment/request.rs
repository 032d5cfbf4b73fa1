//! Payment request normalization.
//!
//! Raw client submissions arrive with every field optional; normalization
//! checks fields in a fixed order and reports the first one that fails, so
//! the same bad request always produces the same error. The outputs are
//! gateway-ready orders with amounts already in minor units.

use rust_decimal::Decimal;

use crate::domain::foundation::ValidationError;

use super::amount::Amount;

/// A client-submitted transfer, prior to validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransferInput {
    pub amount: Option<Decimal>,
    pub recipient_code: Option<String>,
    pub reason: Option<String>,
}

/// A gateway-ready transfer: balance-funded payout to a saved recipient.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferOrder {
    pub amount: Amount,
    pub recipient_code: String,
    pub reason: String,
}

impl TransferInput {
    /// Validates in field order `amount`, `recipient_code`, `reason`.
    pub fn normalize(self) -> Result<TransferOrder, ValidationError> {
        let amount = normalize_amount(self.amount)?;
        let recipient_code = require_text("recipient_code", self.recipient_code)?;
        let reason = require_text("reason", self.reason)?;
        Ok(TransferOrder {
            amount,
            recipient_code,
            reason,
        })
    }
}

/// A client-submitted checkout, prior to validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckoutInput {
    pub email: Option<String>,
    pub amount: Option<Decimal>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub description: Option<String>,
}

/// A gateway-ready checkout: hosted payment page initialization.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutOrder {
    pub email: String,
    pub amount: Amount,
    pub first_name: String,
    pub last_name: String,
    pub description: String,
}

impl CheckoutInput {
    /// Validates in field order `amount`, `email`, `firstName`,
    /// `lastName`, `description`.
    pub fn normalize(self) -> Result<CheckoutOrder, ValidationError> {
        let amount = normalize_amount(self.amount)?;
        let email = require_text("email", self.email)?;
        let first_name = require_text("firstName", self.first_name)?;
        let last_name = require_text("lastName", self.last_name)?;
        let description = require_text("description", self.description)?;
        Ok(CheckoutOrder {
            email,
            amount,
            first_name,
            last_name,
            description,
        })
    }
}

fn normalize_amount(amount: Option<Decimal>) -> Result<Amount, ValidationError> {
    let amount = amount.ok_or_else(|| ValidationError::missing_field("amount"))?;
    Amount::from_major(amount)
        .map_err(|e| ValidationError::invalid_format("amount", e.to_string()))
}

fn require_text(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    let value = value.ok_or_else(|| ValidationError::missing_field(field))?;
    if value.trim().is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(value)
}
