//! Monetary amount value object.
//!
//! Client requests carry major-unit decimals (naira); the gateway wants
//! integer minor units (kobo). The conversion must be exact: `10.5`
//! becomes `1050`, never `1049.999...`.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use thiserror::Error;

/// Minor units per major unit (kobo per naira).
pub const MINOR_UNITS_PER_MAJOR: i64 = 100;

/// Reasons an amount is unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("amount must be greater than zero")]
    NotPositive,

    #[error("amount is finer than the smallest currency unit")]
    PrecisionExceeded,

    #[error("amount is out of range")]
    OutOfRange,
}

/// A strictly positive monetary amount, stored in minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(i64);

impl Amount {
    /// Validates and converts a major-unit decimal.
    ///
    /// Accepts at most two decimal places; anything finer has no exact
    /// minor-unit representation and is rejected rather than rounded.
    pub fn from_major(value: Decimal) -> Result<Self, AmountError> {
        if value <= Decimal::ZERO {
            return Err(AmountError::NotPositive);
        }

        let minor = value
            .checked_mul(Decimal::from(MINOR_UNITS_PER_MAJOR))
            .ok_or(AmountError::OutOfRange)?;
        if !minor.fract().is_zero() {
            return Err(AmountError::PrecisionExceeded);
        }

        let units = minor.to_i64().ok_or(AmountError::OutOfRange)?;
        Ok(Self(units))
    }

    /// The amount in minor units, as sent to the gateway.
    pub fn minor_units(&self) -> i64 {
        self.0
    }

    /// The amount back in major units.
    pub fn major(&self) -> Decimal {
        Decimal::new(self.0, 2).normalize()
    }
}
