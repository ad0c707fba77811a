//! Pricing
//!
//! The backend reports prices as decimal rupees. Arithmetic happens in paise so totals never
//! accumulate floating point error.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{
    Money, MoneyError,
    iso::{Currency, INR},
};
use thiserror::Error;

/// Errors that can occur while converting or summing prices.
#[derive(Debug, Error, PartialEq)]
pub enum PriceError {
    /// The price cannot be represented in paise.
    #[error("price {0} cannot be represented in minor units")]
    Unrepresentable(Decimal),

    /// Multiplying or summing overflowed.
    #[error("price arithmetic overflowed")]
    Overflow,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Currency every storefront price is quoted in.
pub fn currency() -> &'static Currency {
    INR
}

/// Convert decimal rupees into paise, rounding half away from zero.
///
/// # Errors
///
/// Returns [`PriceError::Unrepresentable`] if the amount does not fit in an `i64` of paise.
pub fn to_minor_units(amount: Decimal) -> Result<i64, PriceError> {
    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|value| {
            value
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_i64()
        })
        .ok_or(PriceError::Unrepresentable(amount))
}

/// An amount of paise as INR money.
pub fn rupees(minor_units: i64) -> Money<'static, Currency> {
    Money::from_minor(minor_units, INR)
}

/// Zero rupees.
pub fn zero() -> Money<'static, Currency> {
    rupees(0)
}

/// Render an amount the way the storefront displays prices.
pub fn format_inr(money: &Money<'_, Currency>) -> String {
    format!("{money}")
}
