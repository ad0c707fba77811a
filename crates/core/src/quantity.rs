//! Quantity

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when constructing a [`Quantity`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuantityError {
    /// The value lies outside `Quantity::MIN..=Quantity::MAX`.
    #[error("quantity {0} is outside 1..=9")]
    OutOfRange(u8),
}

/// Number of units held by a single cart line.
///
/// A line that exists always holds between [`Quantity::MIN`] and [`Quantity::MAX`] units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Quantity(u8);

impl Quantity {
    /// Smallest quantity a line can hold.
    pub const MIN: Self = Self(1);

    /// Largest quantity a line can hold.
    pub const MAX: Self = Self(9);

    /// Create a quantity, rejecting values outside the allowed range.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::OutOfRange`] when `value` is 0 or above 9.
    pub const fn new(value: u8) -> Result<Self, QuantityError> {
        if value < Self::MIN.0 || value > Self::MAX.0 {
            return Err(QuantityError::OutOfRange(value));
        }

        Ok(Self(value))
    }

    /// Raw unit count.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// The next quantity up, or `None` at the ceiling.
    pub const fn increment(self) -> Option<Self> {
        if self.0 >= Self::MAX.0 {
            None
        } else {
            Some(Self(self.0 + 1))
        }
    }

    /// The next quantity down, or `None` when the line would become empty.
    pub const fn decrement(self) -> Option<Self> {
        if self.0 <= Self::MIN.0 {
            None
        } else {
            Some(Self(self.0 - 1))
        }
    }

    /// Whether the ceiling has been reached.
    pub const fn is_max(self) -> bool {
        self.0 >= Self::MAX.0
    }
}

impl TryFrom<u8> for Quantity {
    type Error = QuantityError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for u8 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

impl From<Quantity> for u32 {
    fn from(value: Quantity) -> Self {
        u32::from(value.0)
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}
