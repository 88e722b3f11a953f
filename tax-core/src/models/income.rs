use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Errors raised when constructing an [`Income`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IncomeError {
    /// Income must be zero or positive.
    #[error("income must be non-negative, got {0}")]
    Negative(Decimal),
}

/// Annual income in currency units.
///
/// The value is guaranteed to be non-negative, so every tax function taking
/// an `Income` is total.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::{Income, IncomeError};
///
/// let income = Income::new(dec!(400000)).unwrap();
/// assert_eq!(income.amount(), dec!(400000));
///
/// assert_eq!(Income::new(dec!(-1)), Err(IncomeError::Negative(dec!(-1))));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Income(Decimal);

impl Income {
    pub const ZERO: Income = Income(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Result<Self, IncomeError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            warn!(%amount, "rejecting negative income");
            return Err(IncomeError::Negative(amount));
        }
        // Normalises -0 to 0.
        Ok(Self(amount.abs()))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl TryFrom<Decimal> for Income {
    type Error = IncomeError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Income> for Decimal {
    fn from(income: Income) -> Self {
        income.0
    }
}

impl fmt::Display for Income {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        self.0.fmt(f)
    }
}
