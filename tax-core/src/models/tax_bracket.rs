//! Tax slabs and the fixed rates of each regime.
//!
//! Brackets are ordered by `min_income`, do not overlap, and the last bracket
//! of every schedule is unbounded. `base_tax` is the tax owed on all lower
//! slabs, so the tax for an income inside a bracket is
//! `base_tax + (income - min_income) * tax_rate`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Surcharge applied on top of the base tax of every regime.
pub const CESS_RATE: Decimal = dec!(0.04);

/// Rate of the single-bracket flat regime.
pub const FLAT_TAX_RATE: Decimal = dec!(0.20);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub tax_rate: Decimal,
    pub base_tax: Decimal,
}

impl TaxBracket {
    /// Returns true when `income` falls in `(min_income, max_income]`.
    pub fn contains(
        &self,
        income: Decimal,
    ) -> bool {
        income > self.min_income && self.max_income.is_none_or(|max| income <= max)
    }
}

pub const OLD_REGIME_BRACKETS: [TaxBracket; 4] = [
    TaxBracket {
        min_income: dec!(0),
        max_income: Some(dec!(250000)),
        tax_rate: dec!(0),
        base_tax: dec!(0),
    },
    TaxBracket {
        min_income: dec!(250000),
        max_income: Some(dec!(500000)),
        tax_rate: dec!(0.05),
        base_tax: dec!(0),
    },
    TaxBracket {
        min_income: dec!(500000),
        max_income: Some(dec!(1000000)),
        tax_rate: dec!(0.20),
        base_tax: dec!(12500),
    },
    TaxBracket {
        min_income: dec!(1000000),
        max_income: None,
        tax_rate: dec!(0.30),
        base_tax: dec!(112500),
    },
];

pub const NEW_REGIME_BRACKETS: [TaxBracket; 6] = [
    TaxBracket {
        min_income: dec!(0),
        max_income: Some(dec!(300000)),
        tax_rate: dec!(0),
        base_tax: dec!(0),
    },
    TaxBracket {
        min_income: dec!(300000),
        max_income: Some(dec!(600000)),
        tax_rate: dec!(0.05),
        base_tax: dec!(0),
    },
    TaxBracket {
        min_income: dec!(600000),
        max_income: Some(dec!(900000)),
        tax_rate: dec!(0.10),
        base_tax: dec!(15000),
    },
    TaxBracket {
        min_income: dec!(900000),
        max_income: Some(dec!(1200000)),
        tax_rate: dec!(0.15),
        base_tax: dec!(45000),
    },
    TaxBracket {
        min_income: dec!(1200000),
        max_income: Some(dec!(1500000)),
        tax_rate: dec!(0.20),
        base_tax: dec!(90000),
    },
    TaxBracket {
        min_income: dec!(1500000),
        max_income: None,
        tax_rate: dec!(0.30),
        base_tax: dec!(150000),
    },
];

pub const FLAT_REGIME_BRACKETS: [TaxBracket; 1] = [TaxBracket {
    min_income: dec!(0),
    max_income: None,
    tax_rate: FLAT_TAX_RATE,
    base_tax: dec!(0),
}];
