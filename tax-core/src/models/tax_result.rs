use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Income, TaxRegime};

/// Tax owed under one regime, cess included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeTax {
    pub regime: TaxRegime,
    pub amount: Decimal,
}

/// The three regimes evaluated for one income, plus the cheapest of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeComparison {
    pub income: Income,

    /// Results in tie-break order: old, new, flat.
    pub taxes: [RegimeTax; 3],

    /// First entry of `taxes` holding the minimum amount.
    pub best: RegimeTax,
}

impl RegimeComparison {
    /// Amount owed under `regime`.
    pub fn tax_for(
        &self,
        regime: TaxRegime,
    ) -> Decimal {
        self.taxes
            .iter()
            .find(|t| t.regime == regime)
            .map(|t| t.amount)
            .unwrap_or_default()
    }
}

/// One sample of the chart series.
///
/// Effective rates are percentages and are zero when `income` is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub income: Decimal,
    pub old_tax: Decimal,
    pub new_tax: Decimal,
    pub flat_tax: Decimal,
    pub effective_old: Decimal,
    pub effective_new: Decimal,
    pub effective_flat: Decimal,
}

impl SeriesPoint {
    /// Absolute tax amounts in regime order.
    pub fn taxes(&self) -> [Decimal; 3] {
        [self.old_tax, self.new_tax, self.flat_tax]
    }

    /// Effective rates in regime order.
    pub fn effective_rates(&self) -> [Decimal; 3] {
        [self.effective_old, self.effective_new, self.effective_flat]
    }
}
