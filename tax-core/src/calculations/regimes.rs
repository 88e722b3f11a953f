//! Per-regime tax liability.
//!
//! Every regime is a bracket schedule from [`crate::models`]. The base tax is
//! found by locating the bracket holding the income and adding its marginal
//! slice to the bracket's `base_tax`; the 4% cess is then applied on top.
//!
//! | Regime | Brackets | Boundaries                                  |
//! |--------|----------|---------------------------------------------|
//! | Old    | 4        | 250,000 / 500,000 / 1,000,000               |
//! | New    | 6        | 300,000 / 600,000 / 900,000 / 1,200,000 / 1,500,000 |
//! | Flat   | 1        | none (20% on the whole income)              |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::{Income, flat_tax, new_regime_tax, old_regime_tax};
//!
//! let income = Income::new(dec!(400000)).unwrap();
//!
//! assert_eq!(old_regime_tax(income), dec!(7800.00));
//! assert_eq!(new_regime_tax(income), dec!(5200.00));
//! assert_eq!(flat_tax(income), dec!(83200.00));
//! ```

use rust_decimal::Decimal;

use crate::models::{CESS_RATE, Income, TaxBracket, TaxRegime};

/// Tax under the old progressive regime, cess included.
pub fn old_regime_tax(income: Income) -> Decimal {
    regime_tax(TaxRegime::Old, income)
}

/// Tax under the new progressive regime, cess included.
pub fn new_regime_tax(income: Income) -> Decimal {
    regime_tax(TaxRegime::New, income)
}

/// Tax under the flat regime: 20% of the income plus cess.
pub fn flat_tax(income: Income) -> Decimal {
    regime_tax(TaxRegime::Flat, income)
}

/// Tax under `regime`, cess included.
pub fn regime_tax(
    regime: TaxRegime,
    income: Income,
) -> Decimal {
    with_cess(base_tax(regime.brackets(), income.amount()))
}

/// Tax before cess, read from the bracket schedule.
///
/// The schedules are contiguous from zero and end with an unbounded bracket,
/// so every positive income matches exactly one bracket.
pub(crate) fn base_tax(
    brackets: &[TaxBracket],
    income: Decimal,
) -> Decimal {
    if income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    brackets
        .iter()
        .find(|b| b.contains(income))
        .map(|b| b.base_tax + (income - b.min_income) * b.tax_rate)
        .unwrap_or_default()
}

fn with_cess(tax: Decimal) -> Decimal {
    tax * (Decimal::ONE + CESS_RATE)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn income(amount: Decimal) -> Income {
        Income::new(amount).unwrap()
    }

    /// Straight transcription of the slab formulas, used as an oracle.
    fn old_regime_by_formula(x: Decimal) -> Decimal {
        let base = if x <= dec!(250000) {
            dec!(0)
        } else if x <= dec!(500000) {
            (x - dec!(250000)) * dec!(0.05)
        } else if x <= dec!(1000000) {
            dec!(250000) * dec!(0.05) + (x - dec!(500000)) * dec!(0.20)
        } else {
            dec!(250000) * dec!(0.05)
                + dec!(500000) * dec!(0.20)
                + (x - dec!(1000000)) * dec!(0.30)
        };
        base * dec!(1.04)
    }

    fn new_regime_by_formula(x: Decimal) -> Decimal {
        let slab = dec!(300000);
        let base = if x <= dec!(300000) {
            dec!(0)
        } else if x <= dec!(600000) {
            (x - dec!(300000)) * dec!(0.05)
        } else if x <= dec!(900000) {
            slab * dec!(0.05) + (x - dec!(600000)) * dec!(0.10)
        } else if x <= dec!(1200000) {
            slab * dec!(0.05) + slab * dec!(0.10) + (x - dec!(900000)) * dec!(0.15)
        } else if x <= dec!(1500000) {
            slab * dec!(0.05)
                + slab * dec!(0.10)
                + slab * dec!(0.15)
                + (x - dec!(1200000)) * dec!(0.20)
        } else {
            slab * dec!(0.05)
                + slab * dec!(0.10)
                + slab * dec!(0.15)
                + slab * dec!(0.20)
                + (x - dec!(1500000)) * dec!(0.30)
        };
        base * dec!(1.04)
    }

    fn sample_incomes() -> Vec<Decimal> {
        let mut samples = Vec::new();
        let mut x = dec!(0);
        while x <= dec!(4000000) {
            samples.push(x);
            x += dec!(12345.67);
        }
        samples.extend([
            dec!(250000),
            dec!(300000),
            dec!(500000),
            dec!(600000),
            dec!(900000),
            dec!(1000000),
            dec!(1200000),
            dec!(1500000),
        ]);
        samples
    }

    // =========================================================================
    // old regime
    // =========================================================================

    #[test]
    fn old_regime_is_zero_up_to_first_boundary() {
        for amount in [dec!(0), dec!(1), dec!(100000), dec!(249999.99), dec!(250000)] {
            assert_eq!(old_regime_tax(income(amount)), Decimal::ZERO);
        }
    }

    #[test]
    fn old_regime_second_slab() {
        let result = old_regime_tax(income(dec!(400000)));

        assert_eq!(result, dec!(7800.00));
    }

    #[test]
    fn old_regime_third_slab() {
        // (12,500 + 250,000 × 0.20) × 1.04
        let result = old_regime_tax(income(dec!(750000)));

        assert_eq!(result, dec!(65000.00));
    }

    #[test]
    fn old_regime_top_slab() {
        let result = old_regime_tax(income(dec!(1200000)));

        assert_eq!(result, dec!(179400.00));
    }

    #[test]
    fn old_regime_matches_slab_formulas() {
        for x in sample_incomes() {
            assert_eq!(old_regime_tax(income(x)), old_regime_by_formula(x), "income {x}");
        }
    }

    // =========================================================================
    // new regime
    // =========================================================================

    #[test]
    fn new_regime_is_zero_up_to_first_boundary() {
        for amount in [dec!(0), dec!(250000), dec!(299999.99), dec!(300000)] {
            assert_eq!(new_regime_tax(income(amount)), Decimal::ZERO);
        }
    }

    #[test]
    fn new_regime_second_slab() {
        let result = new_regime_tax(income(dec!(400000)));

        assert_eq!(result, dec!(5200.00));
    }

    #[test]
    fn new_regime_at_fourth_boundary() {
        // (15,000 + 30,000 + 45,000) × 1.04
        let result = new_regime_tax(income(dec!(1200000)));

        assert_eq!(result, dec!(93600.00));
    }

    #[test]
    fn new_regime_top_slab() {
        // (150,000 + 500,000 × 0.30) × 1.04
        let result = new_regime_tax(income(dec!(2000000)));

        assert_eq!(result, dec!(312000.00));
    }

    #[test]
    fn new_regime_matches_slab_formulas() {
        for x in sample_incomes() {
            assert_eq!(new_regime_tax(income(x)), new_regime_by_formula(x), "income {x}");
        }
    }

    // =========================================================================
    // flat regime
    // =========================================================================

    #[test]
    fn flat_tax_is_income_times_0_208() {
        for x in sample_incomes() {
            assert_eq!(flat_tax(income(x)), x * dec!(0.208), "income {x}");
        }
    }

    #[test]
    fn flat_tax_at_two_million() {
        let result = flat_tax(income(dec!(2000000)));

        assert_eq!(result, dec!(416000.00));
    }

    // =========================================================================
    // shared properties
    // =========================================================================

    #[test]
    fn every_regime_is_non_negative_and_monotonic() {
        let mut samples = sample_incomes();
        samples.sort();

        for regime in TaxRegime::ALL {
            let mut previous = Decimal::ZERO;
            for &x in &samples {
                let tax = regime_tax(regime, income(x));

                assert!(tax >= Decimal::ZERO, "{regime} negative at {x}");
                assert!(tax >= previous, "{regime} decreased at {x}");
                previous = tax;
            }
        }
    }

    #[test]
    fn every_regime_is_continuous_at_bracket_boundaries() {
        let epsilon = dec!(0.01);

        for regime in TaxRegime::ALL {
            for bracket in regime.brackets() {
                let Some(boundary) = bracket.max_income else {
                    continue;
                };
                let at = regime_tax(regime, income(boundary));
                let above = regime_tax(regime, income(boundary + epsilon));
                let next_rate = regime
                    .brackets()
                    .iter()
                    .find(|b| b.min_income == boundary)
                    .map(|b| b.tax_rate)
                    .unwrap();

                // Crossing the boundary adds only the next slab's marginal tax.
                assert_eq!(above - at, epsilon * next_rate * dec!(1.04), "{regime} at {boundary}");
            }
        }
    }

    #[test]
    fn base_tax_of_zero_income_is_zero() {
        assert_eq!(base_tax(&crate::models::OLD_REGIME_BRACKETS, dec!(0)), Decimal::ZERO);
    }
}
