//! Regime comparison.
//!
//! The cheapest regime is picked by scanning an ordered list of
//! (regime, amount) pairs and keeping the first minimum, so equal amounts
//! resolve to old, then new, then flat.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::{Income, TaxRegime, select_best_regime};
//!
//! let best = select_best_regime(Income::new(dec!(400000)).unwrap());
//!
//! assert_eq!(best.regime, TaxRegime::New);
//! assert_eq!(best.amount, dec!(5200.00));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::regimes::{base_tax, regime_tax};
use crate::models::{Income, RegimeComparison, RegimeTax, TaxRegime};

/// Evaluates all three regimes for `income` and selects the cheapest.
pub fn compare_regimes(income: Income) -> RegimeComparison {
    let taxes = TaxRegime::ALL.map(|regime| RegimeTax {
        regime,
        amount: regime_tax(regime, income),
    });
    let best = first_minimum(&taxes);

    debug!(
        %income,
        old = %taxes[0].amount,
        new = %taxes[1].amount,
        flat = %taxes[2].amount,
        best = best.regime.label(),
        "compared regimes"
    );

    RegimeComparison {
        income,
        taxes,
        best,
    }
}

/// Returns the regime with the smallest tax for `income`.
///
/// Ties go to the regime evaluated first (old, then new, then flat).
pub fn select_best_regime(income: Income) -> RegimeTax {
    compare_regimes(income).best
}

fn first_minimum(taxes: &[RegimeTax; 3]) -> RegimeTax {
    let mut best = taxes[0];
    for candidate in &taxes[1..] {
        // Strict comparison keeps the earlier regime on ties.
        if candidate.amount < best.amount {
            best = *candidate;
        }
    }
    best
}

/// Finds the income above which `challenger` is always strictly cheaper than
/// `incumbent`.
///
/// Both taxes are piecewise linear with kinks only at bracket boundaries, so
/// the difference is linear between consecutive boundaries and the crossing
/// point can be solved exactly. Returns `None` when `challenger` never stays
/// cheaper, i.e. it is not strictly cheaper on the unbounded top slab.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::{TaxRegime, break_even_income};
///
/// let flat_beats_new = break_even_income(TaxRegime::Flat, TaxRegime::New);
/// assert_eq!(flat_beats_new, Some(dec!(3000000)));
///
/// assert_eq!(break_even_income(TaxRegime::Old, TaxRegime::New), None);
/// ```
pub fn break_even_income(
    challenger: TaxRegime,
    incumbent: TaxRegime,
) -> Option<Decimal> {
    let boundaries = shared_boundaries(challenger, incumbent);
    let difference = |x: Decimal| {
        base_tax(challenger.brackets(), x) - base_tax(incumbent.brackets(), x)
    };

    // Top slab: the difference grows by `slope` per unit of income.
    let top = *boundaries.last()?;
    let slope = top_rate(challenger) - top_rate(incumbent);
    let at_top = difference(top);

    if slope > Decimal::ZERO || (slope.is_zero() && at_top >= Decimal::ZERO) {
        return None;
    }
    if at_top >= Decimal::ZERO {
        return Some((top - at_top / slope).normalize());
    }

    // Walk down until the challenger is no longer cheaper.
    for pair in boundaries.windows(2).rev() {
        let (low, high) = (pair[0], pair[1]);
        let (at_low, at_high) = (difference(low), difference(high));
        if at_low >= Decimal::ZERO {
            let crossing = low + at_low * (high - low) / (at_low - at_high);
            return Some(crossing.normalize());
        }
        debug_assert!(at_high < Decimal::ZERO);
    }

    Some(Decimal::ZERO)
}

/// Sorted, de-duplicated bracket boundaries of both regimes, starting at 0.
fn shared_boundaries(
    a: TaxRegime,
    b: TaxRegime,
) -> Vec<Decimal> {
    let mut boundaries: Vec<Decimal> = a
        .brackets()
        .iter()
        .chain(b.brackets())
        .map(|bracket| bracket.min_income)
        .collect();
    boundaries.sort();
    boundaries.dedup();
    boundaries
}

fn top_rate(regime: TaxRegime) -> Decimal {
    regime
        .brackets()
        .last()
        .map(|b| b.tax_rate)
        .unwrap_or_default()
}
