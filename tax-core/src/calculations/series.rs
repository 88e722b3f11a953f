//! Sampled tax curves for charting.
//!
//! [`build_series`] yields evenly spaced incomes from zero to a maximum, each
//! with the three regimes' tax and effective rate. The iterator is lazy and
//! every sample is computed from its index, so a clone or a fresh call yields
//! identical points.
//!
//! [`tax_chart`] and [`effective_rate_chart`] project the samples onto the
//! two charts shown to the user.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::{Income, build_series};
//!
//! let points: Vec<_> = build_series(Income::new(dec!(1000)).unwrap(), 3).collect();
//!
//! assert_eq!(points.len(), 3);
//! assert_eq!(points[1].income, dec!(500));
//! assert_eq!(points[2].flat_tax, dec!(208.000));
//! assert_eq!(points[0].effective_flat, dec!(0));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::effective_rate;
use crate::calculations::regimes::regime_tax;
use crate::models::{Income, SeriesPoint, TaxRegime};

/// Lazy sequence of [`SeriesPoint`]s between zero and a maximum income.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxSeries {
    max_income: Income,
    num_points: usize,
    front: usize,
    back: usize,
}

/// Samples `num_points` incomes evenly spaced over `[0, max_income]`.
///
/// Both ends are included. A single point samples zero only; zero points
/// yields an empty sequence.
pub fn build_series(
    max_income: Income,
    num_points: usize,
) -> TaxSeries {
    TaxSeries {
        max_income,
        num_points,
        front: 0,
        back: num_points,
    }
}

impl TaxSeries {
    fn income_at(
        &self,
        index: usize,
    ) -> Decimal {
        if self.num_points < 2 {
            return Decimal::ZERO;
        }
        let max = self.max_income.amount();
        let steps = self.num_points - 1;
        if index >= steps {
            return max;
        }
        let (index, steps) = (Decimal::from(index), Decimal::from(steps));
        // Dividing first loses precision, so only do it when the product overflows.
        max.checked_mul(index)
            .map(|scaled| scaled / steps)
            .unwrap_or_else(|| max / steps * index)
    }

    fn point_at(
        &self,
        index: usize,
    ) -> SeriesPoint {
        let amount = self.income_at(index);
        // Samples lie between zero and a valid income.
        let income = Income::new(amount).unwrap_or(Income::ZERO);

        let [old_tax, new_tax, flat_tax] = TaxRegime::ALL.map(|regime| regime_tax(regime, income));

        SeriesPoint {
            income: amount,
            old_tax,
            new_tax,
            flat_tax,
            effective_old: effective_rate(old_tax, amount),
            effective_new: effective_rate(new_tax, amount),
            effective_flat: effective_rate(flat_tax, amount),
        }
    }
}

impl Iterator for TaxSeries {
    type Item = SeriesPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let point = self.point_at(self.front);
        self.front += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for TaxSeries {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.point_at(self.back))
    }
}

impl ExactSizeIterator for TaxSeries {}

/// One labelled line of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartLine {
    pub label: String,
    pub values: Vec<Decimal>,
}

/// Data for one chart: a shared income axis and one line per regime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub incomes: Vec<Decimal>,
    pub lines: Vec<ChartLine>,
}

/// Income against total tax for each regime.
pub fn tax_chart(points: &[SeriesPoint]) -> ChartSeries {
    chart(
        "Income vs Total Tax",
        "Total Tax",
        points,
        SeriesPoint::taxes,
    )
}

/// Income against effective tax rate (percent) for each regime.
pub fn effective_rate_chart(points: &[SeriesPoint]) -> ChartSeries {
    chart(
        "Income vs Effective Tax Rate",
        "Effective Tax Rate (%)",
        points,
        SeriesPoint::effective_rates,
    )
}

fn chart(
    title: &str,
    y_label: &str,
    points: &[SeriesPoint],
    values: fn(&SeriesPoint) -> [Decimal; 3],
) -> ChartSeries {
    let lines = TaxRegime::ALL
        .iter()
        .enumerate()
        .map(|(idx, regime)| ChartLine {
            label: regime.label().to_string(),
            values: points.iter().map(|p| values(p)[idx]).collect(),
        })
        .collect();

    ChartSeries {
        title: title.to_string(),
        x_label: "Income".to_string(),
        y_label: y_label.to_string(),
        incomes: points.iter().map(|p| p.income).collect(),
        lines,
    }
}
