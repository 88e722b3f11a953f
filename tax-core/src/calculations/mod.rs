//! Tax calculations for the old, new and flat regimes.
//!
//! This module provides the per-regime tax functions, the comparison that
//! picks the cheapest regime, and the sampled series used for charting.

pub mod common;
pub mod comparison;
pub mod regimes;
pub mod series;

pub use comparison::{break_even_income, compare_regimes, select_best_regime};
pub use regimes::{flat_tax, new_regime_tax, old_regime_tax, regime_tax};
pub use series::{ChartLine, ChartSeries, TaxSeries, build_series, effective_rate_chart, tax_chart};
