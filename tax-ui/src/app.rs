//! Report rendering for the command-line front end.

use std::fmt;

use rust_decimal::Decimal;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Columns},
};
use tax_core::{
    CESS_RATE, FLAT_TAX_RATE, Income, RegimeComparison, TaxRegime, break_even_income, compare_regimes,
};

use crate::income_loader::IncomeRow;
use crate::utils::format_currency;

/// Number of chart samples used when none is requested.
pub const DEFAULT_CHART_POINTS: usize = 200;

fn as_percent(rate: Decimal) -> Decimal {
    (rate * Decimal::ONE_HUNDRED).normalize()
}

/// Heading used for a regime in the summary.
pub fn summary_label(regime: TaxRegime) -> String {
    match regime {
        TaxRegime::Flat => format!("{} ({}%)", regime.label(), as_percent(FLAT_TAX_RATE)),
        _ => regime.label().to_string(),
    }
}

/// Upper end of the chart axis: the income itself, but never below 1.
pub fn chart_max_income(income: Income) -> Income {
    if income.amount() < Decimal::ONE {
        Income::new(Decimal::ONE).unwrap_or(income)
    } else {
        income
    }
}

/// Income above which the flat regime beats both progressive regimes.
pub fn flat_tax_break_even() -> Option<Decimal> {
    [TaxRegime::Old, TaxRegime::New]
        .into_iter()
        .map(|incumbent| break_even_income(TaxRegime::Flat, incumbent))
        .collect::<Option<Vec<_>>>()?
        .into_iter()
        .max()
}

/// Tax summary for a single income.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxSummary {
    pub comparison: RegimeComparison,
    pub flat_break_even: Option<Decimal>,
}

impl TaxSummary {
    /// Builds the summary, or `None` for a zero income (nothing to compute).
    pub fn new(income: Income) -> Option<Self> {
        if income.is_zero() {
            return None;
        }
        Some(Self {
            comparison: compare_regimes(income),
            flat_break_even: flat_tax_break_even(),
        })
    }
}

impl fmt::Display for TaxSummary {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(
            f,
            "Tax Summary for {} (includes {}% cess)",
            format_currency(self.comparison.income.amount()),
            as_percent(CESS_RATE)
        )?;
        let rows: Vec<RegimeRow> = self
            .comparison
            .taxes
            .iter()
            .map(|tax| RegimeRow {
                regime: summary_label(tax.regime),
                tax: format_currency(tax.amount),
            })
            .collect();
        writeln!(f, "{}", styled(Table::new(rows)))?;
        writeln!(
            f,
            "Lowest Tax Regime: {}",
            self.comparison.best.regime.label()
        )?;
        if let Some(threshold) = self.flat_break_even {
            write!(
                f,
                "{} is the cheapest only above {}",
                TaxRegime::Flat.label(),
                format_currency(threshold)
            )?;
        }
        Ok(())
    }
}

/// Side-by-side comparison of several incomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub rows: Vec<(Option<String>, RegimeComparison)>,
}

impl BatchReport {
    pub fn new(rows: &[IncomeRow]) -> Self {
        Self {
            rows: rows
                .iter()
                .map(|row| (row.label.clone(), compare_regimes(row.income)))
                .collect(),
        }
    }
}

impl fmt::Display for BatchReport {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let rows: Vec<BatchRow> = self
            .rows
            .iter()
            .map(|(label, comparison)| BatchRow {
                label: label.clone().unwrap_or_else(|| "-".to_string()),
                income: format_currency(comparison.income.amount()),
                old_tax: format_currency(comparison.tax_for(TaxRegime::Old)),
                new_tax: format_currency(comparison.tax_for(TaxRegime::New)),
                flat_tax: format_currency(comparison.tax_for(TaxRegime::Flat)),
                lowest: comparison.best.regime.label().to_string(),
            })
            .collect();
        write!(f, "{}", styled(Table::new(rows)))
    }
}

#[derive(Tabled)]
struct RegimeRow {
    #[tabled(rename = "Regime")]
    regime: String,
    #[tabled(rename = "Tax")]
    tax: String,
}

#[derive(Tabled)]
struct BatchRow {
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Old Regime")]
    old_tax: String,
    #[tabled(rename = "New Regime")]
    new_tax: String,
    #[tabled(rename = "Flat Tax (20%)")]
    flat_tax: String,
    #[tabled(rename = "Lowest")]
    lowest: String,
}

/// Rounded borders with amounts right-aligned.
fn styled(mut table: Table) -> Table {
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()));
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn income(amount: Decimal) -> Income {
        Income::new(amount).unwrap()
    }

    #[test]
    fn summary_label_names_flat_rate() {
        assert_eq!(summary_label(TaxRegime::Flat), "Flat Tax (20%)");
        assert_eq!(summary_label(TaxRegime::Old), "Old Regime");
    }

    #[test]
    fn zero_income_requests_no_summary() {
        assert_eq!(TaxSummary::new(Income::ZERO), None);
    }

    #[test]
    fn chart_max_income_is_at_least_one() {
        assert_eq!(chart_max_income(Income::ZERO).amount(), dec!(1));
        assert_eq!(chart_max_income(income(dec!(0.5))).amount(), dec!(1));
        assert_eq!(chart_max_income(income(dec!(400000))).amount(), dec!(400000));
    }

    #[test]
    fn flat_break_even_is_three_million() {
        assert_eq!(flat_tax_break_even(), Some(dec!(3000000)));
    }

    #[test]
    fn summary_renders_amounts_and_best_regime() {
        let summary = TaxSummary::new(income(dec!(400000))).unwrap();
        let text = summary.to_string();

        assert!(text.starts_with("Tax Summary for ₹400,000.00"));
        assert!(text.contains("Old Regime"));
        assert!(text.contains("₹7,800.00"));
        assert!(text.contains("₹5,200.00"));
        assert!(text.contains("Flat Tax (20%)"));
        assert!(text.contains("₹83,200.00"));
        assert!(text.contains("Lowest Tax Regime: New Regime"));
        assert!(text.contains("cheapest only above ₹3,000,000.00"));
    }

    #[test]
    fn summary_table_lists_every_regime() {
        let summary = TaxSummary::new(income(dec!(1200000))).unwrap();
        let text = summary.to_string();

        for regime in TaxRegime::ALL {
            assert!(text.contains(&summary_label(regime)), "missing {regime}");
        }
        assert!(text.contains("₹179,400.00"));
        assert!(text.contains("₹93,600.00"));
    }

    fn batch_rows() -> Vec<IncomeRow> {
        vec![
            IncomeRow {
                label: Some("Intern".to_string()),
                income: income(dec!(240000)),
            },
            IncomeRow {
                label: Some("Senior Principal Engineer".to_string()),
                income: income(dec!(1200000)),
            },
            IncomeRow {
                label: None,
                income: income(dec!(4000000)),
            },
        ]
    }

    #[test]
    fn batch_report_has_one_row_per_income() {
        let text = BatchReport::new(&batch_rows()).to_string();
        let body: Vec<_> = text.lines().filter(|l| l.starts_with('│')).collect();

        // Header plus three incomes.
        assert_eq!(body.len(), 4);
        assert!(body[0].contains("Flat Tax (20%)"));
        assert!(body[1].contains("Intern") && body[1].contains("Old Regime"));
        assert!(body[3].contains("Flat Tax"));
    }

    #[test]
    fn batch_report_stays_aligned_with_long_labels() {
        let text = BatchReport::new(&batch_rows()).to_string();
        let widths: Vec<_> = text.lines().map(|l| l.chars().count()).collect();

        assert!(text.contains("Senior Principal Engineer"));
        assert!(widths.iter().all(|w| *w == widths[0]), "ragged table: {widths:?}");
    }

    #[test]
    fn batch_header_matches_summary_labels() {
        let text = BatchReport::new(&batch_rows()).to_string();
        let header = text.lines().find(|l| l.starts_with('│')).unwrap();

        for regime in TaxRegime::ALL {
            assert!(header.contains(&summary_label(regime)), "missing {regime}");
        }
    }
}
