use rust_decimal::Decimal;
use tax_core::calculations::common::round_half_up;
use tax_core::{Income, IncomeError};
use thiserror::Error;

/// Symbol printed in front of every currency amount.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
#[error("invalid decimal '{input}': {source}")]
pub struct ParseDecimalError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Error returned when a string is not a valid [`Income`].
#[derive(Debug, Error)]
pub enum ParseIncomeError {
    #[error(transparent)]
    Decimal(#[from] ParseDecimalError),

    #[error(transparent)]
    Income(#[from] IncomeError),
}

/// Normalizes input for decimal parsing: trims whitespace, drops a leading
/// currency symbol and removes commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    let trimmed = s.trim();
    trimmed
        .strip_prefix(CURRENCY_SYMBOL)
        .unwrap_or(trimmed)
        .trim()
        .replace(',', "")
}

/// Parses a string into a [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`).
/// Empty or whitespace-only input is treated as 0.
/// Returns an error and logs when the input is invalid (non-empty but not parseable).
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| {
        tracing::error!(input = %s, "invalid decimal: {}", e);
        ParseDecimalError {
            input: s.to_string(),
            source: e,
        }
    })
}

/// Parses a string into an [`Income`], rejecting negative amounts.
pub fn parse_income(s: &str) -> Result<Income, ParseIncomeError> {
    let amount = parse_decimal(s)?;
    Ok(Income::new(amount)?)
}

/// Formats an amount as currency: two decimals, half-up rounding and comma
/// thousands separators (e.g. `₹1,234,567.89`).
pub fn format_currency(amount: Decimal) -> String {
    format!("{CURRENCY_SYMBOL}{}", format_grouped(amount))
}

/// Formats an amount with two decimals and comma thousands separators.
pub fn format_grouped(amount: Decimal) -> String {
    let rounded = round_half_up(amount);
    let fixed = format!("{:.2}", rounded.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, digit) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{fraction}")
}
