//! CSV loader for batch regime comparisons.
//!
//! ## CSV Format
//!
//! Column order does **not** matter (headers are matched by name). Header
//! names are case-sensitive.
//!
//! | Column   | Required | Type    | Notes                                           |
//! |----------|----------|---------|-------------------------------------------------|
//! | `income` | yes      | decimal | Non-negative. Quote values using `,` grouping. |
//! | `label`  | no       | string  | Free text shown next to the row's results.     |
//!
//! ### Example
//!
//! ```csv
//! label,income
//! Intern,240000
//! Engineer,"1,200,000"
//! Director,4500000.50
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tax_core::{Income, IncomeError};
use tracing::debug;

use crate::utils::{ParseDecimalError, parse_decimal};

#[derive(Debug, Deserialize)]
struct CsvRow {
    income: String,
    #[serde(default)]
    label: Option<String>,
}

/// One income to compare, with its optional label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomeRow {
    pub label: Option<String>,
    pub income: Income,
}

/// Errors that can occur while loading incomes from CSV.
#[derive(Debug, thiserror::Error)]
pub enum IncomeLoadError {
    /// The underlying CSV deserialisation failed (bad structure, missing
    /// `income` column, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// An `income` cell is not a number. `row` is 1-based (header = row 0).
    #[error("invalid income on row {row}: {source}")]
    InvalidAmount {
        row: usize,
        #[source]
        source: ParseDecimalError,
    },

    /// An `income` cell is negative.
    #[error("invalid income on row {row}: {source}")]
    NegativeIncome {
        row: usize,
        #[source]
        source: IncomeError,
    },

    /// The file could not be read.
    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<IncomeRow, IncomeLoadError> {
    let amount = parse_decimal(&row.income).map_err(|source| IncomeLoadError::InvalidAmount {
        row: row_number,
        source,
    })?;
    let income = Income::new(amount).map_err(|source| IncomeLoadError::NegativeIncome {
        row: row_number,
        source,
    })?;
    let label = row.label.filter(|l| !l.is_empty());

    Ok(IncomeRow { label, income })
}

/// Parse CSV text and return the incomes in file order.
///
/// # Errors
///
/// * [`IncomeLoadError::Parse`] – if the CSV is structurally invalid.
/// * [`IncomeLoadError::InvalidAmount`] – if an income is not a number.
/// * [`IncomeLoadError::NegativeIncome`] – if an income is below zero.
pub fn load_from_str(input: &str) -> Result<Vec<IncomeRow>, IncomeLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    let rows = reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| convert_row(result?, idx + 1))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(rows = rows.len(), "loaded incomes from CSV");
    Ok(rows)
}

/// Read a file from disk and delegate to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<Vec<IncomeRow>, IncomeLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| IncomeLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&contents)
}
