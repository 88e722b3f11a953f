//! CSV export of the chart series.
//!
//! Each chart is written as one file: an `income` column followed by one
//! column per regime, named after the regime label. Amounts are rounded to
//! two decimals.
//!
//! ```csv
//! income,Old Regime,New Regime,Flat Tax
//! 0.00,0.00,0.00,0.00
//! 200000.00,0.00,0.00,41600.00
//! 400000.00,7800.00,5200.00,83200.00
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use tax_core::SeriesPoint;
use tax_core::calculations::common::round_half_up;
use tax_core::calculations::{ChartSeries, effective_rate_chart, tax_chart};
use tracing::info;

/// File name of the income vs total tax chart.
pub const TAX_CHART_FILE: &str = "income_vs_tax.csv";

/// File name of the income vs effective rate chart.
pub const RATE_CHART_FILE: &str = "income_vs_effective_rate.csv";

/// Errors that can occur while writing chart CSV files.
#[derive(Debug, thiserror::Error)]
pub enum CsvExportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// A chart line does not have one value per income sample.
    #[error("chart line '{label}' has {actual} values, expected {expected}")]
    LineLength {
        label: String,
        expected: usize,
        actual: usize,
    },

    #[error("cannot create '{}': {source}", .path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot create directory '{}': {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write `chart` as CSV to any writer.
pub fn write_chart<W: Write>(
    writer: W,
    chart: &ChartSeries,
) -> Result<(), CsvExportError> {
    let expected = chart.incomes.len();
    if let Some(line) = chart.lines.iter().find(|l| l.values.len() != expected) {
        return Err(CsvExportError::LineLength {
            label: line.label.clone(),
            expected,
            actual: line.values.len(),
        });
    }

    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec!["income"];
    header.extend(chart.lines.iter().map(|l| l.label.as_str()));
    csv_writer.write_record(&header)?;

    for (idx, income) in chart.incomes.iter().enumerate() {
        let mut record = vec![format!("{:.2}", round_half_up(*income))];
        record.extend(
            chart
                .lines
                .iter()
                .map(|l| format!("{:.2}", round_half_up(l.values[idx]))),
        );
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Write `chart` as CSV to `path`, replacing any existing file.
pub fn write_chart_to_file(
    path: &Path,
    chart: &ChartSeries,
) -> Result<(), CsvExportError> {
    let file = std::fs::File::create(path).map_err(|source| CsvExportError::CreateFile {
        path: path.to_path_buf(),
        source,
    })?;
    write_chart(file, chart)
}

/// Write both charts for `points` into `dir`, creating it if needed.
///
/// Returns the paths written, tax chart first.
pub fn export_charts(
    dir: &Path,
    points: &[SeriesPoint],
) -> Result<[PathBuf; 2], CsvExportError> {
    std::fs::create_dir_all(dir).map_err(|source| CsvExportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let tax_path = dir.join(TAX_CHART_FILE);
    let rate_path = dir.join(RATE_CHART_FILE);

    write_chart_to_file(&tax_path, &tax_chart(points))?;
    write_chart_to_file(&rate_path, &effective_rate_chart(points))?;

    info!(
        points = points.len(),
        dir = %dir.display(),
        "exported chart series"
    );

    Ok([tax_path, rate_path])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tax_core::calculations::ChartLine;
    use tax_core::{Income, build_series};

    fn points(max: rust_decimal::Decimal, n: usize) -> Vec<SeriesPoint> {
        build_series(Income::new(max).unwrap(), n).collect()
    }

    fn render(chart: &ChartSeries) -> String {
        let mut buffer = Vec::new();
        write_chart(&mut buffer, chart).expect("write should succeed");
        String::from_utf8(buffer).expect("CSV should be UTF-8")
    }

    #[test]
    fn test_tax_chart_csv_layout() {
        let csv = render(&tax_chart(&points(dec!(400000), 3)));

        assert_eq!(
            csv,
            "\
income,Old Regime,New Regime,Flat Tax
0.00,0.00,0.00,0.00
200000.00,0.00,0.00,41600.00
400000.00,7800.00,5200.00,83200.00
"
        );
    }

    #[test]
    fn test_rate_chart_csv_layout() {
        let csv = render(&effective_rate_chart(&points(dec!(400000), 2)));

        assert_eq!(
            csv,
            "\
income,Old Regime,New Regime,Flat Tax
0.00,0.00,0.00,0.00
400000.00,1.95,1.30,20.80
"
        );
    }

    #[test]
    fn test_ragged_line_is_rejected() {
        let mut chart = tax_chart(&points(dec!(1000), 2));
        chart.lines.push(ChartLine {
            label: "Extra".to_string(),
            values: vec![dec!(1)],
        });

        let mut buffer = Vec::new();
        let result = write_chart(&mut buffer, &chart);

        assert!(matches!(
            result,
            Err(CsvExportError::LineLength { expected: 2, actual: 1, .. })
        ));
    }

    #[test]
    fn test_unwritable_path_reports_file() {
        let path = Path::new("/this/path/does/not/exist/income_vs_tax.csv");
        let result = write_chart_to_file(path, &tax_chart(&[]));

        match result {
            Err(err @ CsvExportError::CreateFile { .. }) => {
                assert!(err.to_string().contains("/this/path/does/not/exist/income_vs_tax.csv"));
            }
            other => panic!("expected CreateFile, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_series_writes_header_only() {
        let csv = render(&tax_chart(&[]));

        assert_eq!(csv, "income,Old Regime,New Regime,Flat Tax\n");
    }
}
