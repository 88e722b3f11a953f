mod income;
mod regime;
mod tax_bracket;
mod tax_result;

pub use income::{Income, IncomeError};
pub use regime::TaxRegime;
pub use tax_bracket::{
    CESS_RATE, FLAT_REGIME_BRACKETS, FLAT_TAX_RATE, NEW_REGIME_BRACKETS, OLD_REGIME_BRACKETS,
    TaxBracket,
};
pub use tax_result::{RegimeComparison, RegimeTax, SeriesPoint};
