pub mod calculations;
pub mod models;

pub use calculations::{
    break_even_income, build_series, compare_regimes, flat_tax, new_regime_tax, old_regime_tax,
    select_best_regime,
};
pub use models::*;
