use std::fmt;

use serde::{Deserialize, Serialize};

use super::tax_bracket::{
    FLAT_REGIME_BRACKETS, NEW_REGIME_BRACKETS, OLD_REGIME_BRACKETS, TaxBracket,
};

/// One of the three alternative tax schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxRegime {
    Old,
    New,
    Flat,
}

impl TaxRegime {
    /// Every regime, in the order used to break ties between equal amounts.
    pub const ALL: [TaxRegime; 3] = [TaxRegime::Old, TaxRegime::New, TaxRegime::Flat];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Old => "Old Regime",
            Self::New => "New Regime",
            Self::Flat => "Flat Tax",
        }
    }

    pub fn brackets(&self) -> &'static [TaxBracket] {
        match self {
            Self::Old => &OLD_REGIME_BRACKETS,
            Self::New => &NEW_REGIME_BRACKETS,
            Self::Flat => &FLAT_REGIME_BRACKETS,
        }
    }
}

impl fmt::Display for TaxRegime {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}
