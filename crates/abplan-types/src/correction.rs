//! Multiple testing correction methods.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::ValidationError;

/// Multiple testing correction applied when several treatment groups are
/// compared against the same control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Correction {
    /// No correction: the family-wise error rate is not controlled.
    #[default]
    None,
    /// Bonferroni correction: alpha is split evenly across comparisons.
    Bonferroni,
    /// Šidák correction: the per-comparison alpha that compounds back to
    /// the family-wise level over independent comparisons.
    Sidak,
}

impl Correction {
    /// Returns the per-comparison significance level for the given raw
    /// `alpha` and number of pairwise comparisons.
    ///
    /// With a single comparison every correction is a no-op.
    #[must_use]
    pub fn adjusted_alpha(&self, alpha: f64, comparisons: u32) -> f64 {
        if comparisons <= 1 {
            return alpha;
        }
        match self {
            Self::None => alpha,
            Self::Bonferroni => alpha / f64::from(comparisons),
            Self::Sidak => 1.0 - (1.0 - alpha).powf(1.0 / f64::from(comparisons)),
        }
    }

    /// Returns the correction as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bonferroni => "bonferroni",
            Self::Sidak => "sidak",
        }
    }

    /// Returns all available corrections.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::None, Self::Bonferroni, Self::Sidak]
    }
}

impl std::fmt::Display for Correction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Correction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "bonferroni" => Ok(Self::Bonferroni),
            "sidak" | "šidák" => Ok(Self::Sidak),
            _ => Err(ValidationError::UnknownCorrection(s.to_string())),
        }
    }
}
