//! Alternative hypothesis definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::ValidationError;

/// Alternative hypothesis for the difference in proportions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Alternative {
    /// Two-sided alternative: the treatment rate differs in either direction.
    #[default]
    TwoSided,
    /// One-sided alternative: the treatment rate moves in the expected direction.
    OneSided,
}

impl Alternative {
    /// Returns the number of tails the significance quantile is split over.
    #[must_use]
    pub const fn tails(&self) -> f64 {
        match self {
            Self::TwoSided => 2.0,
            Self::OneSided => 1.0,
        }
    }

    /// Returns the alternative as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TwoSided => "two-sided",
            Self::OneSided => "one-sided",
        }
    }

    /// Returns all available alternatives.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::TwoSided, Self::OneSided]
    }
}

impl std::fmt::Display for Alternative {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Alternative {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "two-sided" | "two_sided" | "twosided" => Ok(Self::TwoSided),
            "one-sided" | "one_sided" | "onesided" => Ok(Self::OneSided),
            _ => Err(ValidationError::UnknownAlternative(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tails() {
        assert_eq!(Alternative::TwoSided.tails(), 2.0);
        assert_eq!(Alternative::OneSided.tails(), 1.0);
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "two-sided".parse::<Alternative>().unwrap(),
            Alternative::TwoSided
        );
        assert_eq!(
            "One-Sided".parse::<Alternative>().unwrap(),
            Alternative::OneSided
        );
        assert!("greater".parse::<Alternative>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for alt in Alternative::all() {
            assert_eq!(alt.to_string().parse::<Alternative>().unwrap(), *alt);
        }
    }
}
