//! Control:treatment traffic allocation.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{Result, ValidationError};

/// Traffic allocation between the control group and each treatment group,
/// expressed as a pair of positive weights.
///
/// The weights carry no unit: `50:50`, `1:1`, and `0.5:0.5` describe the
/// same split. Construction validates that both weights are strictly
/// positive, so a held `Allocation` is always usable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    control: f64,
    treatment: f64,
}

impl Allocation {
    /// Creates an allocation from control and treatment weights.
    ///
    /// # Errors
    ///
    /// Returns an error if either weight is zero or negative.
    pub fn new(control: f64, treatment: f64) -> Result<Self> {
        if control <= 0.0 || treatment <= 0.0 {
            return Err(ValidationError::AllocationWeights);
        }
        Ok(Self { control, treatment })
    }

    /// Returns the control weight as given.
    #[must_use]
    pub const fn control(&self) -> f64 {
        self.control
    }

    /// Returns the treatment weight as given.
    #[must_use]
    pub const fn treatment(&self) -> f64 {
        self.treatment
    }

    /// Returns the treatment:control ratio `r`.
    #[must_use]
    pub const fn ratio(&self) -> f64 {
        self.treatment / self.control
    }

    /// Returns the control share of traffic, normalized to sum to 1 with
    /// [`treatment_share`](Self::treatment_share).
    #[must_use]
    pub const fn control_share(&self) -> f64 {
        self.control / (self.control + self.treatment)
    }

    /// Returns the treatment share of traffic, normalized to sum to 1 with
    /// [`control_share`](Self::control_share).
    #[must_use]
    pub const fn treatment_share(&self) -> f64 {
        self.treatment / (self.control + self.treatment)
    }
}

impl Default for Allocation {
    fn default() -> Self {
        Self {
            control: 50.0,
            treatment: 50.0,
        }
    }
}

impl std::fmt::Display for Allocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.control, self.treatment)
    }
}

impl FromStr for Allocation {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        let (control_text, treatment_text) = s
            .split_once(':')
            .ok_or_else(|| ValidationError::AllocationFormat(s.to_string()))?;
        let control: f64 = control_text
            .trim()
            .parse()
            .map_err(|_| ValidationError::AllocationFormat(s.to_string()))?;
        let treatment: f64 = treatment_text
            .trim()
            .parse()
            .map_err(|_| ValidationError::AllocationFormat(s.to_string()))?;
        Self::new(control, treatment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_even_split() {
        let allocation: Allocation = "50:50".parse().unwrap();
        assert_relative_eq!(allocation.ratio(), 1.0);
        assert_relative_eq!(allocation.control_share(), 0.5);
        assert_relative_eq!(allocation.treatment_share(), 0.5);
    }

    #[test]
    fn test_parse_uneven_split() {
        let allocation: Allocation = "40:60".parse().unwrap();
        assert_relative_eq!(allocation.ratio(), 1.5);
        assert_relative_eq!(allocation.control_share(), 0.4);
        assert_relative_eq!(allocation.treatment_share(), 0.6);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let allocation: Allocation = " 1 : 3 ".parse().unwrap();
        assert_relative_eq!(allocation.ratio(), 3.0);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("50".parse::<Allocation>().is_err());
        assert!("a:b".parse::<Allocation>().is_err());
        assert!("".parse::<Allocation>().is_err());
    }

    #[test]
    fn test_rejects_non_positive_weights() {
        assert_eq!(
            "0:50".parse::<Allocation>().unwrap_err(),
            ValidationError::AllocationWeights
        );
        assert_eq!(
            Allocation::new(50.0, -1.0).unwrap_err(),
            ValidationError::AllocationWeights
        );
    }

    #[test]
    fn test_display() {
        let allocation = Allocation::new(40.0, 60.0).unwrap();
        assert_eq!(allocation.to_string(), "40:60");
    }

    #[test]
    fn test_default_is_even() {
        assert_relative_eq!(Allocation::default().ratio(), 1.0);
    }
}
