//! Sample size calculation inputs.

use serde::{Deserialize, Serialize};

use abplan_types::{Allocation, Alternative, Correction, Result, ValidationError};

/// Configuration for a binary-metric sample size calculation.
///
/// `baseline_rate_pct` and `mde_pct` are percentage points; `mde_pct` is
/// signed, so a negative value plans for a drop in the treatment rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleSizeInput {
    /// Alternative hypothesis type.
    pub alternative: Alternative,
    /// Confidence level `1 - alpha`, strictly between 0 and 1.
    pub confidence_level: f64,
    /// Statistical power `1 - beta`, strictly between 0 and 1.
    pub power: f64,
    /// Total number of groups, including control. At least 2.
    pub groups: u32,
    /// Multiple testing correction for multi-group tests.
    pub correction: Correction,
    /// Baseline conversion rate in percent, strictly between 0 and 100.
    pub baseline_rate_pct: f64,
    /// Minimum detectable effect in percentage points. Nonzero, and
    /// `baseline_rate_pct + mde_pct` must stay strictly inside (0, 100).
    pub mde_pct: f64,
    /// Control:treatment traffic allocation.
    pub allocation: Allocation,
}

impl SampleSizeInput {
    /// Checks every input constraint, returning the first violation.
    ///
    /// The allocation is already valid by construction and needs no
    /// further checks here.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the violated constraint.
    pub fn validate(&self) -> Result<()> {
        if self.confidence_level <= 0.0 || self.confidence_level >= 1.0 {
            return Err(ValidationError::ConfidenceLevel(self.confidence_level));
        }
        if self.power <= 0.0 || self.power >= 1.0 {
            return Err(ValidationError::Power(self.power));
        }
        if self.groups < 2 {
            return Err(ValidationError::Groups(self.groups));
        }
        if self.baseline_rate_pct <= 0.0 || self.baseline_rate_pct >= 100.0 {
            return Err(ValidationError::BaselineRate(self.baseline_rate_pct));
        }
        if self.mde_pct == 0.0 {
            return Err(ValidationError::ZeroMde);
        }
        let variant_pct = self.baseline_rate_pct + self.mde_pct;
        if variant_pct <= 0.0 || variant_pct >= 100.0 {
            return Err(ValidationError::VariantRate(variant_pct));
        }
        Ok(())
    }
}

impl Default for SampleSizeInput {
    fn default() -> Self {
        Self {
            alternative: Alternative::TwoSided,
            confidence_level: 0.95,
            power: 0.8,
            groups: 2,
            correction: Correction::None,
            baseline_rate_pct: 10.0,
            mde_pct: 2.0,
            allocation: Allocation::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SampleSizeInput::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_confidence_bounds() {
        for confidence_level in [0.0, 1.0, -0.1, 1.5] {
            let input = SampleSizeInput {
                confidence_level,
                ..Default::default()
            };
            assert_eq!(
                input.validate().unwrap_err(),
                ValidationError::ConfidenceLevel(confidence_level)
            );
        }
    }

    #[test]
    fn test_rejects_power_bounds() {
        let input = SampleSizeInput {
            power: 1.0,
            ..Default::default()
        };
        assert_eq!(input.validate().unwrap_err(), ValidationError::Power(1.0));
    }

    #[test]
    fn test_rejects_single_group() {
        let input = SampleSizeInput {
            groups: 1,
            ..Default::default()
        };
        assert_eq!(input.validate().unwrap_err(), ValidationError::Groups(1));
    }

    #[test]
    fn test_rejects_baseline_out_of_range() {
        for baseline_rate_pct in [0.0, 100.0, -5.0] {
            let input = SampleSizeInput {
                baseline_rate_pct,
                ..Default::default()
            };
            assert!(input.validate().is_err());
        }
    }

    #[test]
    fn test_rejects_zero_mde() {
        let input = SampleSizeInput {
            mde_pct: 0.0,
            ..Default::default()
        };
        assert_eq!(input.validate().unwrap_err(), ValidationError::ZeroMde);
    }

    #[test]
    fn test_rejects_variant_rate_out_of_range() {
        let input = SampleSizeInput {
            baseline_rate_pct: 10.0,
            mde_pct: 95.0,
            ..Default::default()
        };
        assert_eq!(
            input.validate().unwrap_err(),
            ValidationError::VariantRate(105.0)
        );

        let input = SampleSizeInput {
            baseline_rate_pct: 10.0,
            mde_pct: -10.0,
            ..Default::default()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_accepts_negative_mde() {
        let input = SampleSizeInput {
            mde_pct: -2.0,
            ..Default::default()
        };
        assert!(input.validate().is_ok());
    }
}
