//! Sample size calculation for the two-proportion z-test.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};

use abplan_types::Result;

use crate::input::SampleSizeInput;

/// Static standard normal distribution instance.
static STANDARD_NORMAL: OnceLock<Normal> = OnceLock::new();

fn standard_normal() -> &'static Normal {
    STANDARD_NORMAL.get_or_init(|| Normal::new(0.0, 1.0).unwrap())
}

/// Upper-tail z-quantile: the value exceeded with probability `tail`.
fn z_upper(tail: f64) -> f64 {
    standard_normal().inverse_cdf(1.0 - tail)
}

/// Output of a binary-metric sample size calculation.
///
/// Rates (`baseline_rate`, `variant_rate`, `mde`) and allocation shares are
/// fractions in `[0, 1]`, regardless of the percent-scaled input fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSizeResult {
    /// Raw significance level `1 - confidence_level`.
    pub alpha: f64,
    /// Per-comparison significance level after the multiple testing
    /// correction. Equals `alpha` for two-group tests.
    pub adjusted_alpha: f64,
    /// Number of pairwise treatment-vs-control comparisons (`groups - 1`).
    pub comparisons: u32,
    /// Normalized control traffic share within a comparison pair.
    pub control_allocation: f64,
    /// Normalized treatment traffic share within a comparison pair.
    pub treatment_allocation: f64,
    /// Baseline conversion rate.
    pub baseline_rate: f64,
    /// Implied treatment conversion rate (`baseline_rate + mde`).
    pub variant_rate: f64,
    /// Minimum detectable effect as a signed fraction.
    pub mde: f64,
    /// Required control group sample size.
    pub control_sample_size: u64,
    /// Required sample size for each non-control group.
    pub treatment_sample_size: u64,
    /// Control plus one treatment group.
    pub per_comparison_total: u64,
    /// Control plus all treatment groups.
    pub overall_total: u64,
}

/// Calculates minimum sample sizes for a binary A/B(/n) test.
///
/// Uses the normal approximation for the difference in two proportions,
/// generalized for unequal control:treatment allocation. For more than two
/// groups, one control is compared pairwise against `groups - 1` treatment
/// groups, each sized identically; the significance level is first adjusted
/// by the configured correction.
///
/// Control and treatment sizes are each rounded up from the unrounded
/// requirement, so every group individually retains the requested power.
///
/// # Errors
///
/// Returns a [`ValidationError`](abplan_types::ValidationError) if any
/// input constraint is violated. No computation happens in that case.
pub fn calculate_sample_size(input: &SampleSizeInput) -> Result<SampleSizeResult> {
    input.validate()?;

    let baseline = input.baseline_rate_pct / 100.0;
    let mde = input.mde_pct / 100.0;
    let variant = baseline + mde;
    let ratio = input.allocation.ratio();

    let comparisons = input.groups - 1;
    let alpha = 1.0 - input.confidence_level;
    let adjusted_alpha = input.correction.adjusted_alpha(alpha, comparisons);

    let z_alpha = z_upper(adjusted_alpha / input.alternative.tails());
    let z_beta = z_upper(1.0 - input.power);

    // Allocation-weighted pooled rate under the null.
    let pooled = (baseline + ratio * variant) / (1.0 + ratio);
    let null_term = z_alpha * ((1.0 + 1.0 / ratio) * pooled * (1.0 - pooled)).sqrt();
    let alt_term = z_beta
        * (baseline * (1.0 - baseline) + variant * (1.0 - variant) / ratio).sqrt();

    let control_raw = (null_term + alt_term).powi(2) / (mde * mde);
    let control_sample_size = control_raw.ceil() as u64;
    let treatment_sample_size = (ratio * control_raw).ceil() as u64;

    let per_comparison_total = control_sample_size + treatment_sample_size;
    let overall_total = control_sample_size + u64::from(comparisons) * treatment_sample_size;

    Ok(SampleSizeResult {
        alpha,
        adjusted_alpha,
        comparisons,
        control_allocation: input.allocation.control_share(),
        treatment_allocation: input.allocation.treatment_share(),
        baseline_rate: baseline,
        variant_rate: variant,
        mde,
        control_sample_size,
        treatment_sample_size,
        per_comparison_total,
        overall_total,
    })
}
