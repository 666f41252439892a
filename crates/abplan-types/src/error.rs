//! Error types for abplan.

use thiserror::Error;

/// Result type alias for abplan operations.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Errors raised when planner inputs violate a constraint.
///
/// All failures are caller input errors, surfaced before any computation
/// proceeds. There are no internal failure modes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Confidence level outside the open unit interval.
    #[error("confidence_level must be in (0, 1), got {0}")]
    ConfidenceLevel(f64),

    /// Power outside the open unit interval.
    #[error("power must be in (0, 1), got {0}")]
    Power(f64),

    /// Fewer than two experiment groups.
    #[error("groups must be at least 2, got {0}")]
    Groups(u32),

    /// Baseline rate outside (0, 100) percent.
    #[error("baseline_rate_pct must be in (0, 100), got {0}")]
    BaselineRate(f64),

    /// A zero effect requires an infinite sample size.
    #[error("mde_pct must be nonzero")]
    ZeroMde,

    /// Baseline plus MDE pushes the treatment rate out of (0, 100) percent.
    #[error("baseline_rate_pct + mde_pct must keep the treatment rate in (0, 100), got {0}")]
    VariantRate(f64),

    /// Allocation text does not parse as two numbers.
    #[error("allocation must be in 'control:treatment' format (e.g. 50:50), got '{0}'")]
    AllocationFormat(String),

    /// Allocation weights must both be strictly positive.
    #[error("allocation values must both be positive")]
    AllocationWeights,

    /// Unrecognized alternative hypothesis name.
    #[error("unknown alternative '{0}', expected 'one-sided' or 'two-sided'")]
    UnknownAlternative(String),

    /// Unrecognized correction method name.
    #[error("unknown correction '{0}', expected one of: none, bonferroni, sidak")]
    UnknownCorrection(String),

    /// Total sample size must be strictly positive.
    #[error("total_sample_size must be positive")]
    TotalSampleSize,

    /// Per-group sample size must be strictly positive.
    #[error("per_group_sample_size must be positive")]
    PerGroupSampleSize,

    /// Daily traffic must be strictly positive.
    #[error("daily_users must be positive, got {0}")]
    DailyUsers(f64),

    /// Eligibility rate outside the half-open unit interval.
    #[error("eligible_rate must be in (0, 1], got {0}")]
    EligibleRate(f64),

    /// Group map passed to the duration estimator was empty.
    #[error("group_sample_sizes must not be empty")]
    NoGroups,

    /// A group's required sample size was zero.
    #[error("sample size for group '{0}' must be positive")]
    GroupSampleSize(String),

    /// A group has no matching traffic share.
    #[error("missing traffic share for group '{0}'")]
    MissingTrafficShare(String),

    /// A group's traffic share was zero or negative.
    #[error("traffic share for group '{0}' must be positive")]
    TrafficShare(String),
}
