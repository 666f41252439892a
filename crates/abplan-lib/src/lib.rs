//! Sample size and duration planner for A/B(/n) experiments.
//!
//! This is a facade crate that re-exports functionality from the abplan
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use abplan_lib::prelude::*;
//!
//! // Baseline 10%, MDE 2pp, two-sided, 95% confidence, 80% power, 50:50.
//! let input = SampleSizeInput::default();
//! let result = calculate_sample_size(&input)?;
//! assert_eq!(result.control_sample_size, 3841);
//!
//! // How long does that take at 1500 users/day, 80% of them eligible?
//! let duration = estimate_duration(result.overall_total, 1500.0, 0.8)?;
//! assert_eq!(duration.days_required, 7);
//! # Ok::<(), abplan_lib::ValidationError>(())
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/growthstats/abplan/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use abplan_types::*;

// Re-export sample size calculation
#[cfg(feature = "samplesize")]
pub use abplan_samplesize::{SampleSizeInput, SampleSizeResult, calculate_sample_size};

// Re-export duration estimation
#[cfg(feature = "duration")]
pub use abplan_duration::{
    DurationEstimate, GroupDurationEstimate, estimate_duration, estimate_duration_by_group,
    estimate_duration_equal_groups,
};

/// Prelude module for convenient imports.
///
/// ```
/// use abplan_lib::prelude::*;
/// ```
pub mod prelude {
    pub use abplan_types::{Allocation, Alternative, Correction, Result, ValidationError};

    #[cfg(feature = "samplesize")]
    pub use abplan_samplesize::{SampleSizeInput, SampleSizeResult, calculate_sample_size};

    #[cfg(feature = "duration")]
    pub use abplan_duration::{
        DurationEstimate, GroupDurationEstimate, estimate_duration, estimate_duration_by_group,
        estimate_duration_equal_groups,
    };
}
