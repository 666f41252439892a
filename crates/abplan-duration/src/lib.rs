//! Experiment duration estimation for the abplan experiment planner.
//!
//! This crate answers the question "how long will the experiment run?"
//! given required sample sizes and daily traffic assumptions:
//!
//! - [`DurationEstimate`] - Days required for a single total sample size
//! - [`GroupDurationEstimate`] - Per-group days and the bottleneck group
//! - [`estimate_duration`] - Total-form estimate
//! - [`estimate_duration_equal_groups`] - Convenience for equal group sizes
//! - [`estimate_duration_by_group`] - Group-specific sizes and traffic shares

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/growthstats/abplan/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod estimator;

pub use estimator::{
    DurationEstimate, GroupDurationEstimate, estimate_duration, estimate_duration_by_group,
    estimate_duration_equal_groups,
};
