//! Binary-metric sample size calculation for the abplan experiment planner.
//!
//! This crate answers the question "how many users does each group need?"
//! for A/B(/n) tests with a binary success metric:
//!
//! - [`SampleSizeInput`] - Hypothesis-test parameters for the calculation
//! - [`SampleSizeResult`] - Required per-group and overall sample sizes
//! - [`calculate_sample_size`] - The calculation itself

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/growthstats/abplan/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod calculator;
mod input;

pub use calculator::{SampleSizeResult, calculate_sample_size};
pub use input::SampleSizeInput;
