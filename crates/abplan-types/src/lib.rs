//! Core types for the abplan experiment planner.
//!
//! This crate provides the fundamental data structures used throughout abplan:
//!
//! - [`Alternative`] - One-sided or two-sided alternative hypothesis
//! - [`Correction`] - Multiple testing correction for multi-group tests
//! - [`Allocation`] - Control:treatment traffic allocation
//! - [`ValidationError`] - Error kind for invalid planner inputs

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/growthstats/abplan/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod allocation;
mod alternative;
mod correction;
mod error;

pub use allocation::Allocation;
pub use alternative::Alternative;
pub use correction::Correction;
pub use error::{Result, ValidationError};
