//! Report rendering for the abplan CLI.

use clap::ValueEnum;
use serde::Serialize;

use abplan_lib::{Alternative, Correction, GroupDurationEstimate, SampleSizeInput, SampleSizeResult};

/// Output format for the planning report.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Text,
    Json,
}

/// Duration portion of the report, present when `--daily-users` was given.
#[derive(Serialize)]
pub(crate) struct DurationSection {
    daily_users: f64,
    eligible_rate: f64,
    #[serde(flatten)]
    estimate: GroupDurationEstimate,
}

impl DurationSection {
    pub(crate) const fn new(
        daily_users: f64,
        eligible_rate: f64,
        estimate: GroupDurationEstimate,
    ) -> Self {
        Self {
            daily_users,
            eligible_rate,
            estimate,
        }
    }
}

/// Full planning report: echoed parameters, sample sizes, optional duration.
#[derive(Serialize)]
pub(crate) struct Report {
    alternative: Alternative,
    confidence_level: f64,
    power: f64,
    groups: u32,
    correction: Correction,
    sample_size: SampleSizeResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<DurationSection>,
}

impl Report {
    pub(crate) const fn new(
        input: &SampleSizeInput,
        sample_size: SampleSizeResult,
        duration: Option<DurationSection>,
    ) -> Self {
        Self {
            alternative: input.alternative,
            confidence_level: input.confidence_level,
            power: input.power,
            groups: input.groups,
            correction: input.correction,
            sample_size,
            duration,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = &self.sample_size;
        writeln!(f, "Binary A/B(/n) Sample Size")?;
        writeln!(f, "Alternative hypothesis: {}", self.alternative)?;
        writeln!(
            f,
            "Confidence level (1-alpha): {:.2}%",
            self.confidence_level * 100.0
        )?;
        writeln!(f, "Power (1-beta): {:.2}%", self.power * 100.0)?;
        writeln!(f, "Groups: {}", self.groups)?;
        writeln!(f, "Multiple testing correction: {}", self.correction)?;
        writeln!(f, "Raw alpha: {:.4}", s.alpha)?;
        writeln!(f, "Adjusted alpha: {:.4}", s.adjusted_alpha)?;
        writeln!(f, "Comparisons: {}", s.comparisons)?;
        writeln!(
            f,
            "Allocation (control:treatment): {:.2}%:{:.2}%",
            s.control_allocation * 100.0,
            s.treatment_allocation * 100.0
        )?;
        writeln!(f, "Baseline rate: {:.2}%", s.baseline_rate * 100.0)?;
        writeln!(f, "MDE: {:.2}%", s.mde * 100.0)?;
        writeln!(f, "Implied treatment rate: {:.2}%", s.variant_rate * 100.0)?;
        writeln!(f)?;
        writeln!(f, "Required control sample size: {}", s.control_sample_size)?;
        writeln!(
            f,
            "Required sample size per treatment group: {}",
            s.treatment_sample_size
        )?;
        writeln!(
            f,
            "Total per control-vs-treatment comparison: {}",
            s.per_comparison_total
        )?;
        writeln!(
            f,
            "Overall total sample size across all groups: {}",
            s.overall_total
        )?;

        if let Some(duration) = &self.duration {
            writeln!(f)?;
            writeln!(f, "Duration Estimate")?;
            writeln!(f, "Daily users: {:.2}", duration.daily_users)?;
            writeln!(f, "Eligible rate: {:.2}%", duration.eligible_rate * 100.0)?;
            writeln!(
                f,
                "Expected daily eligible users: {:.2}",
                duration.estimate.expected_daily_eligible_users
            )?;
            writeln!(
                f,
                "Estimated duration: {} day(s)",
                duration.estimate.days_required
            )?;
            writeln!(
                f,
                "Bottleneck group: {} ({} days)",
                duration.estimate.bottleneck_group, duration.estimate.days_required
            )?;
        }

        Ok(())
    }
}
