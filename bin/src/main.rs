//! abplan CLI - sample size and duration planning for A/B(/n) experiments.

use anyhow::{Result, bail};
use clap::Parser;
use indexmap::IndexMap;

use abplan_lib::{
    GroupDurationEstimate, SampleSizeInput, SampleSizeResult, calculate_sample_size,
    estimate_duration_by_group,
};

mod display;

use display::{DurationSection, Format, Report};

#[derive(Parser)]
#[command(name = "abplan")]
#[command(about = "Binary metric sample size calculator for A/B(/n) tests", long_about = None)]
#[command(version)]
struct Cli {
    /// Alternative hypothesis type (one-sided, two-sided)
    #[arg(long, default_value = "two-sided")]
    alternative: String,

    /// Confidence level (1-alpha). Accepts 95 or 0.95
    #[arg(long, default_value_t = 95.0)]
    confidence: f64,

    /// Statistical power (1-beta). Accepts 80 or 0.8
    #[arg(long, default_value_t = 80.0)]
    power: f64,

    /// Total number of groups, including control
    #[arg(long, default_value_t = 2)]
    groups: u32,

    /// Multiple testing correction for multi-group tests (none, bonferroni, sidak)
    #[arg(long, default_value = "none")]
    correction: String,

    /// Baseline binary metric rate in percent (e.g. 10 for 10%)
    #[arg(long)]
    baseline_rate: f64,

    /// Minimum detectable effect in percentage points (treatment - control)
    #[arg(long, allow_hyphen_values = true)]
    mde: f64,

    /// Control:treatment allocation ratio
    #[arg(long, default_value = "50:50")]
    allocation: String,

    /// Average daily users available for the experiment
    #[arg(long)]
    daily_users: Option<f64>,

    /// Share of daily users eligible for the test. Accepts 100 or 1.0
    #[arg(long, default_value_t = 100.0)]
    eligible_rate: f64,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: Format,
}

/// Normalizes probability-like CLI input from either 0-1 or 0-100 scale.
fn to_probability(value: f64, flag: &str, allow_one: bool) -> Result<f64> {
    let value = if value > 1.0 { value / 100.0 } else { value };
    if allow_one {
        if value <= 0.0 || value > 1.0 {
            bail!("{flag} must be > 0 and <= 1 (or up to 100 as a percentage)");
        }
    } else if value <= 0.0 || value >= 1.0 {
        bail!("{flag} must be between 0 and 1 (or 0 and 100 as a percentage)");
    }
    Ok(value)
}

/// Splits the calculator result into per-group sizes and traffic shares and
/// runs the by-group duration estimate.
fn duration_for_result(
    result: &SampleSizeResult,
    groups: u32,
    daily_users: f64,
    eligible_rate: f64,
) -> Result<GroupDurationEstimate> {
    let mut group_sample_sizes = IndexMap::new();
    group_sample_sizes.insert("control".to_string(), result.control_sample_size);
    for idx in 1..groups {
        group_sample_sizes.insert(format!("treatment_{idx}"), result.treatment_sample_size);
    }

    let total_weight =
        result.control_allocation + f64::from(groups - 1) * result.treatment_allocation;
    let mut traffic_shares = IndexMap::new();
    traffic_shares.insert(
        "control".to_string(),
        result.control_allocation / total_weight,
    );
    for idx in 1..groups {
        traffic_shares.insert(
            format!("treatment_{idx}"),
            result.treatment_allocation / total_weight,
        );
    }

    Ok(estimate_duration_by_group(
        &group_sample_sizes,
        daily_users,
        &traffic_shares,
        eligible_rate,
    )?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let confidence_level = to_probability(cli.confidence, "--confidence", false)?;
    let power = to_probability(cli.power, "--power", false)?;

    let input = SampleSizeInput {
        alternative: cli.alternative.parse()?,
        confidence_level,
        power,
        groups: cli.groups,
        correction: cli.correction.parse()?,
        baseline_rate_pct: cli.baseline_rate,
        mde_pct: cli.mde,
        allocation: cli.allocation.parse()?,
    };
    let result = calculate_sample_size(&input)?;

    let duration = match cli.daily_users {
        Some(daily_users) => {
            if daily_users <= 0.0 {
                bail!("--daily-users must be positive");
            }
            let eligible_rate = to_probability(cli.eligible_rate, "--eligible-rate", true)?;
            let estimate = duration_for_result(&result, cli.groups, daily_users, eligible_rate)?;
            Some(DurationSection::new(daily_users, eligible_rate, estimate))
        }
        None => {
            if cli.eligible_rate != 100.0 {
                bail!("--eligible-rate requires --daily-users");
            }
            None
        }
    };

    let report = Report::new(&input, result, duration);
    match cli.format {
        Format::Text => print!("{report}"),
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
