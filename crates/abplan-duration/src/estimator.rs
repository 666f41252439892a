//! Duration estimation logic.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use abplan_types::{Result, ValidationError};

/// Duration estimate for a single total required sample size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationEstimate {
    /// Total users required across all groups.
    pub total_sample_size: u64,
    /// Daily users remaining after the eligibility rate is applied.
    pub expected_daily_eligible_users: f64,
    /// Days required to collect the total sample size.
    pub days_required: u64,
}

/// Duration estimate when sample sizes and traffic splits are group-specific.
///
/// The experiment cannot conclude before its slowest group reaches its
/// target size, so `days_required` is the maximum over `days_per_group`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupDurationEstimate {
    /// Daily users remaining after the eligibility rate is applied.
    pub expected_daily_eligible_users: f64,
    /// Days required per group, in the input's group order.
    pub days_per_group: IndexMap<String, u64>,
    /// The group requiring the most days. Ties go to the group seen first.
    pub bottleneck_group: String,
    /// Days required for the whole experiment.
    pub days_required: u64,
}

/// Validates traffic inputs and returns the effective daily experiment traffic.
fn daily_eligible(daily_users: f64, eligible_rate: f64) -> Result<f64> {
    if daily_users <= 0.0 {
        return Err(ValidationError::DailyUsers(daily_users));
    }
    if eligible_rate <= 0.0 || eligible_rate > 1.0 {
        return Err(ValidationError::EligibleRate(eligible_rate));
    }
    Ok(daily_users * eligible_rate)
}

/// Days needed to collect `sample_size` users at `daily` users per day.
fn days_to_collect(sample_size: u64, daily: f64) -> u64 {
    (sample_size as f64 / daily).ceil() as u64
}

/// Estimates days required to collect a total experiment sample size.
///
/// # Errors
///
/// Returns a [`ValidationError`] if `total_sample_size` is zero,
/// `daily_users` is not positive, or `eligible_rate` is outside `(0, 1]`.
pub fn estimate_duration(
    total_sample_size: u64,
    daily_users: f64,
    eligible_rate: f64,
) -> Result<DurationEstimate> {
    if total_sample_size == 0 {
        return Err(ValidationError::TotalSampleSize);
    }

    let expected_daily_eligible_users = daily_eligible(daily_users, eligible_rate)?;
    Ok(DurationEstimate {
        total_sample_size,
        expected_daily_eligible_users,
        days_required: days_to_collect(total_sample_size, expected_daily_eligible_users),
    })
}

/// Estimates duration when all groups have equal required sample sizes.
///
/// # Errors
///
/// Returns a [`ValidationError`] if `per_group_sample_size` is zero,
/// `groups` is less than 2, or the traffic inputs are invalid.
pub fn estimate_duration_equal_groups(
    per_group_sample_size: u64,
    groups: u32,
    daily_users: f64,
    eligible_rate: f64,
) -> Result<DurationEstimate> {
    if per_group_sample_size == 0 {
        return Err(ValidationError::PerGroupSampleSize);
    }
    if groups < 2 {
        return Err(ValidationError::Groups(groups));
    }
    estimate_duration(
        per_group_sample_size * u64::from(groups),
        daily_users,
        eligible_rate,
    )
}

/// Estimates duration for group-specific sample sizes and traffic splits.
///
/// Every group in `group_sample_sizes` must have a positive share in
/// `traffic_shares`. Shares are used as given: no renormalization is
/// performed and they are not required to sum to 1, so a group receiving
/// half the eligible traffic has a share of `0.5` regardless of the others.
///
/// # Errors
///
/// Returns a [`ValidationError`] if `group_sample_sizes` is empty, any group
/// size is zero, any group lacks a positive traffic share, or the traffic
/// inputs are invalid.
pub fn estimate_duration_by_group(
    group_sample_sizes: &IndexMap<String, u64>,
    daily_users: f64,
    traffic_shares: &IndexMap<String, f64>,
    eligible_rate: f64,
) -> Result<GroupDurationEstimate> {
    if group_sample_sizes.is_empty() {
        return Err(ValidationError::NoGroups);
    }

    // All constraints are checked before any day counts are produced.
    for (group, &sample_size) in group_sample_sizes {
        if sample_size == 0 {
            return Err(ValidationError::GroupSampleSize(group.clone()));
        }
        let share = traffic_shares
            .get(group)
            .ok_or_else(|| ValidationError::MissingTrafficShare(group.clone()))?;
        if *share <= 0.0 {
            return Err(ValidationError::TrafficShare(group.clone()));
        }
    }

    let expected_daily_eligible_users = daily_eligible(daily_users, eligible_rate)?;

    let mut days_per_group = IndexMap::with_capacity(group_sample_sizes.len());
    let mut bottleneck: Option<(String, u64)> = None;
    for (group, &sample_size) in group_sample_sizes {
        let allocated_daily = expected_daily_eligible_users * traffic_shares[group];
        let days = days_to_collect(sample_size, allocated_daily);

        // Strictly-greater keeps the first-seen group on ties.
        if bottleneck.as_ref().is_none_or(|(_, worst)| days > *worst) {
            bottleneck = Some((group.clone(), days));
        }
        days_per_group.insert(group.clone(), days);
    }

    // Non-empty map, so a bottleneck always exists.
    let (bottleneck_group, days_required) = bottleneck.unwrap();
    Ok(GroupDurationEstimate {
        expected_daily_eligible_users,
        days_per_group,
        bottleneck_group,
        days_required,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sizes(entries: &[(&str, u64)]) -> IndexMap<String, u64> {
        entries
            .iter()
            .map(|(name, size)| (name.to_string(), *size))
            .collect()
    }

    fn shares(entries: &[(&str, f64)]) -> IndexMap<String, f64> {
        entries
            .iter()
            .map(|(name, share)| (name.to_string(), *share))
            .collect()
    }

    #[test]
    fn test_estimate_duration() {
        let estimate = estimate_duration(1000, 100.0, 1.0).unwrap();
        assert_eq!(estimate.total_sample_size, 1000);
        assert_relative_eq!(estimate.expected_daily_eligible_users, 100.0);
        assert_eq!(estimate.days_required, 10);
    }

    #[test]
    fn test_estimate_duration_rounds_up() {
        assert_eq!(estimate_duration(1000, 300.0, 1.0).unwrap().days_required, 4);
        assert_eq!(estimate_duration(1, 1000.0, 1.0).unwrap().days_required, 1);
    }

    #[test]
    fn test_full_eligibility_is_plain_ceiling() {
        // With eligible_rate 1.0 this is exactly ceil(total / daily).
        for (total, daily) in [(7682u64, 1200.0), (100, 7.0), (5, 5.0)] {
            let estimate = estimate_duration(total, daily, 1.0).unwrap();
            assert_eq!(estimate.days_required, (total as f64 / daily).ceil() as u64);
        }
    }

    #[test]
    fn test_eligibility_scales_duration() {
        let full = estimate_duration(1000, 100.0, 1.0).unwrap();
        let half = estimate_duration(1000, 100.0, 0.5).unwrap();
        assert_relative_eq!(half.expected_daily_eligible_users, 50.0);
        assert_eq!(half.days_required, 2 * full.days_required);
    }

    #[test]
    fn test_estimate_duration_rejects_invalid_inputs() {
        assert_eq!(
            estimate_duration(0, 100.0, 1.0).unwrap_err(),
            ValidationError::TotalSampleSize
        );
        assert_eq!(
            estimate_duration(1000, 0.0, 1.0).unwrap_err(),
            ValidationError::DailyUsers(0.0)
        );
        assert_eq!(
            estimate_duration(1000, 100.0, 0.0).unwrap_err(),
            ValidationError::EligibleRate(0.0)
        );
        assert_eq!(
            estimate_duration(1000, 100.0, 1.1).unwrap_err(),
            ValidationError::EligibleRate(1.1)
        );
    }

    #[test]
    fn test_equal_groups() {
        let estimate = estimate_duration_equal_groups(500, 2, 100.0, 1.0).unwrap();
        assert_eq!(estimate.total_sample_size, 1000);
        assert_eq!(estimate.days_required, 10);
    }

    #[test]
    fn test_equal_groups_rejects_invalid_inputs() {
        assert_eq!(
            estimate_duration_equal_groups(0, 2, 100.0, 1.0).unwrap_err(),
            ValidationError::PerGroupSampleSize
        );
        assert_eq!(
            estimate_duration_equal_groups(500, 1, 100.0, 1.0).unwrap_err(),
            ValidationError::Groups(1)
        );
    }

    #[test]
    fn test_by_group_bottleneck() {
        // The treatment groups get less traffic than the control but need
        // more users each, so one of them sets the duration.
        let estimate = estimate_duration_by_group(
            &sizes(&[("control", 3186), ("treatment_1", 4779), ("treatment_2", 4779)]),
            12000.0,
            &shares(&[("control", 0.4), ("treatment_1", 0.3), ("treatment_2", 0.3)]),
            0.8,
        )
        .unwrap();

        assert_relative_eq!(estimate.expected_daily_eligible_users, 9600.0);
        assert_eq!(estimate.days_per_group["control"], 1);
        assert_eq!(estimate.days_per_group["treatment_1"], 2);
        assert_eq!(estimate.days_per_group["treatment_2"], 2);
        assert_eq!(estimate.bottleneck_group, "treatment_1");
        assert_eq!(
            estimate.days_required,
            *estimate.days_per_group.values().max().unwrap()
        );
    }

    #[test]
    fn test_by_group_tie_goes_to_first_seen() {
        let estimate = estimate_duration_by_group(
            &sizes(&[("b", 100), ("a", 100)]),
            100.0,
            &shares(&[("a", 0.5), ("b", 0.5)]),
            1.0,
        )
        .unwrap();

        assert_eq!(estimate.bottleneck_group, "b");
        assert_eq!(estimate.days_required, 2);
    }

    #[test]
    fn test_by_group_shares_used_as_given() {
        // Shares that do not sum to 1 are accepted and not renormalized.
        let estimate = estimate_duration_by_group(
            &sizes(&[("control", 100), ("treatment_1", 100)]),
            1000.0,
            &shares(&[("control", 0.5), ("treatment_1", 0.2)]),
            1.0,
        )
        .unwrap();

        assert_eq!(estimate.days_per_group["control"], 1);
        assert_eq!(estimate.days_per_group["treatment_1"], 1);
    }

    #[test]
    fn test_by_group_preserves_group_order() {
        let estimate = estimate_duration_by_group(
            &sizes(&[("z", 10), ("a", 10), ("m", 10)]),
            100.0,
            &shares(&[("a", 0.3), ("m", 0.3), ("z", 0.3)]),
            1.0,
        )
        .unwrap();

        let order: Vec<&str> = estimate.days_per_group.keys().map(String::as_str).collect();
        assert_eq!(order, ["z", "a", "m"]);
    }

    #[test]
    fn test_by_group_rejects_invalid_inputs() {
        assert_eq!(
            estimate_duration_by_group(&IndexMap::new(), 100.0, &IndexMap::new(), 1.0)
                .unwrap_err(),
            ValidationError::NoGroups
        );
        assert_eq!(
            estimate_duration_by_group(
                &sizes(&[("control", 100)]),
                100.0,
                &IndexMap::new(),
                1.0
            )
            .unwrap_err(),
            ValidationError::MissingTrafficShare("control".to_string())
        );
        assert_eq!(
            estimate_duration_by_group(
                &sizes(&[("control", 100)]),
                100.0,
                &shares(&[("control", 0.0)]),
                1.0
            )
            .unwrap_err(),
            ValidationError::TrafficShare("control".to_string())
        );
        assert_eq!(
            estimate_duration_by_group(
                &sizes(&[("control", 0)]),
                100.0,
                &shares(&[("control", 0.5)]),
                1.0
            )
            .unwrap_err(),
            ValidationError::GroupSampleSize("control".to_string())
        );
    }
}
