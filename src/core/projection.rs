use super::error::{EngineError, Result};
use super::types::{AllocationModel, ProjectionResult, ProjectionYear, UserProfile};

const MONTHS_PER_YEAR: u64 = 12;

/// Number of leading years reported in `ProjectionResult::years`.
pub const MAX_TRACE_YEARS: u32 = 100;

/// Weighted average of bucket returns, in percent per year.
pub fn expected_return_percent(allocation: &AllocationModel) -> f64 {
    allocation.buckets.iter().fold(0.0, |acc, bucket| {
        acc + f64::from(bucket.weight_percent) * bucket.expected_return_percent / 100.0
    })
}

/// Future value of `months` end-of-month contributions compounding monthly at
/// `annual_return_percent / 12`.
pub fn future_value_of_annuity(
    monthly_contribution: f64,
    annual_return_percent: f64,
    months: u64,
) -> f64 {
    if months == 0 {
        return 0.0;
    }

    let n = months as f64;
    let r = annual_return_percent / 100.0 / MONTHS_PER_YEAR as f64;
    if r.abs() < 1e-12 {
        return monthly_contribution * n;
    }

    monthly_contribution * (((1.0 + r).powf(n) - 1.0) / r)
}

pub fn project(allocation: &AllocationModel, profile: &UserProfile) -> Result<ProjectionResult> {
    project_with_return(
        expected_return_percent(allocation),
        profile.monthly_contribution,
        profile.years_to_horizon,
    )
}

pub fn project_with_return(
    expected_return_percent: f64,
    monthly_contribution: f64,
    years_to_horizon: u32,
) -> Result<ProjectionResult> {
    if !expected_return_percent.is_finite() {
        return Err(EngineError::invalid(
            "expectedReturnPercent",
            "must be a finite number",
        ));
    }
    // At -1200% the monthly growth factor reaches zero.
    if expected_return_percent <= -100.0 * MONTHS_PER_YEAR as f64 {
        return Err(EngineError::invalid(
            "expectedReturnPercent",
            "must be greater than -1200",
        ));
    }
    if !monthly_contribution.is_finite() || monthly_contribution < 0.0 {
        return Err(EngineError::invalid(
            "monthlyContribution",
            "must be a finite number >= 0",
        ));
    }

    let headline = year_point(expected_return_percent, monthly_contribution, years_to_horizon);
    if !headline.projected_value.is_finite() {
        return Err(EngineError::invalid(
            "yearsToHorizon",
            format!("projection overflows over {years_to_horizon} years"),
        ));
    }

    // The value is monotone in the horizon, so every earlier year is finite too.
    let years = (1..=years_to_horizon.min(MAX_TRACE_YEARS))
        .map(|year| year_point(expected_return_percent, monthly_contribution, year))
        .collect();

    Ok(ProjectionResult {
        expected_return_percent,
        projected_value: headline.projected_value,
        total_contributed: headline.total_contributed,
        gain: headline.gain,
        years,
    })
}

fn year_point(
    expected_return_percent: f64,
    monthly_contribution: f64,
    year: u32,
) -> ProjectionYear {
    let months = u64::from(year) * MONTHS_PER_YEAR;
    let projected_value =
        future_value_of_annuity(monthly_contribution, expected_return_percent, months);
    let total_contributed = monthly_contribution * months as f64;
    ProjectionYear {
        year,
        total_contributed,
        projected_value,
        gain: projected_value - total_contributed,
    }
}
