use tracing::debug;

use super::allocation::allocation_for;
use super::error::{EngineError, Result};
use super::insights::insights;
use super::projection::project;
use super::scorer::score;
use super::types::{Recommendation, UserProfile};

/// Scores the profile, picks the model portfolio for its category, projects the
/// contribution schedule and attaches the advisory messages.
///
/// The whole profile is validated first; nothing is computed for a profile that
/// fails validation.
pub fn evaluate_risk_profile(profile: &UserProfile) -> Result<Recommendation> {
    validate_profile(profile)?;

    let risk_profile = score(profile);
    let allocation = allocation_for(risk_profile.category);
    let projection = project(&allocation, profile)?;
    let insights = insights(risk_profile.category, profile.monthly_contribution);

    debug!(
        score = risk_profile.score,
        category = %risk_profile.category,
        expected_return = projection.expected_return_percent,
        projected_value = projection.projected_value,
        "evaluated risk profile"
    );

    Ok(Recommendation {
        risk_profile,
        allocation,
        projection,
        insights,
    })
}

pub fn validate_profile(profile: &UserProfile) -> Result<()> {
    if profile.age == 0 {
        return Err(EngineError::invalid("age", "must be > 0"));
    }

    if !(0.0..=100.0).contains(&profile.income_need_percent) {
        return Err(EngineError::invalid(
            "incomeNeedPercent",
            "must be between 0 and 100",
        ));
    }

    if !(1..=10).contains(&profile.risk_tolerance) {
        return Err(EngineError::invalid(
            "riskTolerance",
            "must be between 1 and 10",
        ));
    }

    if !profile.monthly_contribution.is_finite() || profile.monthly_contribution < 0.0 {
        return Err(EngineError::invalid(
            "monthlyContribution",
            "must be a finite number >= 0",
        ));
    }

    Ok(())
}
