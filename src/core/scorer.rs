use super::types::{
    Experience, InvestmentGoal, RiskCategory, RiskProfile, ScoreBreakdown, UserProfile,
};

/// Highest score any profile can reach: 3 + 3 + 3 + 3 + 5 + 3.
pub const MAX_RISK_SCORE: u32 = 20;

const AGGRESSIVE_MIN_SCORE: u32 = 15;
const MODERATE_MIN_SCORE: u32 = 10;

/// Scores a profile that has already passed validation.
pub fn score(profile: &UserProfile) -> RiskProfile {
    let breakdown = ScoreBreakdown {
        age: age_points(profile.age),
        experience: experience_points(profile.experience),
        horizon: horizon_points(profile.years_to_horizon),
        income_need: income_need_points(profile.income_need_percent),
        risk_tolerance: risk_tolerance_points(profile.risk_tolerance),
        goal: goal_points(profile.goal),
    };
    let score = breakdown.total();
    let category = category_for_score(score);

    RiskProfile {
        score,
        max_score: MAX_RISK_SCORE,
        category,
        description: category.description(),
        breakdown,
    }
}

pub fn category_for_score(score: u32) -> RiskCategory {
    if score >= AGGRESSIVE_MIN_SCORE {
        RiskCategory::Aggressive
    } else if score >= MODERATE_MIN_SCORE {
        RiskCategory::Moderate
    } else {
        RiskCategory::Conservative
    }
}

fn age_points(age: u32) -> u32 {
    match age {
        0..30 => 3,
        30..40 => 2,
        40..50 => 1,
        _ => 0,
    }
}

fn experience_points(experience: Experience) -> u32 {
    match experience {
        Experience::High => 3,
        Experience::Medium => 2,
        Experience::Low => 1,
    }
}

fn horizon_points(years: u32) -> u32 {
    if years > 20 {
        3
    } else if years > 10 {
        2
    } else {
        1
    }
}

fn income_need_points(percent: f64) -> u32 {
    if percent < 30.0 {
        3
    } else if percent < 60.0 {
        2
    } else {
        1
    }
}

fn risk_tolerance_points(tolerance: u32) -> u32 {
    tolerance / 2
}

fn goal_points(goal: InvestmentGoal) -> u32 {
    match goal {
        InvestmentGoal::AggressiveGrowth => 3,
        InvestmentGoal::Growth => 2,
        InvestmentGoal::Balanced => 1,
        InvestmentGoal::CapitalPreservation => 0,
    }
}
