use super::types::RiskCategory;

const SUBSTANTIAL_CONTRIBUTION: f64 = 20_000.0;
const SOLID_CONTRIBUTION: f64 = 10_000.0;

fn base_insights(category: RiskCategory) -> [&'static str; 3] {
    match category {
        RiskCategory::Aggressive => [
            "Your portfolio is optimized for maximum growth potential over the long term",
            "Consider dollar-cost averaging to reduce timing risk",
            "Review and rebalance quarterly to maintain target allocation",
        ],
        RiskCategory::Moderate => [
            "Your balanced approach provides steady growth with manageable risk",
            "Consider increasing equity allocation if market conditions are favorable",
            "Rebalance semi-annually to maintain optimal risk-return profile",
        ],
        RiskCategory::Conservative => [
            "Your conservative approach prioritizes capital preservation",
            "Consider inflation-protected securities for long-term purchasing power",
            "Review allocation annually and adjust based on changing needs",
        ],
    }
}

fn contribution_insight(monthly_contribution: f64) -> Option<&'static str> {
    if monthly_contribution >= SUBSTANTIAL_CONTRIBUTION {
        Some("Your substantial monthly investment allows for excellent diversification")
    } else if monthly_contribution >= SOLID_CONTRIBUTION {
        Some("Your monthly investment provides good foundation for wealth building")
    } else {
        None
    }
}

pub fn insights(category: RiskCategory, monthly_contribution: f64) -> Vec<&'static str> {
    let mut out = base_insights(category).to_vec();
    out.extend(contribution_insight(monthly_contribution));
    out
}
