use serde::Serialize;

use super::error::EngineError;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Experience {
    Low,
    Medium,
    High,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum InvestmentGoal {
    CapitalPreservation,
    Balanced,
    Growth,
    AggressiveGrowth,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RiskCategory {
    Conservative,
    Moderate,
    Aggressive,
}

impl RiskCategory {
    pub const ALL: [RiskCategory; 3] = [
        RiskCategory::Conservative,
        RiskCategory::Moderate,
        RiskCategory::Aggressive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RiskCategory::Conservative => "conservative",
            RiskCategory::Moderate => "moderate",
            RiskCategory::Aggressive => "aggressive",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            RiskCategory::Conservative => "Capital preservation with steady returns",
            RiskCategory::Moderate => "Balanced approach with moderate risk",
            RiskCategory::Aggressive => "High growth potential with higher volatility",
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RiskTier {
    VeryLow,
    Low,
    Medium,
    High,
}

/// Everything the engine needs to know about one investor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub age: u32,
    pub experience: Experience,
    pub years_to_horizon: u32,
    /// Share of income expected to come from the portfolio, 0..=100.
    pub income_need_percent: f64,
    /// 1..=10
    pub risk_tolerance: u32,
    pub goal: InvestmentGoal,
    pub monthly_contribution: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub age: u32,
    pub experience: u32,
    pub horizon: u32,
    pub income_need: u32,
    pub risk_tolerance: u32,
    pub goal: u32,
}

impl ScoreBreakdown {
    pub fn total(self) -> u32 {
        self.age
            + self.experience
            + self.horizon
            + self.income_need
            + self.risk_tolerance
            + self.goal
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskProfile {
    pub score: u32,
    pub max_score: u32,
    pub category: RiskCategory,
    pub description: &'static str,
    pub breakdown: ScoreBreakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetBucket {
    pub name: &'static str,
    pub weight_percent: u32,
    pub expected_return_percent: f64,
    pub risk_tier: RiskTier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationModel {
    pub category: RiskCategory,
    pub buckets: Vec<AssetBucket>,
}

impl AllocationModel {
    pub fn total_weight(&self) -> u32 {
        self.buckets.iter().map(|b| b.weight_percent).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionYear {
    pub year: u32,
    pub total_contributed: f64,
    pub projected_value: f64,
    pub gain: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub expected_return_percent: f64,
    pub projected_value: f64,
    pub total_contributed: f64,
    pub gain: f64,
    pub years: Vec<ProjectionYear>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub risk_profile: RiskProfile,
    pub allocation: AllocationModel,
    pub projection: ProjectionResult,
    pub insights: Vec<&'static str>,
}

impl std::str::FromStr for Experience {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" | "beginner" => Ok(Experience::Low),
            "medium" | "intermediate" => Ok(Experience::Medium),
            "high" | "advanced" => Ok(Experience::High),
            other => Err(EngineError::invalid(
                "experience",
                format!("unknown level '{other}'"),
            )),
        }
    }
}

impl std::str::FromStr for InvestmentGoal {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], "");
        match normalized.as_str() {
            "capitalpreservation" | "conservative" => Ok(InvestmentGoal::CapitalPreservation),
            "balanced" => Ok(InvestmentGoal::Balanced),
            "growth" => Ok(InvestmentGoal::Growth),
            "aggressivegrowth" => Ok(InvestmentGoal::AggressiveGrowth),
            _ => Err(EngineError::invalid(
                "goal",
                format!("unknown goal '{}'", s.trim()),
            )),
        }
    }
}

impl std::str::FromStr for RiskCategory {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RiskCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                EngineError::invalid("category", format!("unknown category '{}'", s.trim()))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("Moderate".parse::<RiskCategory>(), Ok(RiskCategory::Moderate));
        assert_eq!(" aggressive ".parse::<RiskCategory>(), Ok(RiskCategory::Aggressive));
    }

    #[test]
    fn unknown_category_is_invalid_input() {
        let err = "reckless".parse::<RiskCategory>().unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput { field: "category", .. }));
    }

    #[test]
    fn goal_accepts_original_form_values() {
        assert_eq!(
            "aggressive_growth".parse::<InvestmentGoal>(),
            Ok(InvestmentGoal::AggressiveGrowth)
        );
        assert_eq!(
            "conservative".parse::<InvestmentGoal>(),
            Ok(InvestmentGoal::CapitalPreservation)
        );
        assert_eq!(
            "capital-preservation".parse::<InvestmentGoal>(),
            Ok(InvestmentGoal::CapitalPreservation)
        );
        assert!("yolo".parse::<InvestmentGoal>().is_err());
    }

    #[test]
    fn experience_accepts_form_labels() {
        assert_eq!("Beginner".parse::<Experience>(), Ok(Experience::Low));
        assert_eq!("high".parse::<Experience>(), Ok(Experience::High));
        assert!("expert".parse::<Experience>().is_err());
    }

    #[test]
    fn breakdown_total_sums_every_factor() {
        let breakdown = ScoreBreakdown {
            age: 3,
            experience: 2,
            horizon: 1,
            income_need: 3,
            risk_tolerance: 5,
            goal: 0,
        };
        assert_eq!(breakdown.total(), 14);
    }

    #[test]
    fn result_types_serialize_camel_case() {
        let bucket = AssetBucket {
            name: "Money Market",
            weight_percent: 5,
            expected_return_percent: 3.0,
            risk_tier: RiskTier::VeryLow,
        };
        let json = serde_json::to_string(&bucket).expect("bucket should serialize");
        assert!(json.contains("\"weightPercent\":5"));
        assert!(json.contains("\"expectedReturnPercent\":3.0"));
        assert!(json.contains("\"riskTier\":\"veryLow\""));
    }
}
