mod allocation;
mod engine;
mod error;
mod insights;
mod projection;
mod scorer;
mod types;

pub use allocation::allocation_for;
pub use engine::{evaluate_risk_profile, validate_profile};
pub use error::{EngineError, Result};
pub use insights::insights;
pub use projection::{
    MAX_TRACE_YEARS, expected_return_percent, future_value_of_annuity, project,
    project_with_return,
};
pub use scorer::{MAX_RISK_SCORE, category_for_score, score};
pub use types::{
    AllocationModel, AssetBucket, Experience, InvestmentGoal, ProjectionResult, ProjectionYear,
    Recommendation, RiskCategory, RiskProfile, RiskTier, ScoreBreakdown, UserProfile,
};
