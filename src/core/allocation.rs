use super::types::{AllocationModel, AssetBucket, RiskCategory, RiskTier};

const fn bucket(
    name: &'static str,
    weight_percent: u32,
    expected_return_percent: f64,
    risk_tier: RiskTier,
) -> AssetBucket {
    AssetBucket {
        name,
        weight_percent,
        expected_return_percent,
        risk_tier,
    }
}

static CONSERVATIVE: [AssetBucket; 5] = [
    bucket("Government Bonds", 40, 5.0, RiskTier::Low),
    bucket("Dividend Stocks", 25, 7.0, RiskTier::Low),
    bucket("Fixed Deposits", 20, 4.0, RiskTier::VeryLow),
    bucket("Gold/Commodities", 10, 6.0, RiskTier::Medium),
    bucket("Money Market", 5, 3.0, RiskTier::VeryLow),
];

static MODERATE: [AssetBucket; 5] = [
    bucket("Blue-chip Stocks", 30, 8.0, RiskTier::Medium),
    bucket("Government Bonds", 25, 5.0, RiskTier::Low),
    bucket("Technology Stocks", 20, 12.0, RiskTier::High),
    bucket("Dividend Stocks", 15, 7.0, RiskTier::Low),
    bucket("International Funds", 10, 6.0, RiskTier::Medium),
];

static AGGRESSIVE: [AssetBucket; 5] = [
    bucket("Technology Stocks", 35, 12.0, RiskTier::High),
    bucket("Emerging Markets", 25, 10.0, RiskTier::High),
    bucket("Growth Stocks", 20, 9.0, RiskTier::Medium),
    bucket("Corporate Bonds", 15, 6.0, RiskTier::Low),
    bucket("REITs", 5, 7.0, RiskTier::Medium),
];

fn buckets_for(category: RiskCategory) -> &'static [AssetBucket] {
    match category {
        RiskCategory::Conservative => &CONSERVATIVE,
        RiskCategory::Moderate => &MODERATE,
        RiskCategory::Aggressive => &AGGRESSIVE,
    }
}

/// Model portfolio for a risk category, in display order.
pub fn allocation_for(category: RiskCategory) -> AllocationModel {
    AllocationModel {
        category,
        buckets: buckets_for(category).to_vec(),
    }
}
