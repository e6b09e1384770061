//! Investor portfolio overview.
use crate::numbers::{percent, round_1dp};
use serde::{Deserialize, Serialize};

/// Tonnes of CO₂ represented by one carbon credit on the dashboard.
pub const CO2_TONNES_PER_CREDIT: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentStatus {
    Active,
    Pending,
    Completed,
}

impl InvestmentStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: String,
    pub project_name: String,
    pub amount: f64,
    pub roi: f64,
    pub carbon_credits: f64,
    pub status: InvestmentStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvestmentSeed {
    pub investments: Vec<Investment>,
}

/// Portfolio figures derived from the investment list.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PortfolioTotals {
    pub invested: f64,
    pub roi: f64,
    pub carbon_credits: f64,
    /// Percent, one decimal
    pub average_return: f64,
    pub co2_tonnes: f64,
}

impl PortfolioTotals {
    #[must_use]
    pub fn of(investments: &[Investment]) -> Self {
        let invested: f64 = investments.iter().map(|i| i.amount).sum();
        let roi: f64 = investments.iter().map(|i| i.roi).sum();
        let carbon_credits: f64 = investments.iter().map(|i| i.carbon_credits).sum();
        Self {
            invested,
            roi,
            carbon_credits,
            average_return: round_1dp(percent(roi, invested)),
            co2_tonnes: carbon_credits * CO2_TONNES_PER_CREDIT,
        }
    }
}
