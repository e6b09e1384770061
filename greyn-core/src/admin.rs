//! Platform administration panels.
use crate::numbers::{money_millions, money_thousands, progress_pct, rounded_pct};
use serde::{Deserialize, Serialize};

/// Platform-wide counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSnapshot {
    pub total_users: u64,
    pub total_projects: u64,
    pub total_investments: f64,
    pub active_projects: u64,
    pub pending_projects: u64,
    pub completed_projects: u64,
    pub total_carbon_credits: f64,
    pub new_users_this_month: u64,
    pub investment_growth: String,
    pub platform_revenue: f64,
}

impl PlatformSnapshot {
    #[must_use]
    pub fn investments_label(&self) -> String {
        money_millions(self.total_investments)
    }

    #[must_use]
    pub fn revenue_label(&self) -> String {
        money_thousands(self.platform_revenue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    User,
    Investment,
    Project,
    Verification,
    LargeInvestment,
}

impl EventKind {
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::User => "👤",
            Self::Investment => "💰",
            Self::Project => "✅",
            Self::Verification => "✓",
            Self::LargeInvestment => "🎯",
        }
    }
}

/// Entry of the recent activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformEvent {
    pub kind: EventKind,
    pub action: String,
    pub subject: String,
    #[serde(default)]
    pub amount: Option<String>,
    pub time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FundingStatus {
    Active,
    Pending,
    Completed,
}

impl FundingStatus {
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
pub struct FundingProject {
    pub name: String,
    pub status: FundingStatus,
    pub funded: f64,
    pub goal: f64,
}

impl FundingProject {
    #[must_use]
    pub fn progress_label(&self) -> u32 {
        rounded_pct(self.funded, self.goal)
    }

    #[must_use]
    pub fn bar_width(&self) -> f64 {
        progress_pct(self.funded, self.goal)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHealth {
    pub service: String,
    pub operational: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformMetric {
    pub label: String,
    pub pct: u8,
}

/// Everything the admin page renders besides the review queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminSeed {
    pub stats: PlatformSnapshot,
    #[serde(default)]
    pub events: Vec<PlatformEvent>,
    #[serde(default)]
    pub funding: Vec<FundingProject>,
    #[serde(default)]
    pub health: Vec<ServiceHealth>,
    #[serde(default)]
    pub metrics: Vec<PlatformMetric>,
}

impl AdminSeed {
    #[must_use]
    pub fn all_operational(&self) -> bool {
        self.health.iter().all(|row| row.operational)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn funding_progress_rounds() {
        let project = FundingProject {
            name: "Ocean Cleanup".into(),
            status: FundingStatus::Pending,
            funded: 95_000.0,
            goal: 150_000.0,
        };
        assert_eq!(project.progress_label(), 63);
        assert!((project.bar_width() - 63.333_333).abs() < 1e-3);
    }

    #[test]
    fn event_kinds_have_icons() {
        let kind: EventKind = serde_json::from_str("\"large-investment\"").unwrap();
        assert_eq!(kind.icon(), "🎯");
    }
}
