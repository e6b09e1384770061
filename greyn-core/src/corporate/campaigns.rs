//! NGO donation campaigns.
use super::Acknowledgement;
use crate::numbers::{progress_pct, rounded_pct};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Active,
    Completed,
    Upcoming,
}

impl CampaignStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Upcoming => "upcoming",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    pub ngo_name: String,
    pub title: String,
    pub description: String,
    pub goal: f64,
    pub raised: f64,
    pub donors: u32,
    pub status: CampaignStatus,
    pub end_date: NaiveDate,
    pub category: String,
}

impl Campaign {
    /// Funding progress label, rounded to a whole percent.
    #[must_use]
    pub fn progress_label(&self) -> u32 {
        rounded_pct(self.raised, self.goal)
    }

    /// Progress bar width, never past 100.
    #[must_use]
    pub fn bar_width(&self) -> f64 {
        progress_pct(self.raised, self.goal)
    }

    #[must_use]
    pub fn remaining(&self) -> f64 {
        (self.goal - self.raised).max(0.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignSeed {
    pub campaigns: Vec<Campaign>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CampaignTotals {
    pub raised: f64,
    pub donors: u32,
    pub active: usize,
}

impl CampaignTotals {
    #[must_use]
    pub fn of(campaigns: &[Campaign]) -> Self {
        Self {
            raised: campaigns.iter().map(|c| c.raised).sum(),
            donors: campaigns.iter().map(|c| c.donors).sum(),
            active: campaigns
                .iter()
                .filter(|c| c.status == CampaignStatus::Active)
                .count(),
        }
    }
}

/// Create-campaign form. Submitting only acknowledges locally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignDraft {
    pub ngo_name: String,
    pub title: String,
    pub goal: String,
    pub end_date: String,
    pub description: String,
}

impl CampaignDraft {
    #[must_use]
    pub fn submit(&self) -> Acknowledgement {
        log::info!("campaign draft submitted: {}", self.title);
        Acknowledgement::new("campaigns.created")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campaign(goal: f64, raised: f64) -> Campaign {
        Campaign {
            id: "1".into(),
            ngo_name: "Ocean Cleanup Initiative".into(),
            title: "Plastic Waste Removal".into(),
            description: String::new(),
            goal,
            raised,
            donors: 512,
            status: CampaignStatus::Active,
            end_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            category: "Marine Conservation".into(),
        }
    }

    #[test]
    fn progress_rounds_and_caps() {
        let c = campaign(75_000.0, 68_000.0);
        assert_eq!(c.progress_label(), 91);
        assert!((c.remaining() - 7_000.0).abs() < f64::EPSILON);
        let over = campaign(100.0, 150.0);
        assert!((over.bar_width() - 100.0).abs() < f64::EPSILON);
        assert_eq!(over.progress_label(), 150);
        assert_eq!(campaign(0.0, 0.0).progress_label(), 0);
    }

    #[test]
    fn totals_sum_every_campaign() {
        let mut done = campaign(100.0, 100.0);
        done.status = CampaignStatus::Completed;
        let totals = CampaignTotals::of(&[campaign(75_000.0, 68_000.0), done]);
        assert!((totals.raised - 68_100.0).abs() < f64::EPSILON);
        assert_eq!(totals.donors, 1_024);
        assert_eq!(totals.active, 1);
    }

    #[test]
    fn draft_submit_only_acknowledges() {
        let draft = CampaignDraft {
            title: "Mangrove Replanting".into(),
            ..CampaignDraft::default()
        };
        let receipt = draft.submit();
        assert_eq!(receipt.key, "campaigns.created");
        assert!(receipt.detail.is_none());
    }
}
