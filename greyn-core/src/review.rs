//! Review workflow for user submissions.
//!
//! Every reviewable item starts pending and may be resolved exactly once,
//! either accepted or declined. Resolved items are terminal.

use crate::error::ReviewError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of resolved items shown as recent decisions.
pub const RECENT_LIMIT: usize = 5;

/// Coarse review state shared by every reviewable record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewState {
    Pending,
    Accepted,
    Declined,
}

/// Reviewer decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    Decline,
}

/// A record that can pass through the review queue.
pub trait Reviewable {
    fn review_id(&self) -> &str;

    fn review_state(&self) -> ReviewState;

    /// Human-readable status, used in rejection messages.
    fn status_label(&self) -> &'static str;

    /// Apply a decision. Only called on pending items.
    fn apply_verdict(&mut self, verdict: Verdict, on: NaiveDate);
}

/// Ordered collection of reviewable items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewQueue<T> {
    items: Vec<T>,
}

impl<T: Reviewable> ReviewQueue<T> {
    #[must_use]
    pub const fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.review_id() == id)
    }

    pub fn pending(&self) -> impl Iterator<Item = &T> {
        self.in_state(ReviewState::Pending)
    }

    pub fn in_state(&self, state: ReviewState) -> impl Iterator<Item = &T> {
        self.items
            .iter()
            .filter(move |item| item.review_state() == state)
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending().count()
    }

    /// The first [`RECENT_LIMIT`] resolved items in seed order.
    #[must_use]
    pub fn recent_resolved(&self) -> Vec<&T> {
        self.items
            .iter()
            .filter(|item| item.review_state() != ReviewState::Pending)
            .take(RECENT_LIMIT)
            .collect()
    }

    /// Resolve a pending item.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::NotFound`] for an unknown id and
    /// [`ReviewError::AlreadyResolved`] when the item is terminal.
    pub fn decide(&mut self, id: &str, verdict: Verdict, on: NaiveDate) -> Result<&T, ReviewError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.review_id() == id)
            .ok_or_else(|| ReviewError::NotFound { id: id.to_string() })?;
        if item.review_state() != ReviewState::Pending {
            return Err(ReviewError::AlreadyResolved {
                id: id.to_string(),
                status: item.status_label().to_string(),
            });
        }
        item.apply_verdict(verdict, on);
        log::info!("review {id} resolved as {}", item.status_label());
        Ok(item)
    }
}

/// Kind of eco activity a user can submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityKind {
    PlantTree,
    Cleanup,
    Recycle,
    EnergySave,
    WaterConserve,
    Education,
}

impl ActivityKind {
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::PlantTree => "🌳",
            Self::Cleanup => "🧹",
            Self::Recycle => "♻️",
            Self::EnergySave => "⚡",
            Self::WaterConserve => "💧",
            Self::Education => "📚",
        }
    }

    /// Stable key used for the translated label.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::PlantTree => "plant-tree",
            Self::Cleanup => "cleanup",
            Self::Recycle => "recycle",
            Self::EnergySave => "energy-save",
            Self::WaterConserve => "water-conserve",
            Self::Education => "education",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    #[default]
    Pending,
    Verified,
    Unverified,
}

impl ActivityStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Unverified => "unverified",
        }
    }
}

/// A user-submitted eco activity awaiting verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    pub proof_image: String,
    pub credits: u32,
    #[serde(default)]
    pub status: ActivityStatus,
    pub submitted_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified_date: Option<NaiveDate>,
}

impl Reviewable for Activity {
    fn review_id(&self) -> &str {
        &self.id
    }

    fn review_state(&self) -> ReviewState {
        match self.status {
            ActivityStatus::Pending => ReviewState::Pending,
            ActivityStatus::Verified => ReviewState::Accepted,
            ActivityStatus::Unverified => ReviewState::Declined,
        }
    }

    fn status_label(&self) -> &'static str {
        self.status.as_str()
    }

    fn apply_verdict(&mut self, verdict: Verdict, on: NaiveDate) {
        match verdict {
            Verdict::Accept => {
                self.status = ActivityStatus::Verified;
                self.verified_date = Some(on);
            }
            Verdict::Decline => self.status = ActivityStatus::Unverified,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySeed {
    pub activities: Vec<Activity>,
}

/// Credits granted to a submitter when their activity is verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditAward {
    pub user_id: String,
    pub user_name: String,
    pub activity_id: String,
    pub credits: u32,
}

/// In-memory record of credit awards. Nothing leaves the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreditLedger {
    awards: Vec<CreditAward>,
}

impl CreditLedger {
    pub fn record(&mut self, award: CreditAward) {
        self.awards.push(award);
    }

    #[must_use]
    pub fn awards(&self) -> &[CreditAward] {
        &self.awards
    }

    #[must_use]
    pub fn total_for(&self, user_id: &str) -> u32 {
        self.awards
            .iter()
            .filter(|award| award.user_id == user_id)
            .map(|award| award.credits)
            .sum()
    }
}

impl ReviewQueue<Activity> {
    /// Verify an activity and record its credit award.
    ///
    /// # Errors
    ///
    /// Propagates [`ReviewQueue::decide`] rejections; the ledger is untouched.
    pub fn verify(
        &mut self,
        id: &str,
        on: NaiveDate,
        ledger: &mut CreditLedger,
    ) -> Result<CreditAward, ReviewError> {
        let activity = self.decide(id, Verdict::Accept, on)?;
        let award = CreditAward {
            user_id: activity.user_id.clone(),
            user_name: activity.user_name.clone(),
            activity_id: activity.id.clone(),
            credits: activity.credits,
        };
        ledger.record(award.clone());
        Ok(award)
    }

    /// Mark an activity unverified.
    ///
    /// # Errors
    ///
    /// Propagates [`ReviewQueue::decide`] rejections.
    pub fn reject(&mut self, id: &str, on: NaiveDate) -> Result<(), ReviewError> {
        self.decide(id, Verdict::Decline, on).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(id: &str, status: ActivityStatus) -> Activity {
        Activity {
            id: id.into(),
            user_id: format!("user{id}"),
            user_name: format!("User {id}"),
            kind: ActivityKind::Cleanup,
            title: "Beach Cleanup".into(),
            description: "Collected plastic".into(),
            proof_image: String::new(),
            credits: 75,
            status,
            submitted_date: NaiveDate::from_ymd_opt(2024, 1, 26).unwrap(),
            verified_date: None,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
    }

    #[test]
    fn verify_awards_credits_once() {
        let mut queue = ReviewQueue::new(vec![activity("1", ActivityStatus::Pending)]);
        let mut ledger = CreditLedger::default();
        let award = queue.verify("1", today(), &mut ledger).unwrap();
        assert_eq!(award.credits, 75);
        assert_eq!(queue.pending_count(), 0);
        assert_eq!(queue.get("1").unwrap().verified_date, Some(today()));

        let err = queue.verify("1", today(), &mut ledger).unwrap_err();
        assert_eq!(
            err,
            ReviewError::AlreadyResolved {
                id: "1".into(),
                status: "verified".into()
            }
        );
        assert_eq!(ledger.awards().len(), 1);
        assert_eq!(ledger.total_for("user1"), 75);
    }

    #[test]
    fn rejected_items_stay_rejected() {
        let mut queue = ReviewQueue::new(vec![activity("1", ActivityStatus::Pending)]);
        queue.reject("1", today()).unwrap();
        let rejected = queue.get("1").unwrap();
        assert_eq!(rejected.status, ActivityStatus::Unverified);
        assert_eq!(rejected.verified_date, None);
        let mut ledger = CreditLedger::default();
        assert!(queue.verify("1", today(), &mut ledger).is_err());
        assert!(ledger.awards().is_empty());
        assert_eq!(
            queue.reject("nope", today()),
            Err(ReviewError::NotFound { id: "nope".into() })
        );
    }

    #[test]
    fn recent_resolved_is_capped_in_seed_order() {
        let items = (1..=8)
            .map(|n| {
                let status = if n == 2 {
                    ActivityStatus::Pending
                } else {
                    ActivityStatus::Verified
                };
                activity(&n.to_string(), status)
            })
            .collect();
        let queue = ReviewQueue::new(items);
        let recent: Vec<&str> = queue
            .recent_resolved()
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(recent, vec!["1", "3", "4", "5", "6"]);
    }

    #[test]
    fn kinds_parse_from_kebab_case() {
        let kind: ActivityKind = serde_json::from_str("\"water-conserve\"").unwrap();
        assert_eq!(kind, ActivityKind::WaterConserve);
        assert_eq!(kind.icon(), "💧");
        assert_eq!(ActivityKind::EnergySave.key(), "energy-save");
    }
}
