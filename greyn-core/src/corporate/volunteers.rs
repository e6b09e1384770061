//! Volunteer events and employee sign-up requests.
use super::Acknowledgement;
use crate::numbers::progress_pct;
use crate::review::{ReviewState, Reviewable, Verdict};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Completed,
}

impl EventStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub location: String,
    pub participants: u32,
    pub max_participants: u32,
    pub status: EventStatus,
}

impl VolunteerEvent {
    #[must_use]
    pub fn fill_pct(&self) -> f64 {
        progress_pct(f64::from(self.participants), f64::from(self.max_participants))
    }

    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.participants >= self.max_participants
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerRequest {
    pub id: String,
    pub employee_name: String,
    pub event_title: String,
    pub event_date: NaiveDate,
    pub submitted_date: NaiveDate,
    #[serde(default)]
    pub status: RequestStatus,
}

impl Reviewable for VolunteerRequest {
    fn review_id(&self) -> &str {
        &self.id
    }

    fn review_state(&self) -> ReviewState {
        match self.status {
            RequestStatus::Pending => ReviewState::Pending,
            RequestStatus::Approved => ReviewState::Accepted,
            RequestStatus::Rejected => ReviewState::Declined,
        }
    }

    fn status_label(&self) -> &'static str {
        self.status.as_str()
    }

    fn apply_verdict(&mut self, verdict: Verdict, _on: NaiveDate) {
        self.status = match verdict {
            Verdict::Accept => RequestStatus::Approved,
            Verdict::Decline => RequestStatus::Rejected,
        };
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolunteerSeed {
    pub events: Vec<VolunteerEvent>,
    pub requests: Vec<VolunteerRequest>,
}

/// Create-event form. Submitting only acknowledges locally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub date: String,
    pub location: String,
    pub max_participants: String,
    pub description: String,
}

impl EventDraft {
    #[must_use]
    pub fn submit(&self) -> Acknowledgement {
        log::info!("volunteer event draft submitted: {}", self.title);
        Acknowledgement::new("volunteers.created")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::ReviewQueue;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn request(id: &str, status: RequestStatus) -> VolunteerRequest {
        VolunteerRequest {
            id: id.into(),
            employee_name: "Sarah Johnson".into(),
            event_title: "Beach Cleanup Initiative".into(),
            event_date: date(12, 20),
            submitted_date: date(12, 14),
            status,
        }
    }

    #[test]
    fn requests_resolve_once() {
        let mut queue = ReviewQueue::new(vec![
            request("1", RequestStatus::Pending),
            request("2", RequestStatus::Approved),
        ]);
        assert_eq!(queue.pending_count(), 1);
        queue.decide("1", Verdict::Decline, date(12, 15)).unwrap();
        assert_eq!(queue.get("1").unwrap().status, RequestStatus::Rejected);
        assert!(queue.decide("2", Verdict::Decline, date(12, 15)).is_err());
        assert_eq!(queue.pending_count(), 0);
    }

    #[test]
    fn fill_percentage_caps() {
        let mut event = VolunteerEvent {
            id: "1".into(),
            title: "Beach Cleanup Initiative".into(),
            description: String::new(),
            date: date(12, 20),
            location: "Santa Monica Beach, CA".into(),
            participants: 45,
            max_participants: 50,
            status: EventStatus::Upcoming,
        };
        assert!((event.fill_pct() - 90.0).abs() < f64::EPSILON);
        assert!(!event.is_full());
        event.participants = 60;
        assert!((event.fill_pct() - 100.0).abs() < f64::EPSILON);
        assert!(event.is_full());
        assert_eq!(EventDraft::default().submit().key, "volunteers.created");
    }
}
