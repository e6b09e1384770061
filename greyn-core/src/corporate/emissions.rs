//! Monthly emission records and the inert entry form.
use super::Acknowledgement;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Countries offered by the entry form.
pub const FORM_COUNTRIES: [&str; 8] = [
    "United States",
    "Canada",
    "United Kingdom",
    "Germany",
    "France",
    "Australia",
    "Japan",
    "Other",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmissionStatus {
    Pending,
    Verified,
}

impl EmissionStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
        }
    }
}

/// One reporting period. `total` is the audited tCO₂e figure, not a sum of
/// the activity columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionEntry {
    pub id: String,
    pub date: NaiveDate,
    pub category: String,
    /// kWh
    pub electricity: f64,
    /// litres
    pub fuel: f64,
    /// km
    pub travel: f64,
    /// kg
    pub waste: f64,
    pub country: String,
    pub total: f64,
    pub status: EmissionStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmissionSeed {
    pub entries: Vec<EmissionEntry>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EmissionsSummary {
    /// Total of the most recent entry by date
    pub latest_total: Option<f64>,
    pub verified: usize,
    pub pending: usize,
}

impl EmissionsSummary {
    #[must_use]
    pub fn of(entries: &[EmissionEntry]) -> Self {
        let count = |status| entries.iter().filter(|e| e.status == status).count();
        Self {
            latest_total: entries.iter().max_by_key(|e| e.date).map(|e| e.total),
            verified: count(EmissionStatus::Verified),
            pending: count(EmissionStatus::Pending),
        }
    }
}

/// Record-new-emissions form. Values are kept as typed text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmissionsForm {
    pub electricity: String,
    pub fuel: String,
    pub travel: String,
    pub waste: String,
    pub country: String,
}

impl EmissionsForm {
    /// Update a field by its input name; unknown names are ignored.
    pub fn set(&mut self, field: &str, value: String) {
        match field {
            "electricity" => self.electricity = value,
            "fuel" => self.fuel = value,
            "travel" => self.travel = value,
            "waste" => self.waste = value,
            "country" => self.country = value,
            other => log::debug!("ignoring unknown emissions field {other}"),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn submit(&self) -> Acknowledgement {
        log::info!("emissions form submitted for {:?}", self.country);
        Acknowledgement::new("emissions.recorded")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, month: u32, total: f64, status: EmissionStatus) -> EmissionEntry {
        EmissionEntry {
            id: id.into(),
            date: NaiveDate::from_ymd_opt(2024, month, 15).unwrap(),
            category: "Monthly Report".into(),
            electricity: 1_250.0,
            fuel: 450.0,
            travel: 3_200.0,
            waste: 120.0,
            country: "United States".into(),
            total,
            status,
        }
    }

    #[test]
    fn summary_picks_latest_by_date() {
        let entries = [
            entry("1", 12, 2_450.0, EmissionStatus::Verified),
            entry("2", 11, 2_320.0, EmissionStatus::Verified),
            entry("3", 10, 2_580.0, EmissionStatus::Pending),
        ];
        let summary = EmissionsSummary::of(&entries);
        assert_eq!(summary.latest_total, Some(2_450.0));
        assert_eq!(summary.verified, 2);
        assert_eq!(summary.pending, 1);
        assert_eq!(EmissionsSummary::of(&[]).latest_total, None);
    }

    #[test]
    fn form_clears_and_acknowledges() {
        let mut form = EmissionsForm::default();
        form.set("fuel", "450".into());
        form.set("country", "Canada".into());
        form.set("bogus", "1".into());
        assert_eq!(form.fuel, "450");
        assert_eq!(form.submit().key, "emissions.recorded");
        form.clear();
        assert_eq!(form, EmissionsForm::default());
    }
}
