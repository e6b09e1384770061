//! ESG report archive and the generate-report form.
use super::Acknowledgement;
use crate::numbers::money_thousands;
use chrono::{Month, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{4})$").expect("valid regex"));
static QUARTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?i)q([1-4])\s+(\d{4})$").expect("valid regex"));
static MONTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z]+)\s+(\d{4})$").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Draft,
    Published,
    Archived,
}

impl ReportStatus {
    pub const ALL: [Self; 3] = [Self::Published, Self::Draft, Self::Archived];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportKind {
    #[default]
    Annual,
    Quarterly,
    Monthly,
}

impl ReportKind {
    pub const ALL: [Self; 3] = [Self::Annual, Self::Quarterly, Self::Monthly];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Annual => "Annual",
            Self::Quarterly => "Quarterly",
            Self::Monthly => "Monthly",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EsgReport {
    pub id: String,
    pub title: String,
    pub period: String,
    pub generated_date: NaiveDate,
    pub status: ReportStatus,
    #[serde(rename = "type")]
    pub kind: ReportKind,
    /// tCO₂e
    pub emissions: f64,
    /// tCO₂e
    pub offset_purchased: f64,
    pub donations: f64,
    pub volunteer_hours: u32,
}

impl EsgReport {
    /// One-line figure summary shown under the title.
    #[must_use]
    pub fn subtitle(&self) -> String {
        format!(
            "{:.1}t CO₂ • {} donations",
            self.emissions,
            money_thousands(self.donations)
        )
    }

    /// Net position: offsets bought minus emitted.
    #[must_use]
    pub fn net_offset(&self) -> f64 {
        self.offset_purchased - self.emissions
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSeed {
    pub reports: Vec<EsgReport>,
}

impl ReportSeed {
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&EsgReport> {
        self.reports.iter().find(|report| report.id == id)
    }

    #[must_use]
    pub fn count(&self, status: ReportStatus) -> usize {
        self.reports.iter().filter(|r| r.status == status).count()
    }
}

/// A reporting period typed into the generate form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPeriod {
    Year(i32),
    Quarter { quarter: u8, year: i32 },
    Month { month: Month, year: i32 },
}

impl ReportPeriod {
    /// Parse `2023`, `Q4 2023` or `January 2024`.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if let Some(caps) = YEAR_RE.captures(input) {
            return caps[1].parse().ok().map(Self::Year);
        }
        if let Some(caps) = QUARTER_RE.captures(input) {
            let quarter = caps[1].parse().ok()?;
            let year = caps[2].parse().ok()?;
            return Some(Self::Quarter { quarter, year });
        }
        let caps = MONTH_RE.captures(input)?;
        let month = caps[1].parse::<Month>().ok()?;
        let year = caps[2].parse().ok()?;
        Some(Self::Month { month, year })
    }

    #[must_use]
    pub const fn kind(self) -> ReportKind {
        match self {
            Self::Year(_) => ReportKind::Annual,
            Self::Quarter { .. } => ReportKind::Quarterly,
            Self::Month { .. } => ReportKind::Monthly,
        }
    }

    /// Title in the archive's naming scheme.
    #[must_use]
    pub fn title(self) -> String {
        match self {
            Self::Year(year) => format!("Annual ESG Report {year}"),
            Self::Quarter { quarter, year } => format!("Q{quarter} ESG Report {year}"),
            Self::Month { .. } => format!("Monthly ESG Report - {self}"),
        }
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Year(year) => write!(f, "{year}"),
            Self::Quarter { quarter, year } => write!(f, "Q{quarter} {year}"),
            Self::Month { month, year } => write!(f, "{} {year}", month.name()),
        }
    }
}

/// Generate-report form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    pub kind: ReportKind,
    pub period: String,
    pub include_emissions: bool,
    pub include_donations: bool,
    pub include_volunteers: bool,
}

impl Default for ReportRequest {
    fn default() -> Self {
        Self {
            kind: ReportKind::Annual,
            period: String::new(),
            include_emissions: true,
            include_donations: true,
            include_volunteers: true,
        }
    }
}

impl ReportRequest {
    /// Title the report would get, when the period is recognised and agrees
    /// with the selected type.
    #[must_use]
    pub fn proposed_title(&self) -> Option<String> {
        ReportPeriod::parse(&self.period)
            .filter(|period| period.kind() == self.kind)
            .map(ReportPeriod::title)
    }

    #[must_use]
    pub fn section_count(&self) -> usize {
        [
            self.include_emissions,
            self.include_donations,
            self.include_volunteers,
        ]
        .into_iter()
        .filter(|on| *on)
        .count()
    }

    #[must_use]
    pub fn submit(&self) -> Acknowledgement {
        let ack = Acknowledgement::new("reports.generated");
        match self.proposed_title() {
            Some(title) => ack.with_detail(title),
            None => ack.with_detail(self.period.trim()),
        }
    }
}
