//! Corporate ESG workspace: dashboard KPIs, emissions, campaigns, employees,
//! reports and volunteering.

pub mod campaigns;
pub mod dashboard;
pub mod emissions;
pub mod employees;
pub mod reports;
pub mod volunteers;

pub use campaigns::{Campaign, CampaignDraft, CampaignSeed, CampaignStatus, CampaignTotals};
pub use dashboard::{ChangeTrend, KpiSeed, KpiSnapshot, CHART_PANELS};
pub use emissions::{EmissionEntry, EmissionSeed, EmissionStatus, EmissionsForm, EmissionsSummary};
pub use employees::{Employee, EmployeeQuery, EmployeeRole, EmployeeSeed, WorkforceSummary};
pub use reports::{EsgReport, ReportKind, ReportPeriod, ReportRequest, ReportSeed, ReportStatus};
pub use volunteers::{
    EventDraft, EventStatus, RequestStatus, VolunteerEvent, VolunteerRequest, VolunteerSeed,
};

/// Local confirmation returned by forms that have no backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgement {
    /// Translation key of the confirmation message
    pub key: &'static str,
    /// Optional value interpolated into the message as `{detail}`
    pub detail: Option<String>,
}

impl Acknowledgement {
    #[must_use]
    pub const fn new(key: &'static str) -> Self {
        Self { key, detail: None }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}
