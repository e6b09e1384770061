//! Seed data bundle.
//!
//! Every listing screen starts from a static seed decoded from JSON. The
//! platform decides where the JSON comes from through [`crate::DataLoader`].

use crate::admin::AdminSeed;
use crate::catalog::ProjectCatalog;
use crate::corporate::{
    CampaignSeed, EmissionSeed, EmployeeSeed, KpiSeed, ReportSeed, VolunteerSeed,
};
use crate::error::SeedError;
use crate::investor::InvestmentSeed;
use crate::review::ActivitySeed;
use crate::DataLoader;
use serde::de::DeserializeOwned;

/// Names of every seed asset, in load order.
pub const SEED_NAMES: [&str; 10] = [
    "projects",
    "activities",
    "campaigns",
    "emissions",
    "employees",
    "reports",
    "volunteers",
    "investments",
    "admin",
    "corporate_kpis",
];

/// Decode a seed from JSON text.
///
/// # Errors
///
/// Returns [`SeedError::Json`] if the text does not match the seed shape.
pub fn parse_seed<T: DeserializeOwned>(json: &str) -> Result<T, SeedError> {
    serde_json::from_str(json).map_err(SeedError::from)
}

/// All seeds needed by the application.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedBundle {
    pub catalog: ProjectCatalog,
    pub activities: ActivitySeed,
    pub campaigns: CampaignSeed,
    pub emissions: EmissionSeed,
    pub employees: EmployeeSeed,
    pub reports: ReportSeed,
    pub volunteers: VolunteerSeed,
    pub investments: InvestmentSeed,
    pub admin: AdminSeed,
    pub kpis: KpiSeed,
}

impl SeedBundle {
    /// Load every seed through `loader`.
    ///
    /// # Errors
    ///
    /// Returns the first loader error encountered.
    pub fn load<L: DataLoader + ?Sized>(loader: &L) -> Result<Self, L::Error> {
        Ok(Self {
            catalog: loader.load_seed("projects")?,
            activities: loader.load_seed("activities")?,
            campaigns: loader.load_seed("campaigns")?,
            emissions: loader.load_seed("emissions")?,
            employees: loader.load_seed("employees")?,
            reports: loader.load_seed("reports")?,
            volunteers: loader.load_seed("volunteers")?,
            investments: loader.load_seed("investments")?,
            admin: loader.load_seed("admin")?,
            kpis: loader.load_seed("corporate_kpis")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_seed_reports_shape_errors() {
        let err = parse_seed::<ProjectCatalog>("{\"projects\": 3}").unwrap_err();
        assert!(matches!(err, SeedError::Json(_)));
        let empty: ProjectCatalog = parse_seed("{\"projects\": []}").unwrap();
        assert!(empty.is_empty());
    }
}
