//! Web bindings for the core engine
//!
//! Seeds ship inside the bundle as JSON assets; persistence goes through
//! [`BrowserStore`].

use crate::storage::BrowserStore;
use greyn_core::{DataLoader, GreynEngine, SeedError, parse_seed};
use serde::de::DeserializeOwned;

pub use greyn_core::*;

/// Seed loader that serves the embedded JSON assets
#[derive(Debug, Clone, Copy, Default)]
pub struct WebDataLoader;

impl WebDataLoader {
    fn asset(seed_name: &str) -> Option<&'static str> {
        let json = match seed_name {
            "projects" => include_str!("../static/assets/data/projects.json"),
            "activities" => include_str!("../static/assets/data/activities.json"),
            "campaigns" => include_str!("../static/assets/data/campaigns.json"),
            "emissions" => include_str!("../static/assets/data/emissions.json"),
            "employees" => include_str!("../static/assets/data/employees.json"),
            "reports" => include_str!("../static/assets/data/reports.json"),
            "volunteers" => include_str!("../static/assets/data/volunteers.json"),
            "investments" => include_str!("../static/assets/data/investments.json"),
            "admin" => include_str!("../static/assets/data/admin.json"),
            "corporate_kpis" => include_str!("../static/assets/data/corporate_kpis.json"),
            _ => return None,
        };
        Some(json)
    }
}

impl DataLoader for WebDataLoader {
    type Error = SeedError;

    fn load_seed<T>(&self, seed_name: &str) -> Result<T, Self::Error>
    where
        T: DeserializeOwned,
    {
        let json =
            Self::asset(seed_name).ok_or_else(|| SeedError::Unknown(seed_name.to_string()))?;
        parse_seed(json)
    }
}

/// Create the engine used by the browser app
#[must_use]
pub const fn create_web_engine() -> GreynEngine<WebDataLoader, BrowserStore> {
    GreynEngine::new(WebDataLoader, BrowserStore)
}
