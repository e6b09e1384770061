#![allow(dead_code)]

use greyn_core::{DataLoader, SeedBundle, SeedError, parse_seed};
use serde::de::DeserializeOwned;

/// Loads the web crate's seed assets from disk at compile time.
pub struct AssetLoader;

impl DataLoader for AssetLoader {
    type Error = SeedError;

    fn load_seed<T>(&self, seed_name: &str) -> Result<T, Self::Error>
    where
        T: DeserializeOwned,
    {
        let json = match seed_name {
            "projects" => include_str!("../../../greyn-web/static/assets/data/projects.json"),
            "activities" => include_str!("../../../greyn-web/static/assets/data/activities.json"),
            "campaigns" => include_str!("../../../greyn-web/static/assets/data/campaigns.json"),
            "emissions" => include_str!("../../../greyn-web/static/assets/data/emissions.json"),
            "employees" => include_str!("../../../greyn-web/static/assets/data/employees.json"),
            "reports" => include_str!("../../../greyn-web/static/assets/data/reports.json"),
            "volunteers" => include_str!("../../../greyn-web/static/assets/data/volunteers.json"),
            "investments" => {
                include_str!("../../../greyn-web/static/assets/data/investments.json")
            }
            "admin" => include_str!("../../../greyn-web/static/assets/data/admin.json"),
            "corporate_kpis" => {
                include_str!("../../../greyn-web/static/assets/data/corporate_kpis.json")
            }
            other => return Err(SeedError::Unknown(other.to_string())),
        };
        parse_seed(json)
    }
}

pub fn seeds() -> SeedBundle {
    SeedBundle::load(&AssetLoader).expect("seed assets decode")
}
