//! Carbon offset project catalog.
use serde::{Deserialize, Serialize};

/// A purchasable carbon offset project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub project_name: String,
    pub ngo_name: String,
    pub location: String,
    pub country: String,
    /// Price in dollars per tonne of CO₂
    pub price_per_tonne: f64,
    pub is_verified: bool,
    pub impact_type: String,
    pub available_credits: u64,
}

/// The fixed catalog loaded once per page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectCatalog {
    pub projects: Vec<Project>,
}

impl ProjectCatalog {
    /// Load the catalog from a JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a catalog.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn from_projects(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Distinct countries in first-seen order.
    #[must_use]
    pub fn countries(&self) -> Vec<String> {
        distinct(self.projects.iter().map(|p| p.country.as_str()))
    }

    /// Distinct NGO names in first-seen order.
    #[must_use]
    pub fn ngos(&self) -> Vec<String> {
        distinct(self.projects.iter().map(|p| p.ngo_name.as_str()))
    }

    /// Distinct impact types in first-seen order.
    #[must_use]
    pub fn impact_types(&self) -> Vec<String> {
        distinct(self.projects.iter().map(|p| p.impact_type.as_str()))
    }

    /// Lowest and highest price in the catalog.
    #[must_use]
    pub fn price_bounds(&self) -> Option<(f64, f64)> {
        self.projects.iter().fold(None, |acc, p| {
            let price = p.price_per_tonne;
            Some(acc.map_or((price, price), |(lo, hi): (f64, f64)| {
                (lo.min(price), hi.max(price))
            }))
        })
    }
}

pub(crate) fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        if !seen.iter().any(|known| known == value) {
            seen.push(value.to_string());
        }
    }
    seen
}
