//! Catalog filter engine.
//!
//! A filter is a conjunction of independent predicates evaluated over a fixed
//! catalog. Results keep catalog order; an empty result is a valid state.

use crate::catalog::{Project, ProjectCatalog};
use serde::{Deserialize, Serialize};

pub const ALL_COUNTRIES: &str = "All Countries";
pub const ALL_NGOS: &str = "All NGOs";
pub const ALL_TYPES: &str = "All Types";

pub const PRICE_FLOOR: f64 = 0.0;
pub const PRICE_CEILING: f64 = 50.0;
pub const PRICE_STEP: f64 = 0.5;

/// A single-choice facet selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection<T> {
    /// Sentinel: the predicate passes every item.
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq> Selection<T> {
    #[must_use]
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == value,
        }
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl Selection<String> {
    /// Interpret a select-box value, where `sentinel` stands for "everything".
    #[must_use]
    pub fn from_choice(value: &str, sentinel: &str) -> Self {
        if value.is_empty() || value == sentinel {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    /// The select-box value for this selection.
    #[must_use]
    pub fn as_choice<'a>(&'a self, sentinel: &'a str) -> &'a str {
        match self {
            Self::All => sentinel,
            Self::Only(value) => value.as_str(),
        }
    }

    #[must_use]
    pub fn admits_str(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == value,
        }
    }
}

/// Inclusive price window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: PRICE_FLOOR,
            max: PRICE_CEILING,
        }
    }
}

impl PriceRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Both bounds are inclusive.
    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }

    /// Move the upper bound, keeping it within the slider and above `min`.
    pub fn set_max(&mut self, max: f64) {
        self.max = max.min(PRICE_CEILING).max(PRICE_FLOOR).max(self.min);
    }

    /// Move the lower bound, keeping it within the slider and below `max`.
    pub fn set_min(&mut self, min: f64) {
        self.min = min.max(PRICE_FLOOR).min(PRICE_CEILING).min(self.max);
    }
}

/// A boolean test over a listing item.
pub trait Predicate<T: ?Sized> {
    fn matches(&self, item: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    fn matches(&self, item: &T) -> bool {
        self(item)
    }
}

/// Logical AND of boxed predicates. An empty set passes everything.
pub struct FilterSet<'a, T: ?Sized> {
    predicates: Vec<Box<dyn Predicate<T> + 'a>>,
}

impl<T: ?Sized> Default for FilterSet<'_, T> {
    fn default() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }
}

impl<'a, T: ?Sized> FilterSet<'a, T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, predicate: impl Predicate<T> + 'a) -> Self {
        self.predicates.push(Box::new(predicate));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    #[must_use]
    pub fn matches(&self, item: &T) -> bool {
        self.predicates.iter().all(|p| p.matches(item))
    }
}

impl<'a, T> FilterSet<'a, T> {
    /// Items passing every predicate, in input order.
    #[must_use]
    pub fn apply<'i>(&self, items: &'i [T]) -> Vec<&'i T> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

/// Case-insensitive substring search across several text fields.
pub struct TextSearch<T> {
    needle: String,
    fields: Vec<fn(&T) -> &str>,
}

impl<T> TextSearch<T> {
    #[must_use]
    pub fn new(query: &str, fields: Vec<fn(&T) -> &str>) -> Self {
        Self {
            needle: query.to_lowercase(),
            fields,
        }
    }
}

impl<T> Predicate<T> for TextSearch<T> {
    fn matches(&self, item: &T) -> bool {
        self.needle.is_empty()
            || self
                .fields
                .iter()
                .any(|field| field(item).to_lowercase().contains(&self.needle))
    }
}

/// Facet options for a select box: the sentinel first, then the distinct
/// values in first-seen order.
#[must_use]
pub fn facet_options(sentinel: &str, values: Vec<String>) -> Vec<String> {
    let mut options = Vec::with_capacity(values.len() + 1);
    options.push(sentinel.to_string());
    options.extend(values.into_iter().filter(|value| value != sentinel));
    options
}

/// Filter state of the marketplace listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketplaceFilter {
    pub country: Selection<String>,
    pub ngo: Selection<String>,
    pub price: PriceRange,
    pub impact_type: Selection<String>,
}

impl MarketplaceFilter {
    /// Restore every predicate to its default in one step.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    #[must_use]
    pub fn with_country(mut self, country: &str) -> Self {
        self.country = Selection::from_choice(country, ALL_COUNTRIES);
        self
    }

    #[must_use]
    pub fn with_ngo(mut self, ngo: &str) -> Self {
        self.ngo = Selection::from_choice(ngo, ALL_NGOS);
        self
    }

    #[must_use]
    pub fn with_impact_type(mut self, impact_type: &str) -> Self {
        self.impact_type = Selection::from_choice(impact_type, ALL_TYPES);
        self
    }

    #[must_use]
    pub const fn with_price(mut self, price: PriceRange) -> Self {
        self.price = price;
        self
    }

    /// The filter as a predicate set over projects.
    #[must_use]
    pub fn predicates(&self) -> FilterSet<'_, Project> {
        FilterSet::new()
            .with(|p: &Project| self.country.admits_str(&p.country))
            .with(|p: &Project| self.ngo.admits_str(&p.ngo_name))
            .with(|p: &Project| self.price.contains(p.price_per_tonne))
            .with(|p: &Project| self.impact_type.admits_str(&p.impact_type))
    }

    /// Matching projects in catalog order.
    #[must_use]
    pub fn apply<'c>(&self, catalog: &'c ProjectCatalog) -> Vec<&'c Project> {
        self.predicates().apply(&catalog.projects)
    }
}
