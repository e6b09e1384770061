//! Local carbon cart persisted under a single store key.
//!
//! The cart is add-only from the marketplace: adding an id that is already
//! present is a no-op, so every id appears at most once with quantity 1.
//! Writes replace the whole list (last write wins across tabs).

use crate::catalog::{Project, ProjectCatalog};
use crate::error::CartError;
use crate::store::KvStore;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Store key holding the serialized cart.
pub const CART_KEY: &str = "carbonCart";

/// Snapshot of a project taken when it was added to the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    pub id: String,
    pub project_name: String,
    pub ngo_name: String,
    pub location: String,
    pub price_per_tonne: f64,
    pub quantity: u32,
    pub available_credits: u64,
    pub is_verified: bool,
    pub impact_type: String,
}

impl CartEntry {
    #[must_use]
    pub fn snapshot(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            project_name: project.project_name.clone(),
            ngo_name: project.ngo_name.clone(),
            location: project.location.clone(),
            price_per_tonne: project.price_per_tonne,
            quantity: 1,
            available_credits: project.available_credits,
            is_verified: project.is_verified,
            impact_type: project.impact_type.clone(),
        }
    }

    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.price_per_tonne * f64::from(self.quantity)
    }
}

/// Result of an add request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyInCart,
    UnknownItem,
}

/// The set of ids currently in the cart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartMembership {
    ids: HashSet<String>,
}

impl CartMembership {
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<'a> FromIterator<&'a CartEntry> for CartMembership {
    fn from_iter<I: IntoIterator<Item = &'a CartEntry>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(|entry| entry.id.clone()).collect(),
        }
    }
}

/// Totals shown on the cart page.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CartSummary {
    pub lines: usize,
    pub tonnes: u64,
    pub subtotal: f64,
}

impl CartSummary {
    #[must_use]
    pub fn of(entries: &[CartEntry]) -> Self {
        Self {
            lines: entries.len(),
            tonnes: entries.iter().map(|e| u64::from(e.quantity)).sum(),
            subtotal: entries.iter().map(CartEntry::line_total).sum(),
        }
    }
}

/// Decode a persisted cart, failing open.
///
/// The value must be a JSON array. Elements that do not decode, and repeats
/// of an id already seen, are dropped. Anything else yields an empty cart.
#[must_use]
pub fn decode_cart(raw: &str) -> Vec<CartEntry> {
    let value: serde_json::Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("discarding unparsable cart: {err}");
            return Vec::new();
        }
    };
    let serde_json::Value::Array(items) = value else {
        log::warn!("discarding cart that is not a list");
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut entries = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<CartEntry>(item) {
            Ok(entry) if seen.insert(entry.id.clone()) => entries.push(entry),
            Ok(entry) => log::warn!("dropping duplicate cart entry {}", entry.id),
            Err(err) => log::warn!("dropping cart entry {index}: {err}"),
        }
    }
    entries
}

/// Cart operations over a key-value store.
#[derive(Debug, Clone)]
pub struct CartStore<S: KvStore> {
    store: S,
}

impl<S: KvStore> CartStore<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Current entries; a missing, unreadable or corrupt cart is empty.
    #[must_use]
    pub fn entries(&self) -> Vec<CartEntry> {
        match self.store.get_item(CART_KEY) {
            Ok(Some(raw)) => decode_cart(&raw),
            Ok(None) => Vec::new(),
            Err(err) => {
                log::warn!("cart unavailable: {err}");
                Vec::new()
            }
        }
    }

    #[must_use]
    pub fn load_membership(&self) -> CartMembership {
        self.entries().iter().collect()
    }

    /// Add a catalog item by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated cart cannot be written.
    pub fn add(&self, catalog: &ProjectCatalog, item_id: &str) -> Result<AddOutcome, CartError> {
        let Some(project) = catalog.find(item_id) else {
            return Ok(AddOutcome::UnknownItem);
        };
        let mut entries = self.entries();
        if entries.iter().any(|entry| entry.id == item_id) {
            return Ok(AddOutcome::AlreadyInCart);
        }
        entries.push(CartEntry::snapshot(project));
        self.persist(&entries)?;
        log::debug!("added {item_id} to cart ({} lines)", entries.len());
        Ok(AddOutcome::Added)
    }

    /// Remove an entry by id. Returns whether anything was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated cart cannot be written.
    pub fn remove(&self, item_id: &str) -> Result<bool, CartError> {
        let mut entries = self.entries();
        let before = entries.len();
        entries.retain(|entry| entry.id != item_id);
        if entries.len() == before {
            return Ok(false);
        }
        self.persist(&entries)?;
        Ok(true)
    }

    /// Drop the whole cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the delete.
    pub fn clear(&self) -> Result<(), CartError> {
        self.store.remove_item(CART_KEY)?;
        Ok(())
    }

    #[must_use]
    pub fn summary(&self) -> CartSummary {
        CartSummary::of(&self.entries())
    }

    fn persist(&self, entries: &[CartEntry]) -> Result<(), CartError> {
        let json = serde_json::to_string(entries)?;
        self.store.set_item(CART_KEY, &json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::store::MemoryStore;

    fn catalog() -> ProjectCatalog {
        ProjectCatalog::from_projects(
            [("1", 15.5), ("2", 22.0)]
                .iter()
                .map(|(id, price)| Project {
                    id: (*id).into(),
                    project_name: format!("Project {id}"),
                    ngo_name: "NGO".into(),
                    location: "Somewhere".into(),
                    country: "Brazil".into(),
                    price_per_tonne: *price,
                    is_verified: true,
                    impact_type: "Forest Conservation".into(),
                    available_credits: 100,
                })
                .collect(),
        )
    }

    #[test]
    fn add_is_idempotent() {
        let cart = CartStore::new(MemoryStore::new());
        let catalog = catalog();
        assert_eq!(cart.add(&catalog, "1").unwrap(), AddOutcome::Added);
        assert_eq!(cart.add(&catalog, "1").unwrap(), AddOutcome::AlreadyInCart);
        assert_eq!(cart.add(&catalog, "9").unwrap(), AddOutcome::UnknownItem);
        let entries = cart.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].quantity, 1);
    }

    #[test]
    fn persisted_form_uses_camel_case() {
        let store = MemoryStore::new();
        let cart = CartStore::new(store.clone());
        cart.add(&catalog(), "2").unwrap();
        let raw = store.raw(CART_KEY).unwrap();
        assert!(raw.starts_with('['));
        assert!(raw.contains("\"projectName\":\"Project 2\""));
        assert!(raw.contains("\"pricePerTonne\":22.0"));
        assert!(raw.contains("\"quantity\":1"));
    }

    #[test]
    fn corrupt_values_decode_empty() {
        assert!(decode_cart("not json").is_empty());
        assert!(decode_cart("{\"id\":\"1\"}").is_empty());
        assert!(decode_cart("null").is_empty());
        assert!(decode_cart("[]").is_empty());
    }

    #[test]
    fn decode_drops_bad_and_duplicate_elements() {
        let good = serde_json::to_value(CartEntry::snapshot(&catalog().projects[0])).unwrap();
        let raw = serde_json::json!([good, {"id": 5}, good, "x"]).to_string();
        let entries = decode_cart(&raw);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "1");
    }

    #[test]
    fn remove_clear_and_summary() {
        let cart = CartStore::new(MemoryStore::new());
        let catalog = catalog();
        cart.add(&catalog, "1").unwrap();
        cart.add(&catalog, "2").unwrap();
        let summary = cart.summary();
        assert_eq!(summary.lines, 2);
        assert_eq!(summary.tonnes, 2);
        assert!((summary.subtotal - 37.5).abs() < f64::EPSILON);

        assert!(cart.remove("1").unwrap());
        assert!(!cart.remove("1").unwrap());
        assert!(cart.load_membership().contains("2"));
        cart.clear().unwrap();
        assert!(cart.load_membership().is_empty());
    }

    struct BrokenStore;

    impl KvStore for BrokenStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable)
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::QuotaExceeded)
        }

        fn remove_item(&self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable)
        }
    }

    #[test]
    fn unreadable_store_is_empty_but_writes_surface() {
        let cart = CartStore::new(BrokenStore);
        assert!(cart.load_membership().is_empty());
        let err = cart.add(&catalog(), "1").unwrap_err();
        assert!(matches!(err, CartError::Store(StoreError::QuotaExceeded)));
    }
}
