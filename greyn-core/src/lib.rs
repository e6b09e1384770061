//! Greyn Eco Core
//!
//! Platform-agnostic domain logic for the Greyn Eco carbon marketplace and
//! ESG workspace: catalog filtering, the local carbon cart, review workflows
//! and the derived statistics shown on every dashboard. No browser
//! dependencies live here.

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod corporate;
pub mod data;
pub mod error;
pub mod filter;
pub mod investor;
pub mod numbers;
pub mod review;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use admin::{AdminSeed, FundingProject, PlatformEvent, PlatformSnapshot, ServiceHealth};
pub use cart::{
    AddOutcome, CART_KEY, CartEntry, CartMembership, CartStore, CartSummary, decode_cart,
};
pub use catalog::{Project, ProjectCatalog};
pub use corporate::Acknowledgement;
pub use data::{SEED_NAMES, SeedBundle, parse_seed};
pub use error::{CartError, ReviewError, SeedError, StoreError};
pub use filter::{FilterSet, MarketplaceFilter, Predicate, PriceRange, Selection, TextSearch};
pub use investor::{Investment, PortfolioTotals};
pub use review::{
    Activity, ActivityKind, ActivityStatus, CreditAward, CreditLedger, ReviewQueue, ReviewState,
    Reviewable, Verdict,
};
pub use session::{Area, ROLE_KEY, Role, load_role, save_role};
pub use store::{KvStore, MemoryStore};

/// Trait for abstracting seed loading.
/// Platform-specific implementations should provide this
pub trait DataLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load and decode the named seed
    ///
    /// # Errors
    ///
    /// Returns an error if the seed is unknown or cannot be parsed.
    fn load_seed<T>(&self, seed_name: &str) -> Result<T, Self::Error>
    where
        T: serde::de::DeserializeOwned;
}

/// Entry point bundling a seed loader with the persistent store
pub struct GreynEngine<L, S>
where
    L: DataLoader,
    S: KvStore,
{
    data_loader: L,
    store: S,
}

impl<L, S> GreynEngine<L, S>
where
    L: DataLoader,
    S: KvStore,
{
    /// Create an engine with the provided data loader and store
    pub const fn new(data_loader: L, store: S) -> Self {
        Self { data_loader, store }
    }

    /// Load every seed
    ///
    /// # Errors
    ///
    /// Returns an error if any seed cannot be loaded.
    pub fn seeds(&self) -> Result<SeedBundle, L::Error> {
        SeedBundle::load(&self.data_loader)
    }

    /// Cart operations backed by this engine's store
    #[must_use]
    pub const fn cart(&self) -> CartStore<&S> {
        CartStore::new(&self.store)
    }

    /// The persisted role flag
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        load_role(&self.store)
    }

    /// Persist or clear the role flag
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    pub fn set_role(&self, role: Option<Role>) -> Result<(), StoreError> {
        save_role(&self.store, role)
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::DeserializeOwned;

    #[derive(Clone, Copy, Default)]
    struct FixtureLoader;

    impl DataLoader for FixtureLoader {
        type Error = SeedError;

        fn load_seed<T>(&self, seed_name: &str) -> Result<T, Self::Error>
        where
            T: DeserializeOwned,
        {
            let json = match seed_name {
                "projects" => {
                    r#"{"projects":[{"id":"1","projectName":"Peatland Restoration",
                    "ngoName":"Wetlands International","location":"Indonesia",
                    "country":"Indonesia","pricePerTonne":16.5,"isVerified":true,
                    "impactType":"Ecosystem Restoration","availableCredits":78000}]}"#
                }
                "admin" => {
                    r#"{"stats":{"totalUsers":1,"totalProjects":1,"totalInvestments":0,
                    "activeProjects":1,"pendingProjects":0,"completedProjects":0,
                    "totalCarbonCredits":0,"newUsersThisMonth":0,
                    "investmentGrowth":"+0%","platformRevenue":0}}"#
                }
                "activities" => r#"{"activities":[]}"#,
                "campaigns" => r#"{"campaigns":[]}"#,
                "emissions" => r#"{"entries":[]}"#,
                "employees" => r#"{"employees":[]}"#,
                "reports" => r#"{"reports":[]}"#,
                "volunteers" => r#"{"events":[],"requests":[]}"#,
                "investments" => r#"{"investments":[]}"#,
                "corporate_kpis" => r#"{"kpis":[]}"#,
                other => return Err(SeedError::Unknown(other.to_string())),
            };
            parse_seed(json)
        }
    }

    #[test]
    fn engine_loads_seeds_and_fills_cart() {
        let engine = GreynEngine::new(FixtureLoader, MemoryStore::new());
        let seeds = engine.seeds().unwrap();
        assert_eq!(seeds.catalog.len(), 1);

        let cart = engine.cart();
        assert_eq!(cart.add(&seeds.catalog, "1").unwrap(), AddOutcome::Added);
        assert!(engine.cart().load_membership().contains("1"));
        assert!(engine.store().raw(CART_KEY).is_some());
    }

    #[test]
    fn engine_persists_role() {
        let engine = GreynEngine::new(FixtureLoader, MemoryStore::new());
        assert_eq!(engine.role(), None);
        engine.set_role(Some(Role::Admin)).unwrap();
        assert_eq!(engine.role(), Some(Role::Admin));
    }

    #[test]
    fn unknown_seed_is_an_error() {
        let err = FixtureLoader.load_seed::<ProjectCatalog>("weather").unwrap_err();
        assert!(matches!(err, SeedError::Unknown(name) if name == "weather"));
    }
}
