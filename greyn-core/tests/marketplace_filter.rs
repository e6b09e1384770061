mod common;

use greyn_core::filter::{ALL_COUNTRIES, ALL_NGOS, ALL_TYPES, PRICE_CEILING, PRICE_STEP};
use greyn_core::{MarketplaceFilter, PriceRange, Project, ProjectCatalog};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn ids(projects: &[&Project]) -> Vec<String> {
    projects.iter().map(|p| p.id.clone()).collect()
}

#[test]
fn price_window_selects_inclusive_band() {
    let catalog = common::seeds().catalog;
    assert_eq!(catalog.len(), 8);
    let filter = MarketplaceFilter::default().with_price(PriceRange::new(15.0, 25.0));
    let hits = filter.apply(&catalog);
    assert_eq!(ids(&hits), vec!["1", "2", "3", "4", "7"]);
    assert!(
        hits.iter()
            .all(|p| (15.0..=25.0).contains(&p.price_per_tonne))
    );
}

#[test]
fn facet_lists_follow_catalog_order() {
    let catalog = common::seeds().catalog;
    let countries = greyn_core::filter::facet_options(ALL_COUNTRIES, catalog.countries());
    assert_eq!(countries[0], ALL_COUNTRIES);
    assert_eq!(countries[1], "Brazil");
    assert_eq!(countries.len(), 9);
    let types = greyn_core::filter::facet_options(ALL_TYPES, catalog.impact_types());
    // Renewable Energy appears twice in the catalog
    assert_eq!(types.len(), 8);
}

fn random_choice(rng: &mut ChaCha20Rng, sentinel: &str, values: &[String]) -> String {
    let pick = rng.gen_range(0..=values.len());
    values
        .get(pick)
        .cloned()
        .unwrap_or_else(|| sentinel.to_string())
}

fn random_filter(rng: &mut ChaCha20Rng, catalog: &ProjectCatalog) -> MarketplaceFilter {
    let steps = (PRICE_CEILING / PRICE_STEP) as u32;
    let a = f64::from(rng.gen_range(0..=steps)) * PRICE_STEP;
    let b = f64::from(rng.gen_range(0..=steps)) * PRICE_STEP;
    MarketplaceFilter::default()
        .with_country(&random_choice(rng, ALL_COUNTRIES, &catalog.countries()))
        .with_ngo(&random_choice(rng, ALL_NGOS, &catalog.ngos()))
        .with_impact_type(&random_choice(rng, ALL_TYPES, &catalog.impact_types()))
        .with_price(PriceRange::new(a.min(b), a.max(b)))
}

#[test]
fn filtered_view_is_an_ordered_subset() {
    let catalog = common::seeds().catalog;
    for seed in [0x0000_C0FF_EE00_u64, 7, 42, 0xDEAD_BEEF] {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        for _ in 0..200 {
            let filter = random_filter(&mut rng, &catalog);
            let hits = filter.apply(&catalog);
            let positions: Vec<usize> = hits
                .iter()
                .map(|hit| {
                    catalog
                        .projects
                        .iter()
                        .position(|p| p.id == hit.id)
                        .expect("hit comes from catalog")
                })
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "order broken");
            for project in &catalog.projects {
                let expected = filter.country.admits_str(&project.country)
                    && filter.ngo.admits_str(&project.ngo_name)
                    && filter.price.contains(project.price_per_tonne)
                    && filter.impact_type.admits_str(&project.impact_type);
                assert_eq!(
                    expected,
                    hits.iter().any(|hit| hit.id == project.id),
                    "membership mismatch for {} under {filter:?}",
                    project.id
                );
            }
        }
    }
}

#[test]
fn reset_returns_full_catalog() {
    let catalog = common::seeds().catalog;
    let mut rng = ChaCha20Rng::seed_from_u64(99);
    for _ in 0..50 {
        let mut filter = random_filter(&mut rng, &catalog);
        filter.reset();
        assert!(filter.is_default());
        assert_eq!(filter.apply(&catalog).len(), catalog.len());
    }
}

#[test]
fn conflicting_filters_yield_empty_view() {
    let catalog = common::seeds().catalog;
    let filter = MarketplaceFilter::default()
        .with_country("Kenya")
        .with_impact_type("Renewable Energy");
    assert!(filter.apply(&catalog).is_empty());
}
