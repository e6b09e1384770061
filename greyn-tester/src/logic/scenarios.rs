//! Randomized property checks over the core marketplace, cart and review
//! logic. Every check draws its inputs from the iteration's seeded RNG, so a
//! failing seed replays exactly.

use anyhow::{Context, Result, anyhow, ensure};
use chrono::NaiveDate;
use greyn_core::filter::{
    ALL_COUNTRIES, ALL_NGOS, ALL_TYPES, PRICE_CEILING, PRICE_FLOOR, PRICE_STEP,
};
use greyn_core::{
    ActivityStatus, AddOutcome, CART_KEY, CartEntry, CartStore, CreditLedger, MarketplaceFilter,
    MemoryStore, PriceRange, ProjectCatalog, ReviewError, ReviewQueue,
};
use rand::Rng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;
use serde_json::{Value, json};
use std::collections::{HashMap, HashSet};

use super::assets::TesterAssets;

/// Slider positions between the price floor and ceiling.
const SLIDER_STEPS: u32 = 100;
const PRICE_MOVES: usize = 24;
const CART_OPERATIONS: usize = 40;
const REVIEW_DECISIONS: usize = 12;

pub type Check = fn(&TesterAssets, &mut ChaCha20Rng) -> Result<()>;

pub struct LogicScenario {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub check: Check,
}

pub const SCENARIOS: [LogicScenario; 6] = [
    LogicScenario {
        key: "filter-subset",
        name: "Filter Subset",
        description: "Filtered listings are an ordered subset matching every predicate",
        check: filter_subset,
    },
    LogicScenario {
        key: "filter-reset",
        name: "Filter Reset",
        description: "Resetting any filter restores the full catalog",
        check: filter_reset,
    },
    LogicScenario {
        key: "price-window",
        name: "Price Window",
        description: "Slider moves keep the price window ordered and in range",
        check: price_window,
    },
    LogicScenario {
        key: "cart-idempotence",
        name: "Cart Idempotence",
        description: "Random add/remove sequences keep each project at most once",
        check: cart_idempotence,
    },
    LogicScenario {
        key: "cart-corrupt",
        name: "Cart Corruption",
        description: "Corrupt stored carts decode to unique entries without failing",
        check: cart_corrupt,
    },
    LogicScenario {
        key: "review-terminal",
        name: "Review Terminal States",
        description: "Resolved activities never change and credits match verifications",
        check: review_terminal,
    },
];

pub fn get_scenario(key: &str) -> Option<&'static LogicScenario> {
    SCENARIOS.iter().find(|scenario| scenario.key == key)
}

pub fn list_scenarios() -> impl Iterator<Item = (&'static str, &'static str)> {
    SCENARIOS
        .iter()
        .map(|scenario| (scenario.key, scenario.description))
}

fn slider_price(rng: &mut ChaCha20Rng) -> f64 {
    PRICE_FLOOR + f64::from(rng.gen_range(0..=SLIDER_STEPS)) * PRICE_STEP
}

fn pick_choice(values: &[String], sentinel: &str, rng: &mut ChaCha20Rng) -> String {
    if rng.gen_bool(0.3) {
        return sentinel.to_string();
    }
    values
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| sentinel.to_string())
}

fn random_filter(catalog: &ProjectCatalog, rng: &mut ChaCha20Rng) -> MarketplaceFilter {
    let mut price = PriceRange::default();
    price.set_max(slider_price(rng));
    if rng.gen_bool(0.5) {
        price.set_min(slider_price(rng));
    }
    MarketplaceFilter::default()
        .with_country(&pick_choice(&catalog.countries(), ALL_COUNTRIES, rng))
        .with_ngo(&pick_choice(&catalog.ngos(), ALL_NGOS, rng))
        .with_impact_type(&pick_choice(&catalog.impact_types(), ALL_TYPES, rng))
        .with_price(price)
}

fn filter_subset(assets: &TesterAssets, rng: &mut ChaCha20Rng) -> Result<()> {
    let catalog = &assets.seeds.catalog;
    let filter = random_filter(catalog, rng);
    let matched = filter.apply(catalog);
    let predicates = filter.predicates();

    for project in &matched {
        ensure!(
            predicates.matches(project),
            "project {} does not satisfy {filter:?}",
            project.id
        );
    }

    let positions = matched
        .iter()
        .map(|project| catalog.projects.iter().position(|p| p.id == project.id))
        .collect::<Option<Vec<_>>>()
        .context("filter returned a project outside the catalog")?;
    ensure!(
        positions.windows(2).all(|pair| pair[0] < pair[1]),
        "results left catalog order: {positions:?}"
    );

    let expected = catalog
        .projects
        .iter()
        .filter(|project| predicates.matches(project))
        .count();
    ensure!(
        expected == matched.len(),
        "filter dropped matches: expected {expected}, got {}",
        matched.len()
    );

    let relaxed = filter.clone().with_country(ALL_COUNTRIES).apply(catalog);
    ensure!(
        relaxed.len() >= matched.len(),
        "relaxing the country narrowed the listing"
    );
    Ok(())
}

fn filter_reset(assets: &TesterAssets, rng: &mut ChaCha20Rng) -> Result<()> {
    let catalog = &assets.seeds.catalog;
    let mut filter = random_filter(catalog, rng);
    filter.reset();
    ensure!(filter.is_default(), "reset left {filter:?}");
    let listed = filter.apply(catalog).len();
    ensure!(
        listed == catalog.len(),
        "default filter listed {listed} of {} projects",
        catalog.len()
    );
    Ok(())
}

fn price_window(_assets: &TesterAssets, rng: &mut ChaCha20Rng) -> Result<()> {
    let mut range = PriceRange::default();
    for step in 0..PRICE_MOVES {
        // Values past either end exercise the clamping.
        let value = rng.gen_range(PRICE_FLOOR - 10.0..PRICE_CEILING + 10.0);
        if rng.gen_bool(0.5) {
            range.set_max(value);
        } else {
            range.set_min(value);
        }
        ensure!(
            PRICE_FLOOR <= range.min && range.min <= range.max && range.max <= PRICE_CEILING,
            "move {step} to {value:.2} escaped the slider: {range:?}"
        );
    }
    Ok(())
}

fn cart_idempotence(assets: &TesterAssets, rng: &mut ChaCha20Rng) -> Result<()> {
    let catalog = &assets.seeds.catalog;
    let store = MemoryStore::new();
    let cart = CartStore::new(&store);

    let mut ids: Vec<String> = catalog.projects.iter().map(|p| p.id.clone()).collect();
    ids.push("not-a-project".to_string());
    let mut model: Vec<String> = Vec::new();

    for step in 0..CART_OPERATIONS {
        let id = ids.choose(rng).context("catalog is empty")?.clone();
        if rng.gen_range(0..3) < 2 {
            let outcome = cart.add(catalog, &id)?;
            let expected = if catalog.find(&id).is_none() {
                AddOutcome::UnknownItem
            } else if model.contains(&id) {
                AddOutcome::AlreadyInCart
            } else {
                model.push(id.clone());
                AddOutcome::Added
            };
            ensure!(
                outcome == expected,
                "step {step}: adding {id} gave {outcome:?}, expected {expected:?}"
            );
        } else {
            let removed = cart.remove(&id)?;
            let expected = model.contains(&id);
            model.retain(|known| known != &id);
            ensure!(
                removed == expected,
                "step {step}: removing {id} reported {removed}"
            );
        }

        let stored: Vec<String> = cart.entries().into_iter().map(|entry| entry.id).collect();
        ensure!(
            stored == model,
            "step {step}: stored cart {stored:?} diverged from {model:?}"
        );
    }
    Ok(())
}

fn corrupt_payload(
    catalog: &ProjectCatalog,
    rng: &mut ChaCha20Rng,
) -> Result<(String, Option<Vec<String>>)> {
    match rng.gen_range(0..3) {
        0 => {
            let len = rng.gen_range(0..48);
            let noise: String = (0..len)
                .map(|_| char::from(rng.gen_range(b' '..=b'~')))
                .collect();
            Ok((noise, None))
        }
        1 => Ok((json!({ "id": "1", "quantity": 1 }).to_string(), Some(Vec::new()))),
        _ => {
            let mut items = Vec::new();
            let mut expected = Vec::new();
            for _ in 0..rng.gen_range(1..12) {
                if rng.gen_bool(0.6) {
                    let project = catalog.projects.choose(rng).context("catalog is empty")?;
                    if !expected.contains(&project.id) {
                        expected.push(project.id.clone());
                    }
                    items.push(serde_json::to_value(CartEntry::snapshot(project))?);
                } else {
                    let junk = [json!(42), json!("cart"), json!({ "id": 7 }), Value::Null];
                    items.push(junk.choose(rng).cloned().unwrap_or(Value::Null));
                }
            }
            Ok((Value::Array(items).to_string(), Some(expected)))
        }
    }
}

fn cart_corrupt(assets: &TesterAssets, rng: &mut ChaCha20Rng) -> Result<()> {
    let catalog = &assets.seeds.catalog;
    let store = MemoryStore::new();
    let (raw, expected) = corrupt_payload(catalog, rng)?;
    store.insert_raw(CART_KEY, &raw);

    let cart = CartStore::new(&store);
    let ids: Vec<String> = cart.entries().into_iter().map(|entry| entry.id).collect();
    let unique: HashSet<&String> = ids.iter().collect();
    ensure!(
        unique.len() == ids.len(),
        "decoded duplicate ids from {raw:?}"
    );
    if let Some(expected) = expected {
        ensure!(
            ids == expected,
            "decoded {ids:?} from {raw:?}, expected {expected:?}"
        );
    }

    let first = catalog.projects.first().context("catalog is empty")?;
    cart.add(catalog, &first.id)?;
    let count = cart
        .entries()
        .iter()
        .filter(|entry| entry.id == first.id)
        .count();
    ensure!(count == 1, "project {} stored {count} times", first.id);
    Ok(())
}

fn review_terminal(assets: &TesterAssets, rng: &mut ChaCha20Rng) -> Result<()> {
    let mut queue = ReviewQueue::new(assets.seeds.activities.activities.clone());
    let mut ledger = CreditLedger::default();
    let on = NaiveDate::from_ymd_opt(2024, 2, 1).context("review date")?;
    let ids: Vec<String> = queue.items().iter().map(|a| a.id.clone()).collect();
    let mut resolved: HashMap<String, ActivityStatus> = HashMap::new();
    let mut expected_credits = 0;

    ensure!(
        matches!(
            queue.reject("not-an-activity", on),
            Err(ReviewError::NotFound { .. })
        ),
        "unknown activity accepted a decision"
    );

    for _ in 0..REVIEW_DECISIONS {
        let id = ids.choose(rng).context("no activities to review")?;
        let accept = rng.gen_bool(0.5);
        let outcome = if accept {
            queue.verify(id, on, &mut ledger).map(|_| ())
        } else {
            queue.reject(id, on)
        };

        if resolved.contains_key(id) {
            ensure!(
                matches!(outcome, Err(ReviewError::AlreadyResolved { .. })),
                "resolved activity {id} took a second decision"
            );
        } else {
            outcome.map_err(|err| anyhow!("first decision on {id} failed: {err}"))?;
            let activity = queue.get(id).context("decided activity vanished")?;
            let wanted = if accept {
                expected_credits += activity.credits;
                ActivityStatus::Verified
            } else {
                ActivityStatus::Unverified
            };
            ensure!(
                activity.status == wanted,
                "activity {id} is {:?}, expected {wanted:?}",
                activity.status
            );
            resolved.insert(id.clone(), activity.status);
        }

        for (id, status) in &resolved {
            ensure!(
                queue.get(id).map(|a| a.status) == Some(*status),
                "resolved activity {id} changed state"
            );
        }
        let awarded: u32 = ledger.awards().iter().map(|award| award.credits).sum();
        ensure!(
            awarded == expected_credits,
            "ledger holds {awarded} credits, expected {expected_credits}"
        );
        ensure!(
            queue.pending_count() == ids.len() - resolved.len(),
            "pending count drifted"
        );
    }
    Ok(())
}
