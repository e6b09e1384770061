mod common;

use greyn_core::{AddOutcome, CART_KEY, CartStore, MemoryStore};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

#[test]
fn repeated_adds_keep_one_entry_per_id() {
    let catalog = common::seeds().catalog;
    let store = MemoryStore::new();
    let cart = CartStore::new(store.clone());
    let mut rng = ChaCha20Rng::seed_from_u64(0x00CA_0B0B);
    for _ in 0..100 {
        let id = rng.gen_range(1..=10).to_string();
        let outcome = cart.add(&catalog, &id).unwrap();
        if catalog.find(&id).is_none() {
            assert_eq!(outcome, AddOutcome::UnknownItem);
        }
    }
    let entries = cart.entries();
    let mut ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
    let before = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), before);
    assert!(entries.iter().all(|e| e.quantity == 1));
    assert!(entries.len() <= catalog.len());
}

#[test]
fn corrupt_cart_reads_as_empty() {
    let store = MemoryStore::new();
    for raw in ["{oops", "42", "{\"id\":\"1\"}", "[1, 2, 3]", "\"carbon\""] {
        store.insert_raw(CART_KEY, raw);
        let cart = CartStore::new(store.clone());
        assert!(cart.load_membership().is_empty(), "{raw} should be empty");
    }
}

#[test]
fn add_after_corruption_replaces_the_value() {
    let catalog = common::seeds().catalog;
    let store = MemoryStore::new();
    store.insert_raw(CART_KEY, "garbage");
    let cart = CartStore::new(store.clone());
    assert_eq!(cart.add(&catalog, "3").unwrap(), AddOutcome::Added);
    let membership = cart.load_membership();
    assert_eq!(membership.len(), 1);
    assert!(membership.contains("3"));
}

#[test]
fn last_write_wins_between_handles() {
    let catalog = common::seeds().catalog;
    let store = MemoryStore::new();
    let tab_a = CartStore::new(store.clone());
    let tab_b = CartStore::new(store);
    tab_a.add(&catalog, "1").unwrap();
    tab_b.add(&catalog, "2").unwrap();
    let ids: Vec<String> = tab_a.entries().into_iter().map(|e| e.id).collect();
    assert_eq!(ids, vec!["1", "2"]);
    tab_b.clear().unwrap();
    assert!(tab_a.load_membership().is_empty());
}
