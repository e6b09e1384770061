#![cfg(target_arch = "wasm32")]

use greyn_web::a11y;
use greyn_web::dom;
use greyn_web::engine::{CART_KEY, CartStore, KvStore, create_web_engine};
use greyn_web::storage::BrowserStore;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn ensure_status_region() -> web_sys::Element {
    let doc = dom::document();
    if let Some(node) = doc.get_element_by_id("status-live") {
        return node;
    }
    let node = doc.create_element("div").expect("create status region");
    node.set_id("status-live");
    doc.body()
        .expect("document body")
        .append_child(&node)
        .expect("append status region");
    node
}

#[wasm_bindgen_test]
fn status_updates_reach_the_live_region() {
    let region = ensure_status_region();
    a11y::set_status("Peatland Restoration added to cart");
    assert_eq!(
        region.text_content().unwrap_or_default(),
        "Peatland Restoration added to cart"
    );
}

#[wasm_bindgen_test]
fn high_contrast_toggles_root_class_and_persists() {
    let root = dom::document()
        .document_element()
        .expect("document element");
    a11y::set_high_contrast(true);
    assert!(root.class_list().contains("hc"));
    assert!(a11y::high_contrast_enabled());
    a11y::set_high_contrast(false);
    assert!(!root.class_list().contains("hc"));
    assert!(!a11y::high_contrast_enabled());
}

#[wasm_bindgen_test]
fn cart_persists_through_local_storage() {
    let seeds = create_web_engine().seeds().expect("embedded seeds parse");
    let cart = CartStore::new(BrowserStore);
    cart.clear().expect("clear cart");

    cart.add(&seeds.catalog, "3").expect("add project");
    cart.add(&seeds.catalog, "3").expect("repeat add");
    let raw = BrowserStore
        .get_item(CART_KEY)
        .expect("read storage")
        .expect("cart written");
    assert!(raw.starts_with('['));
    assert_eq!(cart.load_membership().len(), 1);

    BrowserStore
        .set_item(CART_KEY, "{corrupt")
        .expect("write corrupt value");
    assert!(cart.load_membership().is_empty());
    cart.clear().expect("clear cart");
}
