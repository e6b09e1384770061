#[cfg(target_arch = "wasm32")]
use greyn_web::dom;
use greyn_web::engine::{DataLoader, KvStore, Role, WebDataLoader, load_role, save_role};
use greyn_web::i18n;
use greyn_web::router::Route;
use greyn_web::storage::BrowserStore;
use serde_json::Value;
use std::collections::BTreeMap;
use yew_router::Routable;

#[cfg(target_arch = "wasm32")]
#[test]
fn dom_helpers_handle_missing_window() {
    assert!(dom::window().is_some());
    assert!(dom::document().is_some());
}

#[test]
fn i18n_bundle_switches_and_formats() {
    i18n::set_lang("en");
    assert_eq!(i18n::current_lang(), "en");

    let mut vars = BTreeMap::new();
    vars.insert("name", "Mangrove Restoration Program");
    let added = i18n::tr("marketplace.announce_added", Some(&vars));
    assert_eq!(added, "Mangrove Restoration Program added to cart");
    assert_eq!(i18n::t("missing.key"), "missing.key");

    assert_eq!(i18n::fmt_number(125_000.0), "125,000");
    assert_eq!(i18n::fmt_pct(14.46), "14.5");
    assert_eq!(i18n::fmt_currency(5_500.0), "$5,500.00");
    assert_eq!(i18n::fmt_currency(-0.99), "-$0.99");
}

#[test]
fn i18n_switches_to_spanish_and_ignores_unknown_codes() {
    i18n::set_lang("es");
    assert_eq!(i18n::current_lang(), "es");
    assert_ne!(i18n::t("marketplace.title"), "Carbon Credit Marketplace");
    i18n::set_lang("xx");
    assert_eq!(i18n::current_lang(), "es");
    i18n::set_lang("en");
}

#[test]
fn i18n_locales_metadata_is_accessible() {
    let metas = i18n::locales();
    assert!(metas.iter().any(|m| m.code == "en"));
    assert!(metas.iter().any(|m| m.code == "es"));
}

#[test]
fn routes_resolve_to_their_paths() {
    assert_eq!(Route::Marketplace.to_path(), "/carbon/marketplace");
    assert_eq!(Route::Report { id: "4".into() }.to_path(), "/corporate/reports/4");
    assert_eq!(
        Route::recognize("/corporate/reports/4"),
        Some(Route::Report { id: "4".into() })
    );
    assert_eq!(Route::Corporate.redirect(), Some(Route::CorporateDashboard));
}

#[test]
fn web_data_loader_flags_unknown_seed() {
    let loader = WebDataLoader;
    let err = loader
        .load_seed::<Value>("missing-seed")
        .expect_err("missing seed should error");
    assert!(format!("{err}").contains("unknown seed"));
}

#[test]
fn role_flag_persists_through_browser_store() {
    BrowserStore::reset_host();
    assert_eq!(load_role(&BrowserStore), None);
    save_role(&BrowserStore, Some(Role::Investor)).unwrap();
    assert_eq!(load_role(&BrowserStore), Some(Role::Investor));

    BrowserStore.set_item(greyn_web::engine::ROLE_KEY, "superuser").unwrap();
    assert_eq!(load_role(&BrowserStore), None);
}
