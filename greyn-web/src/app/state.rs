use crate::engine::create_web_engine;
use crate::storage::BrowserStore;
use greyn_core::{CartStore, Role, SeedBundle};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub seeds: UseStateHandle<Option<Rc<SeedBundle>>>,
    pub load_error: UseStateHandle<Option<String>>,
    pub boot_ready: UseStateHandle<bool>,
    pub high_contrast: UseStateHandle<bool>,
    pub current_language: UseStateHandle<String>,
    pub role: UseStateHandle<Option<Role>>,
    pub cart_count: UseStateHandle<usize>,
}

#[hook]
pub fn use_app_state() -> AppState {
    use_app_state_seeded(None)
}

/// App state starting from already-loaded seeds, as render tests need.
#[hook]
pub fn use_app_state_seeded(seeds: Option<Rc<SeedBundle>>) -> AppState {
    let ready = seeds.is_some();
    AppState {
        seeds: use_state(move || seeds),
        load_error: use_state(|| None::<String>),
        boot_ready: use_state(move || ready),
        high_contrast: use_state(crate::a11y::high_contrast_enabled),
        current_language: use_state(crate::i18n::current_lang),
        role: use_state(|| create_web_engine().role()),
        cart_count: use_state(|| CartStore::new(BrowserStore).load_membership().len()),
    }
}

impl AppState {
    #[must_use]
    pub fn data_ready(&self) -> bool {
        self.seeds.is_some()
    }
}
