use crate::app::state::AppState;
use crate::router::Route;
use greyn_core::Role;
use yew::prelude::*;
use yew_router::prelude::Navigator;

#[derive(Clone)]
pub struct AppHandlers {
    pub lang_change: Callback<String>,
    pub toggle_hc: Callback<bool>,
    pub role_change: Callback<Option<Role>>,
    pub cart_change: Callback<usize>,
    pub navigate: Callback<Route>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState, navigator: Option<Navigator>) -> Self {
        Self {
            lang_change: build_lang_change(state),
            toggle_hc: build_toggle_hc(state),
            role_change: build_role_change(state),
            cart_change: build_cart_change(state),
            navigate: build_navigate(navigator),
        }
    }
}

fn build_lang_change(state: &AppState) -> Callback<String> {
    let current_language = state.current_language.clone();
    Callback::from(move |code: String| {
        crate::i18n::set_lang(&code);
        current_language.set(code);
    })
}

fn build_toggle_hc(state: &AppState) -> Callback<bool> {
    let high_contrast = state.high_contrast.clone();
    Callback::from(move |next: bool| {
        crate::a11y::set_high_contrast(next);
        high_contrast.set(next);
    })
}

fn build_role_change(state: &AppState) -> Callback<Option<Role>> {
    let role = state.role.clone();
    Callback::from(move |next: Option<Role>| {
        if let Err(err) = crate::engine::create_web_engine().set_role(next) {
            crate::dom::console_error(&format!("role not saved: {err}"));
        }
        log::info!("role switched to {}", next.map_or("none", Role::as_str));
        role.set(next);
    })
}

fn build_cart_change(state: &AppState) -> Callback<usize> {
    let cart_count = state.cart_count.clone();
    Callback::from(move |count: usize| cart_count.set(count))
}

fn build_navigate(navigator: Option<Navigator>) -> Callback<Route> {
    Callback::from(move |route: Route| {
        let target = route.redirect().unwrap_or(route);
        match navigator.as_ref() {
            Some(nav) => nav.push(&target),
            None => log::debug!("no navigator; dropping navigation to {target:?}"),
        }
    })
}
