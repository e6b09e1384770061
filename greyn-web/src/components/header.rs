use crate::components::nav_link::NavLink;
use crate::i18n::{locales, set_lang, t, tr_count};
use crate::router::Route;
use greyn_core::Role;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current_lang: String,
    pub on_lang_change: Callback<String>,
    pub high_contrast: bool,
    pub on_toggle_hc: Callback<bool>,
    pub cart_count: usize,
    pub role: Option<Role>,
    pub on_role_change: Callback<Option<Role>>,
    #[prop_or_default]
    pub active: Option<Route>,
    pub on_navigate: Callback<Route>,
}

fn select_value(e: &web_sys::Event) -> Option<String> {
    e.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
        .map(|sel| sel.value())
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_lang = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(lang) = select_value(&e) {
                set_lang(&lang);
                cb.emit(lang);
            }
        })
    };
    let on_role = {
        let cb = p.on_role_change.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(value) = select_value(&e) {
                cb.emit(value.parse::<Role>().ok());
            }
        })
    };
    let toggle_hc = {
        let cb = p.on_toggle_hc.clone();
        let next = !p.high_contrast;
        Callback::from(move |_| cb.emit(next))
    };

    let link = |route: Route, key: &str| {
        let active = p.active.as_ref().is_some_and(|current| {
            current == &route
                || (route == Route::Corporate && current.corporate_section().is_some())
        });
        html! {
            <li>
                <NavLink to={route} on_navigate={p.on_navigate.clone()} {active}>{ t(key) }</NavLink>
            </li>
        }
    };
    let current_role = p.role.map(Role::as_str).unwrap_or_default();

    html! {
        <header role="banner" class="navbar bg-base-100 shadow-sm gap-2 flex-wrap">
            <a href="#main" class="sr-only">{ t("ui.skip_to_content") }</a>
            <div class="flex-1">
                <NavLink to={Route::Home} on_navigate={p.on_navigate.clone()} class={classes!("btn", "btn-ghost", "text-xl", "text-success")}>
                    { t("ui.brand") }
                </NavLink>
            </div>
            <nav aria-label={t("nav.primary")}>
                <ul class="menu menu-horizontal px-1">
                    { link(Route::Marketplace, "nav.marketplace") }
                    { link(Route::Dashboard, "nav.dashboard") }
                    { link(Route::Corporate, "nav.corporate") }
                    { link(Route::Admin, "nav.admin") }
                </ul>
            </nav>
            <div class="flex items-center gap-2">
                <NavLink to={Route::Cart} on_navigate={p.on_navigate.clone()} active={p.active == Some(Route::Cart)} class={classes!("btn", "btn-ghost", "btn-sm")}>
                    { t("nav.cart") }
                    <span class="badge badge-success badge-sm" aria-label={tr_count("nav.cart_badge", p.cart_count)}>
                        { p.cart_count }
                    </span>
                </NavLink>
                <label for="role-select" class="sr-only">{ t("nav.role") }</label>
                <select id="role-select" class="select select-bordered select-sm" onchange={on_role} aria-label={t("nav.role")}>
                    <option value="" selected={p.role.is_none()}>{ t("nav.no_role") }</option>
                    { for Role::ALL.iter().map(|role| html! {
                        <option value={role.as_str()} selected={current_role == role.as_str()}>
                            { t(&format!("role.{}", role.as_str())) }
                        </option>
                    }) }
                </select>
                <label for="lang-select" class="sr-only">{ t("nav.language") }</label>
                <select id="lang-select" class="select select-bordered select-sm" onchange={on_lang} aria-label={t("nav.language")}>
                    { for locales().iter().map(|meta| html! {
                        <option value={meta.code} selected={p.current_lang == meta.code}>{ meta.name }</option>
                    }) }
                </select>
                <button
                    type="button"
                    class="btn btn-outline btn-sm"
                    aria-pressed={p.high_contrast.to_string()}
                    onclick={toggle_hc}
                >
                    { t("nav.high_contrast") }
                </button>
            </div>
        </header>
    }
}
