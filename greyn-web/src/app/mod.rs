#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod bootstrap;
pub mod state;
pub mod view;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app_state = state::use_app_state();
    bootstrap::use_bootstrap(&app_state);

    let navigator = use_navigator();
    let route = use_route::<Route>();

    {
        let navigator = navigator.clone();
        use_effect_with(route.clone(), move |route| {
            if let (Some(nav), Some(target)) =
                (navigator, route.as_ref().and_then(Route::redirect))
            {
                nav.replace(&target);
            }
            || {}
        });
    }

    view::render_app(&app_state, route.as_ref(), navigator)
}

#[cfg(test)]
mod tests {
    use super::state::use_app_state_seeded;
    use super::view::render_app;
    use crate::engine::create_web_engine;
    use crate::router::Route;
    use crate::storage::BrowserStore;
    use futures::executor::block_on;
    use greyn_core::{Role, save_role};
    use std::rc::Rc;
    use yew::LocalServerRenderer;
    use yew::prelude::*;

    #[derive(Properties, PartialEq)]
    struct ShellProps {
        route: Option<Route>,
        seeded: bool,
    }

    #[function_component(Shell)]
    fn shell(props: &ShellProps) -> Html {
        let seeds = props
            .seeded
            .then(|| Rc::new(create_web_engine().seeds().expect("seeds load")));
        let state = use_app_state_seeded(seeds);
        render_app(&state, props.route.as_ref(), None)
    }

    fn render(route: Option<Route>, seeded: bool) -> String {
        crate::i18n::set_lang("en");
        block_on(LocalServerRenderer::<Shell>::with_props(ShellProps { route, seeded }).render())
    }

    #[test]
    fn unknown_route_renders_not_found() {
        BrowserStore::reset_host();
        let html = render(None, true);
        assert!(html.contains("data-testid=\"not-found\""));
        assert!(html.contains("id=\"status-live\""));
    }

    #[test]
    fn corporate_area_is_gated_by_role() {
        BrowserStore::reset_host();
        let html = render(Some(Route::Emissions), true);
        assert!(html.contains("data-testid=\"access-notice\""));
        assert!(html.contains("data-required-role=\"corporate\""));

        save_role(&BrowserStore, Some(Role::Corporate)).unwrap();
        let html = render(Some(Route::Emissions), true);
        assert!(html.contains("Emissions Tracking"));
        assert!(html.contains("aria-current=\"page\""));
    }

    #[test]
    fn admin_role_does_not_open_corporate_screens() {
        BrowserStore::reset_host();
        save_role(&BrowserStore, Some(Role::Admin)).unwrap();
        assert!(render(Some(Route::Admin), true).contains("data-testid=\"admin\""));
        assert!(render(Some(Route::Campaigns), true).contains("data-testid=\"access-notice\""));
    }

    #[test]
    fn corporate_root_shows_dashboard() {
        BrowserStore::reset_host();
        save_role(&BrowserStore, Some(Role::Corporate)).unwrap();
        let html = render(Some(Route::Corporate), true);
        assert!(html.contains("data-testid=\"kpi-grid\""));
    }

    #[test]
    fn public_pages_wait_for_seeds() {
        BrowserStore::reset_host();
        let html = render(Some(Route::Marketplace), false);
        assert!(html.contains("aria-busy=\"true\""));
        let html = render(Some(Route::Cart), false);
        assert!(html.contains("data-testid=\"cart-empty\""));
    }
}
