mod handlers;
mod screens;

pub use handlers::AppHandlers;

use crate::app::state::AppState;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::Navigator;

pub fn render_app(state: &AppState, route: Option<&Route>, navigator: Option<Navigator>) -> Html {
    let handlers = AppHandlers::new(state, navigator);
    let main_view = screens::render_main_view(state, &handlers, route);

    html! {
        <>
            <a href="#main" class="sr-only focus:not-sr-only">{ crate::i18n::t("ui.skip_to_content") }</a>
            <crate::components::header::Header
                current_lang={(*state.current_language).clone()}
                on_lang_change={handlers.lang_change.clone()}
                high_contrast={*state.high_contrast}
                on_toggle_hc={handlers.toggle_hc.clone()}
                cart_count={*state.cart_count}
                role={*state.role}
                on_role_change={handlers.role_change.clone()}
                active={route.cloned()}
                on_navigate={handlers.navigate.clone()}
            />
            <main id="main" role="main" class="container mx-auto px-4 py-6">
                <style>{ crate::a11y::visible_focus_css() }</style>
                <div id="status-live" class="sr-only" role="status" aria-live="polite"></div>
                { main_view }
            </main>
            <crate::components::footer::Footer />
        </>
    }
}
