use crate::components::nav_link::NavLink;
use crate::router::Route;
use yew::prelude::*;

/// Shown when no route matches the requested path.
#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_navigate: Callback<Route>,
}

#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    html! {
        <section class="hero min-h-[50vh]" aria-live="assertive" data-testid="not-found">
            <div class="hero-content text-center flex-col">
                <h1 class="text-4xl font-bold">{ crate::i18n::t("not_found.title") }</h1>
                <p>{ crate::i18n::t("not_found.message") }</p>
                <NavLink to={Route::Home} on_navigate={props.on_navigate.clone()} class={classes!("btn", "btn-success")}>
                    { crate::i18n::t("not_found.back") }
                </NavLink>
            </div>
        </section>
    }
}
