//! Landing page.
use crate::components::nav_link::NavLink;
use crate::i18n::{t, tr_count};
use crate::router::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HomePageProps {
    pub project_count: usize,
    pub on_navigate: Callback<Route>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let link_class = |tone: &'static str| classes!("btn", tone);
    html! {
        <section class="hero min-h-[60vh] bg-base-200 rounded-box" data-testid="home">
            <div class="hero-content text-center flex-col max-w-2xl">
                <h1 class="text-4xl lg:text-5xl font-bold">{ t("home.title") }</h1>
                <p class="text-lg text-base-content/70">{ t("home.tagline") }</p>
                <p class="badge badge-success badge-outline">{ tr_count("home.projects", props.project_count) }</p>
                <div class="flex flex-wrap justify-center gap-3">
                    <NavLink to={Route::Marketplace} on_navigate={props.on_navigate.clone()} class={link_class("btn-success")}>
                        { t("home.cta_marketplace") }
                    </NavLink>
                    <NavLink to={Route::CorporateDashboard} on_navigate={props.on_navigate.clone()} class={link_class("btn-outline")}>
                        { t("home.cta_corporate") }
                    </NavLink>
                    <NavLink to={Route::Dashboard} on_navigate={props.on_navigate.clone()} class={link_class("btn-ghost")}>
                        { t("home.cta_dashboard") }
                    </NavLink>
                </div>
            </div>
        </section>
    }
}
