use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::i18n::t;
use crate::pages::access::AccessNotice;
use crate::pages::admin::AdminPage;
use crate::pages::cart::CartPage;
use crate::pages::corporate::{
    CampaignsPage, CorporateDashboard, CorporateLayout, EmissionsPage, EmployeesPage, ReportsPage,
    VolunteersPage,
};
use crate::pages::home::HomePage;
use crate::pages::investor_dashboard::InvestorDashboard;
use crate::pages::marketplace::MarketplacePage;
use crate::pages::not_found::NotFound;
use crate::router::Route;
use greyn_core::SeedBundle;
use std::rc::Rc;
use yew::prelude::*;

pub fn render_main_view(state: &AppState, handlers: &AppHandlers, route: Option<&Route>) -> Html {
    let Some(route) = route.filter(|r| **r != Route::NotFound) else {
        return html! { <NotFound on_navigate={handlers.navigate.clone()} /> };
    };
    let area = route.area();
    if !area.admits(*state.role) {
        return html! { <AccessNotice {area} on_role_change={handlers.role_change.clone()} /> };
    }
    if *route == Route::Cart {
        return html! {
            <CartPage on_cart_change={handlers.cart_change.clone()} on_navigate={handlers.navigate.clone()} />
        };
    }
    let Some(seeds) = (*state.seeds).clone() else {
        return render_loading(state);
    };
    if route.corporate_section().is_some() {
        return render_corporate(route, seeds, handlers);
    }
    let on_navigate = handlers.navigate.clone();
    match route {
        Route::Marketplace => html! {
            <MarketplacePage {seeds} on_cart_change={handlers.cart_change.clone()} {on_navigate} />
        },
        Route::Admin => html! { <AdminPage {seeds} {on_navigate} /> },
        Route::Dashboard => html! { <InvestorDashboard {seeds} /> },
        _ => html! { <HomePage project_count={seeds.catalog.len()} {on_navigate} /> },
    }
}

fn render_loading(state: &AppState) -> Html {
    match (*state.load_error).as_ref() {
        Some(reason) => html! {
            <div role="alert" class="alert alert-error" data-testid="load-error">
                <span>{ format!("{} {reason}", t("ui.load_failed")) }</span>
            </div>
        },
        None => html! {
            <div class="flex justify-center py-16" aria-busy="true">
                <span class="loading loading-spinner loading-lg" aria-hidden="true"></span>
                <span class="sr-only">{ t("ui.loading") }</span>
            </div>
        },
    }
}

fn render_corporate(route: &Route, seeds: Rc<SeedBundle>, handlers: &AppHandlers) -> Html {
    let on_navigate = handlers.navigate.clone();
    let screen = match route {
        Route::Emissions => html! { <EmissionsPage {seeds} /> },
        Route::Campaigns => html! { <CampaignsPage {seeds} /> },
        Route::Employees => html! { <EmployeesPage {seeds} /> },
        Route::Reports => html! { <ReportsPage {seeds} on_navigate={on_navigate.clone()} /> },
        Route::Report { id } => html! {
            <ReportsPage {seeds} selected={Some(id.clone())} on_navigate={on_navigate.clone()} />
        },
        Route::Volunteers => html! { <VolunteersPage {seeds} /> },
        _ => html! { <CorporateDashboard {seeds} on_navigate={on_navigate.clone()} /> },
    };
    html! {
        <CorporateLayout active={route.clone()} {on_navigate}>
            { screen }
        </CorporateLayout>
    }
}
