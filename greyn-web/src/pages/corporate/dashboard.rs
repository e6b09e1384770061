use super::page_header;
use crate::components::chart_placeholder::ChartPlaceholder;
use crate::components::kpi_card::KpiCard;
use crate::components::nav_link::NavLink;
use crate::components::daisy_ui::Card;
use crate::i18n::t;
use crate::router::Route;
use greyn_core::SeedBundle;
use greyn_core::corporate::CHART_PANELS;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CorporateDashboardProps {
    pub seeds: Rc<SeedBundle>,
    pub on_navigate: Callback<Route>,
}

const QUICK_LINKS: [(Route, &str); 3] = [
    (Route::Emissions, "dashboard.quick.emissions"),
    (Route::Campaigns, "dashboard.quick.campaigns"),
    (Route::Reports, "dashboard.quick.reports"),
];

#[function_component(CorporateDashboard)]
pub fn corporate_dashboard(props: &CorporateDashboardProps) -> Html {
    html! {
        <>
            { page_header("dashboard.title", "dashboard.subtitle") }
            <div class="grid gap-4 sm:grid-cols-2 xl:grid-cols-4" data-testid="kpi-grid">
                { for props.seeds.kpis.kpis.iter().map(|kpi| html! { <KpiCard kpi={kpi.clone()} /> }) }
            </div>
            <div class="grid gap-4 lg:grid-cols-2">
                { for CHART_PANELS.iter().map(|key| html! { <ChartPlaceholder title_key={*key} /> }) }
            </div>
            <Card title={t("dashboard.quick.title")}>
                <div class="flex flex-wrap gap-2">
                    { for QUICK_LINKS.iter().map(|(route, key)| html! {
                        <NavLink to={route.clone()} on_navigate={props.on_navigate.clone()} class={classes!("btn", "btn-outline", "btn-sm")}>
                            { t(key) }
                        </NavLink>
                    }) }
                </div>
            </Card>
        </>
    }
}
