use crate::components::nav_link::NavLink;
use crate::i18n::t;
use crate::router::Route;
use yew::prelude::*;

/// Sidebar sections in display order.
pub const SECTIONS: [(Route, &str); 6] = [
    (Route::CorporateDashboard, "corporate.nav.dashboard"),
    (Route::Emissions, "corporate.nav.emissions"),
    (Route::Campaigns, "corporate.nav.campaigns"),
    (Route::Employees, "corporate.nav.employees"),
    (Route::Reports, "corporate.nav.reports"),
    (Route::Volunteers, "corporate.nav.volunteers"),
];

#[derive(Properties, PartialEq, Clone)]
pub struct CorporateSidebarProps {
    pub active: Route,
    pub on_navigate: Callback<Route>,
}

#[function_component(CorporateSidebar)]
pub fn corporate_sidebar(props: &CorporateSidebarProps) -> Html {
    let section = props.active.corporate_section();
    html! {
        <aside class="w-full lg:w-56 shrink-0">
            <nav aria-label={t("corporate.nav.label")}>
                <h2 class="menu-title">{ t("corporate.title") }</h2>
                <ul class="menu bg-base-100 rounded-box shadow">
                    { for SECTIONS.iter().map(|(route, key)| html! {
                        <li>
                            <NavLink
                                to={route.clone()}
                                on_navigate={props.on_navigate.clone()}
                                active={section.as_ref() == Some(route)}
                            >
                                { t(key) }
                            </NavLink>
                        </li>
                    }) }
                </ul>
            </nav>
        </aside>
    }
}
