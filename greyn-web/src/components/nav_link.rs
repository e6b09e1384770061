use crate::router::Route;
use yew::prelude::*;
use yew_router::Routable;

/// Full `href` for a route, honouring the deployment base path.
#[must_use]
pub fn route_href(route: &Route) -> String {
    crate::paths::public_href(&route.to_path())
}

#[derive(Properties, PartialEq, Clone)]
pub struct NavLinkProps {
    pub to: Route,
    pub on_navigate: Callback<Route>,
    #[prop_or_default]
    pub active: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Anchor that hands navigation to the app instead of reloading the page.
#[function_component(NavLink)]
pub fn nav_link(props: &NavLinkProps) -> Html {
    let onclick = {
        let cb = props.on_navigate.clone();
        let to = props.to.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            cb.emit(to.clone());
        })
    };
    let class = classes!(props.class.clone(), props.active.then_some("active"));
    let current = props.active.then_some("page");
    html! {
        <a href={route_href(&props.to)} class={class} aria-current={current} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hrefs_use_route_paths() {
        assert_eq!(route_href(&Route::Marketplace), "/carbon/marketplace");
        assert_eq!(
            route_href(&Route::Report { id: "4".into() }),
            "/corporate/reports/4"
        );
    }
}
