//! Corporate ESG workspace screens. All share the section sidebar.
pub mod campaigns;
pub mod dashboard;
pub mod emissions;
pub mod employees;
pub mod reports;
pub mod volunteers;

use crate::components::corporate_sidebar::CorporateSidebar;
use crate::router::Route;
use yew::prelude::*;

pub use campaigns::CampaignsPage;
pub use dashboard::CorporateDashboard;
pub use emissions::EmissionsPage;
pub use employees::EmployeesPage;
pub use reports::ReportsPage;
pub use volunteers::VolunteersPage;

#[derive(Properties, PartialEq, Clone)]
pub struct CorporateLayoutProps {
    pub active: Route,
    pub on_navigate: Callback<Route>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(CorporateLayout)]
pub fn corporate_layout(props: &CorporateLayoutProps) -> Html {
    html! {
        <div class="flex flex-col gap-6 lg:flex-row" data-testid="corporate">
            <CorporateSidebar active={props.active.clone()} on_navigate={props.on_navigate.clone()} />
            <div class="flex-1 min-w-0 space-y-6">
                { for props.children.iter() }
            </div>
        </div>
    }
}

/// Heading block shared by the workspace screens.
pub(crate) fn page_header(title_key: &str, subtitle_key: &str) -> Html {
    html! {
        <header>
            <h1 class="text-3xl font-bold">{ crate::i18n::t(title_key) }</h1>
            <p class="text-base-content/70">{ crate::i18n::t(subtitle_key) }</p>
        </header>
    }
}

/// Form control with a visible label bound by `id`.
pub(crate) fn labelled(id: &'static str, label_key: &str, control: Html) -> Html {
    html! {
        <div class="form-control">
            <label class="label" for={id}>
                <span class="label-text">{ crate::i18n::t(label_key) }</span>
            </label>
            { control }
        </div>
    }
}

/// Success banner for a locally acknowledged form.
pub(crate) fn acknowledgement(ack: &greyn_core::Acknowledgement, on_dismiss: Callback<()>) -> Html {
    use crate::components::daisy_ui::{Alert, DaisyColor};
    let message = match ack.detail.as_deref() {
        Some(detail) => crate::i18n::tr(
            ack.key,
            Some(&std::collections::BTreeMap::from([("detail", detail)])),
        ),
        None => crate::i18n::t(ack.key),
    };
    html! { <Alert variant={DaisyColor::Success} {message} {on_dismiss} /> }
}

/// Callback writing one text field of a form held in state.
pub(crate) fn edit<F: Clone + 'static>(
    state: &UseStateHandle<F>,
    apply: fn(&mut F, String),
) -> Callback<String> {
    let state = state.clone();
    Callback::from(move |value: String| {
        let mut next = (*state).clone();
        apply(&mut next, value);
        state.set(next);
    })
}
