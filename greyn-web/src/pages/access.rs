//! Notice shown in place of a role-gated screen.
use crate::components::daisy_ui::{Button, DaisyColor};
use crate::i18n::{t, tr};
use greyn_core::{Area, Role};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AccessNoticeProps {
    pub area: Area,
    pub on_role_change: Callback<Option<Role>>,
}

#[function_component(AccessNotice)]
pub fn access_notice(props: &AccessNoticeProps) -> Html {
    let Some(required) = props.area.required_role() else {
        return Html::default();
    };
    let role_name = t(&format!("role.{}", required.as_str()));
    let vars = BTreeMap::from([("role", role_name.as_str())]);
    let choose = {
        let cb = props.on_role_change.clone();
        Callback::from(move |_: MouseEvent| cb.emit(Some(required)))
    };
    let clear = {
        let cb = props.on_role_change.clone();
        Callback::from(move |_: MouseEvent| cb.emit(None))
    };

    html! {
        <section class="card bg-base-100 shadow max-w-xl mx-auto" role="alert" data-testid="access-notice" data-required-role={required.as_str()}>
            <div class="card-body items-center text-center">
                <h1 class="card-title text-2xl">{ format!("🔒 {}", t("access.title")) }</h1>
                <p>{ tr("access.message", Some(&vars)) }</p>
                <div class="card-actions">
                    <Button variant={DaisyColor::Success} onclick={choose}>{ tr("access.choose", Some(&vars)) }</Button>
                    <Button outline=true onclick={clear}>{ t("access.clear") }</Button>
                </div>
            </div>
        </section>
    }
}
