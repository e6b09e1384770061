use crate::i18n::t;
use greyn_core::corporate::{ChangeTrend, KpiSnapshot};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct KpiCardProps {
    pub kpi: KpiSnapshot,
}

const fn trend_class(trend: ChangeTrend) -> &'static str {
    match trend {
        ChangeTrend::Positive => "text-success",
        ChangeTrend::Negative => "text-error",
        ChangeTrend::Neutral => "text-base-content/60",
    }
}

#[function_component(KpiCard)]
pub fn kpi_card(props: &KpiCardProps) -> Html {
    let kpi = &props.kpi;
    html! {
        <div class="stat bg-base-100 rounded-box shadow" data-kpi={kpi.id.clone()}>
            <div class="stat-title">{ t(&format!("dashboard.kpi.{}", kpi.id)) }</div>
            <div class="stat-value text-2xl">
                { kpi.value.clone() }
                { kpi.unit.as_ref().map(|unit| html! { <span class="text-sm font-normal ml-1">{ unit.clone() }</span> }).unwrap_or_default() }
            </div>
            <div class={classes!("stat-desc", trend_class(kpi.trend))}>{ kpi.change.clone() }</div>
        </div>
    }
}
