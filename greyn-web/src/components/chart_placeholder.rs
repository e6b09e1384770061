use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ChartPlaceholderProps {
    /// Translation key of the chart title.
    pub title_key: AttrValue,
}

/// Empty chart frame shown until the reporting service supplies series data.
#[function_component(ChartPlaceholder)]
pub fn chart_placeholder(props: &ChartPlaceholderProps) -> Html {
    html! {
        <figure class="card bg-base-100 shadow" data-chart={props.title_key.clone()}>
            <div class="card-body">
                <figcaption class="card-title text-base">{ t(&props.title_key) }</figcaption>
                <div class="h-48 rounded-box border-2 border-dashed border-base-300 flex items-center justify-center text-sm text-base-content/50">
                    { t("dashboard.chart.placeholder") }
                </div>
            </div>
        </figure>
    }
}
