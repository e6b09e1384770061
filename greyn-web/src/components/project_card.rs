use crate::components::daisy_ui::{Badge, Button, DaisyColor};
use crate::i18n::{fmt_currency, fmt_number, t};
use greyn_core::{Project, numbers::u64_to_f64};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProjectCardProps {
    pub project: Project,
    pub in_cart: bool,
    pub on_add: Callback<String>,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;
    let onclick = {
        let cb = props.on_add.clone();
        let id = project.id.clone();
        Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
    };
    let (label, variant) = if props.in_cart {
        (t("marketplace.added"), DaisyColor::Neutral)
    } else {
        (t("marketplace.add"), DaisyColor::Success)
    };
    html! {
        <article class="card bg-base-100 shadow" data-project-id={project.id.clone()}>
            <div class="card-body gap-3">
                <div class="flex items-start justify-between gap-2">
                    <div>
                        <h3 class="card-title text-lg">{ project.project_name.clone() }</h3>
                        <p class="text-sm text-base-content/70">{ project.ngo_name.clone() }</p>
                        <p class="text-sm text-base-content/60">{ format!("📍 {}", project.location) }</p>
                    </div>
                    { if project.is_verified {
                        html! { <Badge variant={DaisyColor::Success} label={t("marketplace.verified")} /> }
                    } else {
                        Html::default()
                    } }
                </div>
                <Badge outline=true label={project.impact_type.clone()} />
                <dl class="grid grid-cols-2 gap-2 text-sm">
                    <div>
                        <dt class="text-base-content/60">{ t("marketplace.price_per_tonne") }</dt>
                        <dd class="text-xl font-bold text-success">{ fmt_currency(project.price_per_tonne) }</dd>
                    </div>
                    <div>
                        <dt class="text-base-content/60">{ t("marketplace.available_credits") }</dt>
                        <dd class="text-xl font-bold">{ fmt_number(u64_to_f64(project.available_credits)) }</dd>
                    </div>
                </dl>
                <div class="card-actions">
                    <Button class={classes!("w-full")} {variant} disabled={props.in_cart} aria_label={format!("{label}: {}", project.project_name)} {onclick}>
                        { label.clone() }
                    </Button>
                </div>
            </div>
        </article>
    }
}
