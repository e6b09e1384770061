use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct ProgressProps {
    /// Bar fill in percent; clamped to 0..=100.
    pub pct: f64,
    #[prop_or_default]
    pub label: Option<f::AttrValue>,
    #[prop_or_default]
    pub variant: Option<f::DaisyColor>,
    #[prop_or_default]
    pub class: f::Classes,
}

#[f::function_component(Progress)]
pub fn progress(props: &ProgressProps) -> f::Html {
    let mut class = f::class_list(&["progress", "w-full"], &props.class);
    if let Some(variant) = props.variant {
        class.push(variant.class("progress"));
    }
    let value = props.pct.clamp(0.0, 100.0);
    f::html! {
        <div class="flex items-center gap-2">
            <progress class={class} value={format!("{value:.1}")} max="100" aria-valuenow={format!("{value:.0}")} aria-valuemax="100"></progress>
            { props.label.as_ref().map_or_else(
                || f::html!{ <span class="text-sm text-base-content/70">{ format!("{value:.0}%") }</span> },
                |l| f::html!{ <span class="text-sm">{ l.clone() }</span> },
            ) }
        </div>
    }
}
