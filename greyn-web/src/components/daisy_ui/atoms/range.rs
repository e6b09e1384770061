use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct RangeProps {
    pub value: f64,
    #[prop_or(0.0)]
    pub min: f64,
    #[prop_or(100.0)]
    pub max: f64,
    #[prop_or(1.0)]
    pub step: f64,
    #[prop_or_default]
    pub id: Option<f::AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<f::AttrValue>,
    /// Spoken value, e.g. a formatted price.
    #[prop_or_default]
    pub value_text: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub on_change: f::Callback<f64>,
}

/// Slider emitting parsed values; unparsable input is dropped.
#[f::function_component(Range)]
pub fn range(props: &RangeProps) -> f::Html {
    let oninput = {
        let on_change = props.on_change.clone();
        f::Callback::from(move |e: f::InputEvent| {
            if let Some(value) = f::event_value(&e).and_then(|raw| raw.parse::<f64>().ok()) {
                on_change.emit(value);
            }
        })
    };
    f::html! {
        <input
            id={f::attr_value(&props.id)}
            class={f::class_list(&["range", "range-success", "range-sm"], &props.class)}
            type="range"
            min={props.min.to_string()}
            max={props.max.to_string()}
            step={props.step.to_string()}
            value={props.value.to_string()}
            aria-label={f::attr_value(&props.aria_label)}
            aria-valuenow={props.value.to_string()}
            aria-valuetext={f::attr_value(&props.value_text)}
            oninput={oninput}
        />
    }
}
