use crate::components::daisy_ui::foundation as f;

#[derive(Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: f::AttrValue,
    pub value: f::AttrValue,
}

impl SelectOption {
    /// Option whose label is its value, as facet lists are rendered.
    #[must_use]
    pub fn plain(value: impl Into<f::AttrValue>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct SelectProps {
    pub options: Vec<SelectOption>,
    #[prop_or_default]
    pub id: Option<f::AttrValue>,
    #[prop_or_default]
    pub value: Option<f::AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub on_change: f::Callback<String>,
}

#[f::function_component(Select)]
pub fn select(props: &SelectProps) -> f::Html {
    let current = props.value.clone().unwrap_or_default();
    f::html! {
        <select
            id={f::attr_value(&props.id)}
            class={f::class_list(&["select", "select-bordered", "w-full"], &props.class)}
            aria-label={f::attr_value(&props.aria_label)}
            onchange={f::value_handler::<f::Event>(&props.on_change)}
        >
            { for props.options.iter().map(|opt| f::html! {
                <option value={opt.value.clone()} selected={opt.value == current}>{ opt.label.clone() }</option>
            })}
        </select>
    }
}
