use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct InputProps {
    #[prop_or_default]
    pub id: Option<f::AttrValue>,
    #[prop_or_default]
    pub value: f::AttrValue,
    #[prop_or_default]
    pub placeholder: Option<f::AttrValue>,
    /// `text` unless set; numeric inputs never go below zero.
    #[prop_or_default]
    pub input_type: Option<f::AttrValue>,
    #[prop_or_default]
    pub name: Option<f::AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub oninput: f::Callback<String>,
}

#[f::function_component(Input)]
pub fn input(props: &InputProps) -> f::Html {
    let input_type = props.input_type.clone().unwrap_or_else(|| "text".into());
    let numeric = input_type == "number";
    let (min, inputmode) = if numeric {
        (Some("0"), Some("decimal"))
    } else {
        (None, None)
    };
    f::html! {
        <input
            id={f::attr_value(&props.id)}
            class={f::class_list(&["input", "input-bordered", "w-full"], &props.class)}
            type={input_type}
            name={f::attr_value(&props.name)}
            min={min}
            inputmode={inputmode}
            value={props.value.clone()}
            placeholder={f::attr_value(&props.placeholder)}
            aria-label={f::attr_value(&props.aria_label)}
            oninput={f::value_handler::<f::InputEvent>(&props.oninput)}
        />
    }
}
