use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct TextareaProps {
    #[prop_or_default]
    pub id: Option<f::AttrValue>,
    #[prop_or_default]
    pub value: f::AttrValue,
    #[prop_or_default]
    pub placeholder: Option<f::AttrValue>,
    #[prop_or(3)]
    pub rows: u32,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub oninput: f::Callback<String>,
}

#[f::function_component(Textarea)]
pub fn textarea(props: &TextareaProps) -> f::Html {
    f::html! {
        <textarea
            id={f::attr_value(&props.id)}
            class={f::class_list(&["textarea", "textarea-bordered", "w-full"], &props.class)}
            placeholder={f::attr_value(&props.placeholder)}
            rows={props.rows.to_string()}
            value={props.value.clone()}
            oninput={f::value_handler::<f::InputEvent>(&props.oninput)}
        />
    }
}
