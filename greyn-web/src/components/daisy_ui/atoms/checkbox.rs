use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct CheckboxProps {
    pub label: f::AttrValue,
    #[prop_or_default]
    pub checked: bool,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub on_toggle: f::Callback<bool>,
}

/// Labelled checkbox; the whole row is the click target.
#[f::function_component(Checkbox)]
pub fn checkbox(props: &CheckboxProps) -> f::Html {
    let onchange = {
        let on_toggle = props.on_toggle.clone();
        f::Callback::from(move |e: f::Event| {
            if let Some(checked) = f::event_checked(&e) {
                on_toggle.emit(checked);
            }
        })
    };
    f::html! {
        <label class="label cursor-pointer justify-start gap-2">
            <input
                class={f::class_list(&["checkbox", "checkbox-success", "checkbox-sm"], &props.class)}
                type="checkbox"
                checked={props.checked}
                onchange={onchange}
            />
            <span class="label-text">{ props.label.clone() }</span>
        </label>
    }
}
