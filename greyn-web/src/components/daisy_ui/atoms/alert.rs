use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct AlertProps {
    #[prop_or_default]
    pub title: Option<f::AttrValue>,
    #[prop_or_default]
    pub message: Option<f::AttrValue>,
    #[prop_or_default]
    pub variant: Option<f::DaisyColor>,
    #[prop_or_default]
    pub on_dismiss: Option<f::Callback<()>>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub children: f::Children,
}

/// Acknowledgement banner for form submissions and review decisions.
#[f::function_component(Alert)]
pub fn alert(props: &AlertProps) -> f::Html {
    let mut classes = f::class_list(&["alert"], &props.class);
    if let Some(variant) = props.variant {
        classes.push(variant.class("alert"));
    }
    let dismiss = props.on_dismiss.as_ref().map(|cb| {
        let cb = cb.clone();
        let onclick = f::Callback::from(move |_: f::MouseEvent| cb.emit(()));
        f::html! {
            <button type="button" class="btn btn-ghost btn-xs" aria-label="Dismiss" {onclick}>{ "✕" }</button>
        }
    });
    f::html! {
        <div class={classes} role="status" aria-live="polite">
            <div>
                { props.title.as_ref().map(|title| f::html! { <strong>{ title.clone() }</strong> }).unwrap_or_default() }
                { props.message.as_ref().map(|msg| f::html! { <p>{ msg.clone() }</p> }).unwrap_or_default() }
                { for props.children.iter() }
            </div>
            { dismiss.unwrap_or_default() }
        </div>
    }
}
