//! Shared building blocks for the DaisyUI-styled atoms and molecules.
pub use web_sys::{
    Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent, MouseEvent,
};
pub use yew::classes;
pub use yew::function_component;
pub use yew::html::TargetCast;
pub use yew::prelude::{AttrValue, Callback, Children, Classes, Html, Properties, html};

/// A DaisyUI modifier rendered as `<component>-<suffix>`, e.g. `btn-sm`.
macro_rules! daisy_modifier {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $suffix:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            #[must_use]
            pub const fn suffix(self) -> &'static str {
                match self {
                    $(Self::$variant => $suffix),+
                }
            }

            #[must_use]
            pub fn class(self, component: &str) -> String {
                format!("{component}-{}", self.suffix())
            }
        }
    };
}

daisy_modifier!(
    /// Semantic palette slot.
    DaisyColor {
        Neutral => "neutral",
        Primary => "primary",
        Secondary => "secondary",
        Accent => "accent",
        Info => "info",
        Success => "success",
        Warning => "warning",
        Error => "error",
    }
);

daisy_modifier!(DaisySize {
    Xs => "xs",
    Sm => "sm",
    Md => "md",
    Lg => "lg",
    Xl => "xl",
});

impl Default for DaisyColor {
    fn default() -> Self {
        Self::Primary
    }
}

/// Static component classes followed by caller-supplied extras.
#[must_use]
pub fn class_list(base: &[&'static str], extra: &Classes) -> Classes {
    let mut classes: Classes = base.iter().copied().collect();
    classes.push(extra.clone());
    classes
}

/// Current value of the input, textarea or select that fired `event`.
#[must_use]
pub fn event_value(event: &Event) -> Option<String> {
    if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
        return Some(area.value());
    }
    event
        .target_dyn_into::<HtmlSelectElement>()
        .map(|select| select.value())
}

/// Checked state of the checkbox that fired `event`.
#[must_use]
pub fn event_checked(event: &Event) -> Option<bool> {
    event
        .target_dyn_into::<HtmlInputElement>()
        .map(|input| input.checked())
}

/// A DOM event handler forwarding the control's value to `on_value`.
#[must_use]
pub fn value_handler<E: AsRef<Event> + 'static>(on_value: &Callback<String>) -> Callback<E> {
    let on_value = on_value.clone();
    Callback::from(move |event: E| {
        if let Some(value) = event_value(event.as_ref()) {
            on_value.emit(value);
        }
    })
}

#[must_use]
pub fn attr_value(opt: &Option<AttrValue>) -> Option<AttrValue> {
    opt.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifiers_render_component_prefixed_classes() {
        assert_eq!(DaisyColor::Success.class("badge"), "badge-success");
        assert_eq!(DaisySize::Sm.class("btn"), "btn-sm");
        assert!(DaisyColor::ALL.iter().all(|c| c.class("alert").starts_with("alert-")));
        assert_eq!(DaisySize::ALL.len(), 5);
        assert_eq!(DaisyColor::default(), DaisyColor::Primary);
    }

    #[test]
    fn class_list_keeps_base_before_extras() {
        let classes = class_list(&["btn", "btn-primary"], &Classes::from("mx-1"));
        assert_eq!(classes.to_string(), "btn btn-primary mx-1");
    }
}
