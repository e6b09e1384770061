use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct BadgeProps {
    #[prop_or_default]
    pub label: Option<f::AttrValue>,
    #[prop_or_default]
    pub variant: Option<f::DaisyColor>,
    #[prop_or_default]
    pub outline: bool,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub children: f::Children,
}

#[f::function_component(Badge)]
pub fn badge(props: &BadgeProps) -> f::Html {
    let mut classes = f::class_list(&["badge"], &props.class);
    if let Some(variant) = props.variant {
        classes.push(variant.class("badge"));
    }
    if props.outline {
        classes.push("badge-outline");
    }
    f::html! {
        <span class={classes}>
            { props.label.as_ref().map(|l| f::html! { { l.clone() } }).unwrap_or_default() }
            { for props.children.iter() }
        </span>
    }
}

/// Badge colour for a workflow status string.
#[must_use]
pub fn status_color(status: &str) -> f::DaisyColor {
    match status {
        "verified" | "approved" | "active" | "published" | "completed" => f::DaisyColor::Success,
        "pending" | "draft" | "upcoming" | "ongoing" => f::DaisyColor::Warning,
        "unverified" | "rejected" => f::DaisyColor::Error,
        _ => f::DaisyColor::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_map_to_colors() {
        assert!(status_color("verified") == f::DaisyColor::Success);
        assert!(status_color("pending") == f::DaisyColor::Warning);
        assert!(status_color("rejected") == f::DaisyColor::Error);
        assert!(status_color("archived") == f::DaisyColor::Neutral);
    }
}
