use crate::components::daisy_ui::foundation as f;

#[derive(Clone, PartialEq)]
pub struct StatItem {
    pub title: f::AttrValue,
    pub value: f::AttrValue,
    pub description: Option<f::AttrValue>,
    pub figure: Option<f::AttrValue>,
    pub desc_class: Option<&'static str>,
}

impl StatItem {
    #[must_use]
    pub fn new(title: impl Into<f::AttrValue>, value: impl Into<f::AttrValue>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            description: None,
            figure: None,
            desc_class: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<f::AttrValue>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn figure(mut self, figure: impl Into<f::AttrValue>) -> Self {
        self.figure = Some(figure.into());
        self
    }

    #[must_use]
    pub const fn tone(mut self, class: &'static str) -> Self {
        self.desc_class = Some(class);
        self
    }
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct StatProps {
    pub items: Vec<StatItem>,
    #[prop_or_default]
    pub vertical: bool,
    #[prop_or_default]
    pub class: f::Classes,
}

#[f::function_component(Stat)]
pub fn stat(props: &StatProps) -> f::Html {
    let mut class = f::class_list(&["stats", "shadow", "w-full"], &props.class);
    if props.vertical {
        class.push("stats-vertical");
    } else {
        class.push("stats-vertical lg:stats-horizontal");
    }
    f::html! {
        <div class={class}>
            { for props.items.iter().map(|item| f::html!{
                <div class="stat">
                    { item.figure.clone().map(|fig| f::html!{ <div class="stat-figure text-3xl" aria-hidden="true">{ fig }</div> }).unwrap_or_default() }
                    <div class="stat-title">{ item.title.clone() }</div>
                    <div class="stat-value">{ item.value.clone() }</div>
                    { item.description.as_ref().map(|d| {
                        let desc = f::classes!("stat-desc", item.desc_class);
                        f::html!{ <div class={desc}>{ d.clone() }</div> }
                    }).unwrap_or_default() }
                </div>
            }) }
        </div>
    }
}
