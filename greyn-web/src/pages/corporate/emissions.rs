use super::{acknowledgement, labelled, page_header};
use crate::a11y;
use crate::components::daisy_ui::{
    Badge, Button, Card, DaisyColor, Input, Select, SelectOption, Stat, StatItem, status_color,
};
use crate::i18n::{fmt_date, fmt_number, t};
use greyn_core::corporate::{EmissionEntry, EmissionsForm, EmissionsSummary, FORM_COUNTRIES};
use greyn_core::{Acknowledgement, SeedBundle};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct EmissionsPageProps {
    pub seeds: Rc<SeedBundle>,
}

/// Numeric inputs as (field name, element id, label key).
const NUMERIC_FIELDS: [(&str, &str, &str); 4] = [
    ("electricity", "emission-electricity", "emissions.form.electricity"),
    ("fuel", "emission-fuel", "emissions.form.fuel"),
    ("travel", "emission-travel", "emissions.form.travel"),
    ("waste", "emission-waste", "emissions.form.waste"),
];

fn summary_stats(summary: &EmissionsSummary) -> Vec<StatItem> {
    let latest = summary
        .latest_total
        .map_or_else(
            || t("emissions.summary.none"),
            |total| format!("{} tCO₂e", fmt_number(total)),
        );
    vec![
        StatItem::new(t("emissions.summary.latest"), latest).figure("🏭"),
        StatItem::new(t("emissions.summary.verified"), summary.verified.to_string())
            .figure("✅")
            .tone("text-success"),
        StatItem::new(t("emissions.summary.pending"), summary.pending.to_string()).figure("⏳"),
    ]
}

fn history_row(entry: &EmissionEntry) -> Html {
    let status = entry.status.as_str();
    html! {
        <tr data-emission-id={entry.id.clone()}>
            <td>{ fmt_date(entry.date) }</td>
            <td>{ entry.category.clone() }</td>
            <td>{ fmt_number(entry.electricity) }</td>
            <td>{ fmt_number(entry.fuel) }</td>
            <td>{ fmt_number(entry.travel) }</td>
            <td>{ fmt_number(entry.waste) }</td>
            <td class="font-semibold">{ fmt_number(entry.total) }</td>
            <td><Badge variant={status_color(status)} label={t(&format!("status.{status}"))} /></td>
        </tr>
    }
}

fn field_value<'a>(form: &'a EmissionsForm, name: &str) -> &'a str {
    match name {
        "electricity" => &form.electricity,
        "fuel" => &form.fuel,
        "travel" => &form.travel,
        "waste" => &form.waste,
        _ => &form.country,
    }
}

#[function_component(EmissionsPage)]
pub fn emissions_page(props: &EmissionsPageProps) -> Html {
    let form = use_state(EmissionsForm::default);
    let ack = use_state(|| None::<Acknowledgement>);

    let set_field = {
        let form = form.clone();
        move |name: &'static str| {
            let form = form.clone();
            Callback::from(move |value: String| {
                let mut next = (*form).clone();
                next.set(name, value);
                form.set(next);
            })
        }
    };
    let on_submit = {
        let form = form.clone();
        let ack = ack.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let receipt = form.submit();
            a11y::set_status(&t(receipt.key));
            ack.set(Some(receipt));
            form.set(EmissionsForm::default());
        })
    };
    let on_clear = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            next.clear();
            form.set(next);
        })
    };
    let dismiss = {
        let ack = ack.clone();
        Callback::from(move |()| ack.set(None))
    };

    let entries = &props.seeds.emissions.entries;
    let summary = EmissionsSummary::of(entries);
    let mut countries = vec![SelectOption {
        label: t("emissions.form.choose_country").into(),
        value: AttrValue::default(),
    }];
    countries.extend(FORM_COUNTRIES.iter().map(|country| SelectOption::plain(*country)));

    html! {
        <>
            { page_header("emissions.title", "emissions.subtitle") }
            { (*ack).as_ref().map(|receipt| acknowledgement(receipt, dismiss.clone())).unwrap_or_default() }
            <Stat items={summary_stats(&summary)} />
            <Card title={t("emissions.form.title")}>
                <form class="grid gap-4 md:grid-cols-2" onsubmit={on_submit} data-testid="emissions-form">
                    { for NUMERIC_FIELDS.iter().map(|&(name, id, label)| {
                        labelled(id, label, html! {
                            <Input
                                {id}
                                {name}
                                input_type="number"
                                value={field_value(&form, name).to_string()}
                                oninput={set_field(name)}
                            />
                        })
                    }) }
                    { labelled("emission-country", "emissions.form.country", html! {
                        <Select id="emission-country" options={countries} value={form.country.clone()} on_change={set_field("country")} />
                    }) }
                    <div class="flex items-end gap-2">
                        <Button submit=true variant={DaisyColor::Success}>{ t("emissions.form.submit") }</Button>
                        <Button outline=true onclick={on_clear}>{ t("emissions.form.clear") }</Button>
                    </div>
                </form>
            </Card>
            <Card title={t("emissions.history")}>
                <div class="overflow-x-auto">
                    <table class="table table-zebra">
                        <thead>
                            <tr>
                                { for ["date", "category", "electricity", "fuel", "travel", "waste", "total", "status"].iter().map(|col| html! {
                                    <th scope="col">{ t(&format!("emissions.col.{col}")) }</th>
                                }) }
                            </tr>
                        </thead>
                        <tbody>{ for entries.iter().map(history_row) }</tbody>
                    </table>
                </div>
            </Card>
        </>
    }
}
