use super::{acknowledgement, edit, labelled, page_header};
use crate::a11y;
use crate::components::daisy_ui::{
    Badge, Button, Card, Checkbox, DaisyColor, Input, Select, SelectOption, Stat, StatItem,
    status_color,
};
use crate::components::nav_link::NavLink;
use crate::i18n::{fmt_currency, fmt_date, fmt_number, t, tr, tr_count};
use crate::router::Route;
use greyn_core::corporate::{EsgReport, ReportKind, ReportRequest, ReportSeed, ReportStatus};
use greyn_core::{Acknowledgement, SeedBundle};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ReportsPageProps {
    pub seeds: Rc<SeedBundle>,
    /// Report opened through `/corporate/reports/:id`.
    #[prop_or_default]
    pub selected: Option<String>,
    pub on_navigate: Callback<Route>,
}

fn count_stats(seed: &ReportSeed) -> Vec<StatItem> {
    ReportStatus::ALL
        .iter()
        .map(|status| {
            StatItem::new(
                t(&format!("reports.count.{}", status.as_str())),
                seed.count(*status).to_string(),
            )
        })
        .collect()
}

fn report_detail(report: &EsgReport, on_navigate: &Callback<Route>) -> Html {
    let generated = fmt_date(report.generated_date);
    let net = report.net_offset();
    let net_class = if net >= 0.0 { "text-success" } else { "text-error" };
    let rows = [
        ("reports.detail.emissions", fmt_number(report.emissions), ""),
        ("reports.detail.offset", fmt_number(report.offset_purchased), ""),
        ("reports.detail.net", fmt_number(net), net_class),
        ("reports.detail.donations", fmt_currency(report.donations), ""),
        ("reports.detail.volunteer_hours", report.volunteer_hours.to_string(), ""),
    ];
    html! {
        <Card title={report.title.clone()} subtitle={tr("reports.detail.generated", Some(&BTreeMap::from([("date", generated.as_str())])))}>
            <dl class="grid grid-cols-2 gap-2 text-sm" data-report-id={report.id.clone()}>
                <dt class="text-base-content/60">{ t("reports.detail.period") }</dt>
                <dd>{ report.period.clone() }</dd>
                { for rows.iter().map(|(key, value, class)| html! {
                    <>
                        <dt class="text-base-content/60">{ t(key) }</dt>
                        <dd class={classes!("font-medium", *class)}>{ value.clone() }</dd>
                    </>
                }) }
            </dl>
            <NavLink to={Route::Reports} on_navigate={on_navigate.clone()} class={classes!("link", "link-hover", "text-sm")}>
                { format!("← {}", t("reports.detail.back")) }
            </NavLink>
        </Card>
    }
}

fn report_item(report: &EsgReport, selected: bool, on_navigate: &Callback<Route>) -> Html {
    let status = report.status.as_str();
    html! {
        <li>
            <NavLink
                to={Route::Report { id: report.id.clone() }}
                on_navigate={on_navigate.clone()}
                active={selected}
                class={classes!("flex", "justify-between", "gap-2")}
            >
                <span>
                    <span class="block font-medium">{ report.title.clone() }</span>
                    <span class="block text-xs text-base-content/60">{ report.subtitle() }</span>
                </span>
                <Badge variant={status_color(status)} label={t(&format!("status.{status}"))} />
            </NavLink>
        </li>
    }
}

#[function_component(ReportsPage)]
pub fn reports_page(props: &ReportsPageProps) -> Html {
    let request = use_state(ReportRequest::default);
    let ack = use_state(|| None::<Acknowledgement>);

    let toggle = {
        let request = request.clone();
        move |apply: fn(&mut ReportRequest, bool)| {
            let request = request.clone();
            Callback::from(move |on: bool| {
                let mut next = (*request).clone();
                apply(&mut next, on);
                request.set(next);
            })
        }
    };
    let on_submit = {
        let request = request.clone();
        let ack = ack.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let receipt = request.submit();
            if let Some(detail) = receipt.detail.as_deref() {
                a11y::set_status(&tr(receipt.key, Some(&BTreeMap::from([("detail", detail)]))));
            }
            ack.set(Some(receipt));
            request.set(ReportRequest::default());
        })
    };
    let dismiss = {
        let ack = ack.clone();
        Callback::from(move |()| ack.set(None))
    };

    let seed = &props.seeds.reports;
    let detail = match props.selected.as_deref() {
        Some(id) => seed.find(id).map_or_else(
            || html! { <div role="alert" class="alert alert-warning" data-testid="report-missing">{ t("reports.not_found") }</div> },
            |report| report_detail(report, &props.on_navigate),
        ),
        None => html! { <p class="text-base-content/60">{ t("reports.select_hint") }</p> },
    };
    let kinds: Vec<SelectOption> = ReportKind::ALL
        .iter()
        .map(|kind| SelectOption::plain(kind.as_str()))
        .collect();
    let proposed = request.proposed_title();

    html! {
        <>
            { page_header("reports.title", "reports.subtitle") }
            { (*ack).as_ref().map(|receipt| acknowledgement(receipt, dismiss.clone())).unwrap_or_default() }
            <Stat items={count_stats(seed)} />
            <div class="grid gap-6 lg:grid-cols-2">
                <Card title={t("reports.title")}>
                    <ul class="menu p-0" data-testid="report-list">
                        { for seed.reports.iter().map(|report| {
                            let selected = props.selected.as_deref() == Some(report.id.as_str());
                            report_item(report, selected, &props.on_navigate)
                        }) }
                    </ul>
                </Card>
                <div>{ detail }</div>
            </div>
            <Card title={t("reports.generate")}>
                <form class="grid gap-4 md:grid-cols-2" onsubmit={on_submit} data-testid="report-form">
                    { labelled("report-kind", "reports.form.kind", html! {
                        <Select
                            id="report-kind"
                            options={kinds}
                            value={request.kind.as_str()}
                            on_change={edit(&request, |r, v| r.kind = ReportKind::parse(&v).unwrap_or_default())}
                        />
                    }) }
                    { labelled("report-period", "reports.form.period", html! {
                        <Input id="report-period" value={request.period.clone()} oninput={edit(&request, |r, v| r.period = v)} />
                    }) }
                    <div class="flex flex-col">
                        <Checkbox label={t("reports.form.include_emissions")} checked={request.include_emissions} on_toggle={toggle(|r, on| r.include_emissions = on)} />
                        <Checkbox label={t("reports.form.include_donations")} checked={request.include_donations} on_toggle={toggle(|r, on| r.include_donations = on)} />
                        <Checkbox label={t("reports.form.include_volunteers")} checked={request.include_volunteers} on_toggle={toggle(|r, on| r.include_volunteers = on)} />
                    </div>
                    <div class="space-y-2 text-sm" aria-live="polite">
                        { proposed.map(|title| html! {
                            <p class="font-medium" data-testid="proposed-title">{ tr("reports.form.proposed", Some(&BTreeMap::from([("title", title.as_str())]))) }</p>
                        }).unwrap_or_default() }
                        <p>{ tr_count("reports.form.sections", request.section_count()) }</p>
                        <Button submit=true variant={DaisyColor::Success}>{ t("reports.form.submit") }</Button>
                    </div>
                </form>
            </Card>
        </>
    }
}
