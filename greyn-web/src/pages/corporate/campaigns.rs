use super::{acknowledgement, edit, labelled, page_header};
use crate::a11y;
use crate::components::daisy_ui::{
    Badge, Button, Card, DaisyColor, Input, Progress, Stat, StatItem, Textarea, status_color,
};
use crate::i18n::{fmt_currency, fmt_date, t, tr, tr_count};
use greyn_core::corporate::{Campaign, CampaignDraft, CampaignTotals};
use greyn_core::numbers::group_thousands;
use greyn_core::{Acknowledgement, SeedBundle};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CampaignsPageProps {
    pub seeds: Rc<SeedBundle>,
}

fn totals_stats(totals: &CampaignTotals) -> Vec<StatItem> {
    let donors = group_thousands(u64::from(totals.donors));
    vec![
        StatItem::new(t("campaigns.totals.raised"), fmt_currency(totals.raised)).figure("💚"),
        StatItem::new(t("campaigns.totals.donors"), donors).figure("🤝"),
        StatItem::new(t("campaigns.totals.active"), totals.active.to_string()).figure("📣"),
    ]
}

fn campaign_card(campaign: &Campaign) -> Html {
    let raised = fmt_currency(campaign.raised);
    let goal = fmt_currency(campaign.goal);
    let pct = campaign.progress_label().to_string();
    let ends = fmt_date(campaign.end_date);
    let status = campaign.status.as_str();
    html! {
        <article class="card bg-base-100 shadow" data-campaign-id={campaign.id.clone()}>
            <div class="card-body gap-3">
                <div class="flex items-start justify-between gap-2">
                    <div>
                        <p class="text-sm text-base-content/60">{ campaign.ngo_name.clone() }</p>
                        <h2 class="card-title">{ campaign.title.clone() }</h2>
                    </div>
                    <Badge variant={status_color(status)} label={t(&format!("status.{status}"))} />
                </div>
                <p class="text-sm">{ campaign.description.clone() }</p>
                <Progress
                    pct={campaign.bar_width()}
                    variant={DaisyColor::Success}
                    label={tr("campaigns.progress", Some(&BTreeMap::from([("pct", pct.as_str())])))}
                />
                <p class="text-sm font-medium">
                    { tr("campaigns.raised_of", Some(&BTreeMap::from([("raised", raised.as_str()), ("goal", goal.as_str())]))) }
                </p>
                <div class="flex justify-between text-xs text-base-content/60">
                    <span>{ tr_count("campaigns.donors", usize::try_from(campaign.donors).unwrap_or(usize::MAX)) }</span>
                    <span>{ tr("campaigns.ends", Some(&BTreeMap::from([("date", ends.as_str())]))) }</span>
                </div>
                <Badge outline=true label={campaign.category.clone()} />
            </div>
        </article>
    }
}

#[function_component(CampaignsPage)]
pub fn campaigns_page(props: &CampaignsPageProps) -> Html {
    let draft = use_state(CampaignDraft::default);
    let show_form = use_state(|| false);
    let ack = use_state(|| None::<Acknowledgement>);

    let toggle_form = {
        let show_form = show_form.clone();
        Callback::from(move |_: MouseEvent| show_form.set(!*show_form))
    };
    let on_submit = {
        let draft = draft.clone();
        let show_form = show_form.clone();
        let ack = ack.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let receipt = draft.submit();
            a11y::set_status(&t(receipt.key));
            ack.set(Some(receipt));
            draft.set(CampaignDraft::default());
            show_form.set(false);
        })
    };
    let dismiss = {
        let ack = ack.clone();
        Callback::from(move |()| ack.set(None))
    };

    let campaigns = &props.seeds.campaigns.campaigns;
    let totals = CampaignTotals::of(campaigns);

    html! {
        <>
            <div class="flex flex-wrap items-start justify-between gap-4">
                { page_header("campaigns.title", "campaigns.subtitle") }
                <Button variant={DaisyColor::Success} onclick={toggle_form}>{ t("campaigns.create") }</Button>
            </div>
            { (*ack).as_ref().map(|receipt| acknowledgement(receipt, dismiss.clone())).unwrap_or_default() }
            <Stat items={totals_stats(&totals)} />
            if *show_form {
                <Card title={t("campaigns.create")}>
                    <form class="grid gap-4 md:grid-cols-2" onsubmit={on_submit} data-testid="campaign-form">
                        { labelled("campaign-ngo", "campaigns.form.ngo", html! {
                            <Input id="campaign-ngo" value={draft.ngo_name.clone()} oninput={edit(&draft, |d, v| d.ngo_name = v)} />
                        }) }
                        { labelled("campaign-title", "campaigns.form.title", html! {
                            <Input id="campaign-title" value={draft.title.clone()} oninput={edit(&draft, |d, v| d.title = v)} />
                        }) }
                        { labelled("campaign-goal", "campaigns.form.goal", html! {
                            <Input id="campaign-goal" input_type="number" value={draft.goal.clone()} oninput={edit(&draft, |d, v| d.goal = v)} />
                        }) }
                        { labelled("campaign-end", "campaigns.form.end_date", html! {
                            <Input id="campaign-end" input_type="date" value={draft.end_date.clone()} oninput={edit(&draft, |d, v| d.end_date = v)} />
                        }) }
                        <div class="md:col-span-2">
                            { labelled("campaign-description", "campaigns.form.description", html! {
                                <Textarea id="campaign-description" value={draft.description.clone()} oninput={edit(&draft, |d, v| d.description = v)} />
                            }) }
                        </div>
                        <div>
                            <Button submit=true variant={DaisyColor::Success}>{ t("campaigns.form.submit") }</Button>
                        </div>
                    </form>
                </Card>
            }
            <div class="grid gap-4 md:grid-cols-2 xl:grid-cols-3">
                { for campaigns.iter().map(campaign_card) }
            </div>
        </>
    }
}
