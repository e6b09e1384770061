use super::{acknowledgement, edit, labelled, page_header};
use crate::a11y;
use crate::components::daisy_ui::{
    Alert, Badge, Button, Card, DaisyColor, DaisySize, Input, Progress, Textarea, status_color,
};
use crate::i18n::{fmt_date, t, tr, tr_count};
use greyn_core::corporate::{EventDraft, VolunteerEvent, VolunteerRequest};
use greyn_core::{Acknowledgement, ReviewQueue, Reviewable, SeedBundle, Verdict};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct VolunteersPageProps {
    pub seeds: Rc<SeedBundle>,
}

fn event_card(event: &VolunteerEvent) -> Html {
    let participants = event.participants.to_string();
    let max = event.max_participants.to_string();
    let status = event.status.as_str();
    html! {
        <article class="card bg-base-100 shadow" data-event-id={event.id.clone()}>
            <div class="card-body gap-2">
                <div class="flex items-start justify-between gap-2">
                    <h3 class="card-title text-lg">{ event.title.clone() }</h3>
                    if event.is_full() {
                        <Badge variant={DaisyColor::Warning} label={t("volunteers.full")} />
                    } else {
                        <Badge variant={status_color(status)} label={t(&format!("status.{status}"))} />
                    }
                </div>
                <p class="text-sm text-base-content/70">{ format!("📅 {} • 📍 {}", fmt_date(event.date), event.location) }</p>
                <p class="text-sm">{ event.description.clone() }</p>
                <Progress
                    pct={event.fill_pct()}
                    variant={DaisyColor::Info}
                    label={tr("volunteers.fill", Some(&BTreeMap::from([("participants", participants.as_str()), ("max", max.as_str())])))}
                />
            </div>
        </article>
    }
}

fn request_row(request: &VolunteerRequest, on_decide: &Callback<(String, Verdict)>) -> Html {
    let decide = |verdict: Verdict| {
        let cb = on_decide.clone();
        let id = request.id.clone();
        Callback::from(move |_: MouseEvent| cb.emit((id.clone(), verdict)))
    };
    let status = request.status_label();
    let pending = request.review_state() == greyn_core::ReviewState::Pending;
    html! {
        <li class="flex flex-wrap items-center justify-between gap-2 py-3" data-request-id={request.id.clone()}>
            <div>
                <p class="font-medium">
                    { tr("volunteers.requested", Some(&BTreeMap::from([("name", request.employee_name.as_str()), ("event", request.event_title.as_str())]))) }
                </p>
                <p class="text-xs text-base-content/60">{ format!("{} • {}", fmt_date(request.event_date), fmt_date(request.submitted_date)) }</p>
            </div>
            if pending {
                <div class="flex gap-2">
                    <Button size={DaisySize::Sm} variant={DaisyColor::Success} onclick={decide(Verdict::Accept)}>{ t("volunteers.approve") }</Button>
                    <Button size={DaisySize::Sm} variant={DaisyColor::Error} outline=true onclick={decide(Verdict::Decline)}>{ t("volunteers.reject") }</Button>
                </div>
            } else {
                <Badge variant={status_color(status)} label={t(&format!("status.{status}"))} />
            }
        </li>
    }
}

#[function_component(VolunteersPage)]
pub fn volunteers_page(props: &VolunteersPageProps) -> Html {
    let requests = use_state(|| ReviewQueue::new(props.seeds.volunteers.requests.clone()));
    let draft = use_state(EventDraft::default);
    let show_form = use_state(|| false);
    let ack = use_state(|| None::<Acknowledgement>);
    let decision = use_state(|| None::<(DaisyColor, String)>);

    let on_decide = {
        let requests = requests.clone();
        let decision = decision.clone();
        Callback::from(move |(id, verdict): (String, Verdict)| {
            let mut next = (*requests).clone();
            let outcome = next
                .decide(&id, verdict, crate::dom::today())
                .map(|request| (request.employee_name.clone(), request.status_label()));
            match outcome {
                Ok((name, status)) => {
                    let status = t(&format!("status.{status}"));
                    let message = tr(
                        "volunteers.decided",
                        Some(&BTreeMap::from([
                            ("name", name.as_str()),
                            ("status", status.as_str()),
                        ])),
                    );
                    a11y::set_status(&message);
                    decision.set(Some((DaisyColor::Info, message)));
                    requests.set(next);
                }
                Err(err) => decision.set(Some((DaisyColor::Error, err.to_string()))),
            }
        })
    };
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
            draft.set(EventDraft::default());
            show_form.set(false);
        })
    };
    let dismiss_ack = {
        let ack = ack.clone();
        Callback::from(move |()| ack.set(None))
    };
    let dismiss_decision = {
        let decision = decision.clone();
        Callback::from(move |()| decision.set(None))
    };

    html! {
        <>
            <div class="flex flex-wrap items-start justify-between gap-4">
                { page_header("volunteers.title", "volunteers.subtitle") }
                <Button variant={DaisyColor::Success} onclick={toggle_form}>{ t("volunteers.create") }</Button>
            </div>
            { (*ack).as_ref().map(|receipt| acknowledgement(receipt, dismiss_ack.clone())).unwrap_or_default() }
            if *show_form {
                <Card title={t("volunteers.create")}>
                    <form class="grid gap-4 md:grid-cols-2" onsubmit={on_submit} data-testid="event-form">
                        { labelled("event-title", "volunteers.form.title", html! {
                            <Input id="event-title" value={draft.title.clone()} oninput={edit(&draft, |d, v| d.title = v)} />
                        }) }
                        { labelled("event-date", "volunteers.form.date", html! {
                            <Input id="event-date" input_type="date" value={draft.date.clone()} oninput={edit(&draft, |d, v| d.date = v)} />
                        }) }
                        { labelled("event-location", "volunteers.form.location", html! {
                            <Input id="event-location" value={draft.location.clone()} oninput={edit(&draft, |d, v| d.location = v)} />
                        }) }
                        { labelled("event-max", "volunteers.form.max", html! {
                            <Input id="event-max" input_type="number" value={draft.max_participants.clone()} oninput={edit(&draft, |d, v| d.max_participants = v)} />
                        }) }
                        <div class="md:col-span-2">
                            { labelled("event-description", "volunteers.form.description", html! {
                                <Textarea id="event-description" value={draft.description.clone()} oninput={edit(&draft, |d, v| d.description = v)} />
                            }) }
                        </div>
                        <div>
                            <Button submit=true variant={DaisyColor::Success}>{ t("volunteers.form.submit") }</Button>
                        </div>
                    </form>
                </Card>
            }
            <section aria-labelledby="volunteer-events" class="space-y-3">
                <h2 id="volunteer-events" class="text-xl font-semibold">{ t("volunteers.events") }</h2>
                <div class="grid gap-4 md:grid-cols-2">
                    { for props.seeds.volunteers.events.iter().map(event_card) }
                </div>
            </section>
            <Card title={t("volunteers.requests")} subtitle={tr_count("volunteers.pending", requests.pending_count())}>
                { (*decision).clone().map(|(variant, message)| html! {
                    <Alert {variant} {message} on_dismiss={dismiss_decision.clone()} />
                }).unwrap_or_default() }
                <ul class="divide-y divide-base-200" data-testid="volunteer-requests">
                    { for requests.items().iter().map(|request| request_row(request, &on_decide)) }
                </ul>
            </Card>
        </>
    }
}
