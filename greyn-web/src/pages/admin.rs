//! Platform administration: activity verification and platform health.
use crate::a11y;
use crate::components::daisy_ui::{
    Alert, Badge, Button, Card, DaisyColor, DaisySize, Progress, Stat, StatItem, status_color,
};
use crate::components::nav_link::NavLink;
use crate::i18n::{fmt_date, fmt_number, t, tr, tr_count};
use crate::router::Route;
use greyn_core::admin::{AdminSeed, FundingProject};
use greyn_core::numbers::group_thousands;
use greyn_core::{Activity, CreditLedger, ReviewQueue, Reviewable, SeedBundle};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct AdminPageProps {
    pub seeds: Rc<SeedBundle>,
    pub on_navigate: Callback<Route>,
}

#[derive(Clone, PartialEq)]
struct Notice {
    variant: DaisyColor,
    message: String,
}

fn snapshot_stats(admin: &AdminSeed) -> Vec<StatItem> {
    let stats = &admin.stats;
    let new_users = stats.new_users_this_month.to_string();
    let pending = stats.pending_projects.to_string();
    let completed = stats.completed_projects.to_string();
    vec![
        StatItem::new(t("admin.stats.total_users"), group_thousands(stats.total_users))
            .figure("👥")
            .description(tr(
                "admin.stats.new_users",
                Some(&BTreeMap::from([("count", new_users.as_str())])),
            ))
            .tone("text-success"),
        StatItem::new(t("admin.stats.active_projects"), stats.active_projects.to_string())
            .figure("🌱")
            .description(tr(
                "admin.stats.project_split",
                Some(&BTreeMap::from([
                    ("pending", pending.as_str()),
                    ("completed", completed.as_str()),
                ])),
            )),
        StatItem::new(t("admin.stats.total_investments"), stats.investments_label())
            .figure("💰")
            .description(stats.investment_growth.clone())
            .tone("text-success"),
        StatItem::new(
            t("admin.stats.carbon_credits"),
            fmt_number(stats.total_carbon_credits),
        )
        .figure("🌍"),
        StatItem::new(t("admin.stats.platform_revenue"), stats.revenue_label())
            .figure("📈")
            .description(t("admin.stats.revenue_hint")),
    ]
}

fn activity_row(
    activity: &Activity,
    on_verify: &Callback<String>,
    on_reject: &Callback<String>,
) -> Html {
    let id = activity.id.clone();
    let verify = {
        let cb = on_verify.clone();
        let id = id.clone();
        Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
    };
    let reject = {
        let cb = on_reject.clone();
        Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
    };
    let date = fmt_date(activity.submitted_date);
    let credits = activity.credits.to_string();
    html! {
        <li class="rounded-box border border-base-200 p-4 space-y-2" data-activity-id={activity.id.clone()}>
            <div class="flex items-start justify-between gap-2">
                <div>
                    <p class="font-semibold">
                        <span aria-hidden="true">{ activity.kind.icon() }</span>
                        { format!(" {}", activity.title) }
                    </p>
                    <p class="text-sm text-base-content/70">
                        { tr("admin.review.by", Some(&BTreeMap::from([("name", activity.user_name.as_str())]))) }
                        { " • " }
                        { t(&format!("activity.{}", activity.kind.key())) }
                    </p>
                </div>
                <Badge variant={DaisyColor::Success} label={tr("admin.review.credits", Some(&BTreeMap::from([("count", credits.as_str())])))} />
            </div>
            <p class="text-sm">{ activity.description.clone() }</p>
            <p class="text-xs text-base-content/60">{ tr("admin.review.submitted", Some(&BTreeMap::from([("date", date.as_str())]))) }</p>
            <div class="flex gap-2">
                <Button size={DaisySize::Sm} variant={DaisyColor::Success} onclick={verify}>{ t("admin.review.verify") }</Button>
                <Button size={DaisySize::Sm} variant={DaisyColor::Error} outline=true onclick={reject}>{ t("admin.review.reject") }</Button>
            </div>
        </li>
    }
}

fn funding_row(project: &FundingProject) -> Html {
    let pct = project.progress_label().to_string();
    html! {
        <li class="space-y-1">
            <div class="flex justify-between text-sm">
                <span class="font-medium">{ project.name.clone() }</span>
                <Badge variant={status_color(project.status.as_str())} label={t(&format!("status.{}", project.status.as_str()))} />
            </div>
            <Progress
                pct={project.bar_width()}
                variant={DaisyColor::Success}
                label={tr("admin.funding.progress", Some(&BTreeMap::from([("pct", pct.as_str())])))}
            />
        </li>
    }
}

#[function_component(AdminPage)]
pub fn admin_page(props: &AdminPageProps) -> Html {
    let queue = use_state(|| ReviewQueue::new(props.seeds.activities.activities.clone()));
    let ledger = use_state(CreditLedger::default);
    let notice = use_state(|| None::<Notice>);

    let on_verify = {
        let queue = queue.clone();
        let ledger = ledger.clone();
        let notice = notice.clone();
        Callback::from(move |id: String| {
            let mut next = (*queue).clone();
            let mut awards = (*ledger).clone();
            match next.verify(&id, crate::dom::today(), &mut awards) {
                Ok(award) => {
                    let title = next.get(&id).map(|a| a.title.clone()).unwrap_or_default();
                    let credits = award.credits.to_string();
                    let message = tr(
                        "admin.review.verified_ack",
                        Some(&BTreeMap::from([
                            ("title", title.as_str()),
                            ("credits", credits.as_str()),
                            ("name", award.user_name.as_str()),
                        ])),
                    );
                    a11y::set_status(&message);
                    notice.set(Some(Notice {
                        variant: DaisyColor::Success,
                        message,
                    }));
                    queue.set(next);
                    ledger.set(awards);
                }
                Err(err) => {
                    let reason = err.to_string();
                    notice.set(Some(Notice {
                        variant: DaisyColor::Error,
                        message: tr(
                            "admin.review.failed",
                            Some(&BTreeMap::from([("reason", reason.as_str())])),
                        ),
                    }));
                }
            }
        })
    };
    let on_reject = {
        let queue = queue.clone();
        let notice = notice.clone();
        Callback::from(move |id: String| {
            let mut next = (*queue).clone();
            let outcome = next.reject(&id, crate::dom::today());
            let title = next.get(&id).map(|a| a.title.clone()).unwrap_or_default();
            let note = match outcome {
                Ok(()) => {
                    queue.set(next);
                    Notice {
                        variant: DaisyColor::Warning,
                        message: tr(
                            "admin.review.rejected_ack",
                            Some(&BTreeMap::from([("title", title.as_str())])),
                        ),
                    }
                }
                Err(err) => {
                    let reason = err.to_string();
                    Notice {
                        variant: DaisyColor::Error,
                        message: tr(
                            "admin.review.failed",
                            Some(&BTreeMap::from([("reason", reason.as_str())])),
                        ),
                    }
                }
            };
            a11y::set_status(&note.message);
            notice.set(Some(note));
        })
    };
    let dismiss = {
        let notice = notice.clone();
        Callback::from(move |()| notice.set(None))
    };

    let admin = &props.seeds.admin;
    let pending: Vec<&Activity> = queue.pending().collect();
    let recent = queue.recent_resolved();
    let awarded: u32 = ledger.awards().iter().map(|award| award.credits).sum();
    let awarded_label = awarded.to_string();

    let pending_list = if pending.is_empty() {
        let key = if queue.items().is_empty() {
            "admin.review.none"
        } else {
            "admin.review.all_reviewed"
        };
        html! { <p class="text-center text-base-content/60 py-6" data-testid="review-empty">{ format!("✅ {}", t(key)) }</p> }
    } else {
        html! {
            <ul class="space-y-3">
                { for pending.iter().map(|activity| activity_row(activity, &on_verify, &on_reject)) }
            </ul>
        }
    };

    html! {
        <section class="space-y-6" data-testid="admin">
            <header>
                <h1 class="text-3xl font-bold flex items-center gap-3">
                    { t("admin.title") }
                    <Badge variant={DaisyColor::Error} label={t("admin.badge")} />
                </h1>
                <p class="text-base-content/70">{ t("admin.subtitle") }</p>
            </header>
            { (*notice).clone().map(|n| html! {
                <Alert variant={n.variant} message={n.message} on_dismiss={dismiss.clone()} />
            }).unwrap_or_default() }
            <Stat items={snapshot_stats(admin)} />
            <div class="grid gap-6 lg:grid-cols-3">
                <Card class={classes!("lg:col-span-2")} title={t("admin.review.title")} subtitle={t("admin.review.pending")}>
                    <div class="flex flex-wrap gap-2">
                        <Badge variant={DaisyColor::Warning} label={tr_count("admin.review.pending_count", pending.len())} />
                        { if awarded > 0 {
                            html! { <Badge variant={DaisyColor::Success} outline=true label={tr("admin.review.awarded", Some(&BTreeMap::from([("count", awarded_label.as_str())])))} /> }
                        } else {
                            Html::default()
                        } }
                    </div>
                    { pending_list }
                </Card>
                <Card title={t("admin.review.recent")}>
                    if recent.is_empty() {
                        <p class="text-sm text-base-content/60">{ t("admin.review.recent_empty") }</p>
                    } else {
                        <ul class="space-y-2" data-testid="recent-verifications">
                            { for recent.iter().map(|activity| html! {
                                <li class="flex items-center justify-between gap-2 text-sm">
                                    <span>{ format!("{} {}", activity.kind.icon(), activity.title) }</span>
                                    <Badge variant={status_color(activity.status_label())} label={t(&format!("status.{}", activity.status_label()))} />
                                </li>
                            }) }
                        </ul>
                    }
                </Card>
            </div>
            <div class="grid gap-6 lg:grid-cols-3">
                <Card title={t("admin.funding.title")}>
                    <ul class="space-y-4">{ for admin.funding.iter().map(funding_row) }</ul>
                </Card>
                <Card title={t("admin.events.title")}>
                    <ul class="space-y-3">
                        { for admin.events.iter().map(|event| html! {
                            <li class="flex gap-3 text-sm">
                                <span aria-hidden="true">{ event.kind.icon() }</span>
                                <div class="flex-1">
                                    <p><span class="font-medium">{ event.action.clone() }</span>{ format!(" {}", event.subject) }</p>
                                    <p class="text-xs text-base-content/60">{ event.time.clone() }</p>
                                </div>
                                { event.amount.clone().map(|amount| html! { <span class="font-semibold text-success">{ amount }</span> }).unwrap_or_default() }
                            </li>
                        }) }
                    </ul>
                </Card>
                <div class="space-y-6">
                    <Card title={t("admin.health.title")}>
                        <ul class="space-y-2" data-operational={admin.all_operational().to_string()}>
                            { for admin.health.iter().map(|row| {
                                let (variant, key) = if row.operational {
                                    (DaisyColor::Success, "admin.health.operational")
                                } else {
                                    (DaisyColor::Error, "admin.health.degraded")
                                };
                                html! {
                                    <li class="flex justify-between text-sm">
                                        <span>{ row.service.clone() }</span>
                                        <Badge {variant} label={t(key)} />
                                    </li>
                                }
                            }) }
                        </ul>
                    </Card>
                    <Card title={t("admin.metrics.title")}>
                        <ul class="space-y-3">
                            { for admin.metrics.iter().map(|metric| html! {
                                <li>
                                    <p class="text-sm">{ metric.label.clone() }</p>
                                    <Progress pct={f64::from(metric.pct)} variant={DaisyColor::Info} />
                                </li>
                            }) }
                        </ul>
                    </Card>
                    <Card title={t("admin.quick.title")}>
                        <div class="flex flex-col gap-2">
                            <NavLink to={Route::Marketplace} on_navigate={props.on_navigate.clone()} class={classes!("btn", "btn-outline", "btn-sm")}>{ t("admin.quick.marketplace") }</NavLink>
                            <NavLink to={Route::CorporateDashboard} on_navigate={props.on_navigate.clone()} class={classes!("btn", "btn-outline", "btn-sm")}>{ t("admin.quick.corporate") }</NavLink>
                        </div>
                    </Card>
                </div>
            </div>
        </section>
    }
}
