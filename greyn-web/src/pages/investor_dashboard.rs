//! Investor portfolio overview.
use crate::components::chart_placeholder::ChartPlaceholder;
use crate::components::daisy_ui::{Badge, Card, Stat, StatItem, status_color};
use crate::i18n::{fmt_currency, fmt_number, fmt_pct, t, tr, tr_count};
use greyn_core::{Investment, PortfolioTotals, SeedBundle};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct InvestorDashboardProps {
    pub seeds: Rc<SeedBundle>,
}

fn totals_stats(totals: &PortfolioTotals, count: usize) -> Vec<StatItem> {
    let average = fmt_pct(totals.average_return);
    let tonnes = fmt_number(totals.co2_tonnes);
    vec![
        StatItem::new(t("investor.total_invested"), fmt_currency(totals.invested))
            .figure("💰")
            .description(tr_count("investor.across", count)),
        StatItem::new(t("investor.total_roi"), fmt_currency(totals.roi))
            .figure("📈")
            .description(tr(
                "investor.average_return",
                Some(&BTreeMap::from([("pct", average.as_str())])),
            ))
            .tone("text-success"),
        StatItem::new(t("investor.carbon_credits"), fmt_number(totals.carbon_credits))
            .figure("🌍")
            .description(tr(
                "investor.co2",
                Some(&BTreeMap::from([("tonnes", tonnes.as_str())])),
            )),
    ]
}

fn investment_row(investment: &Investment) -> Html {
    let status = investment.status.as_str();
    html! {
        <tr data-investment-id={investment.id.clone()}>
            <td class="font-medium">{ investment.project_name.clone() }</td>
            <td>{ fmt_currency(investment.amount) }</td>
            <td class="text-success">{ fmt_currency(investment.roi) }</td>
            <td>{ fmt_number(investment.carbon_credits) }</td>
            <td><Badge variant={status_color(status)} label={t(&format!("status.{status}"))} /></td>
        </tr>
    }
}

#[function_component(InvestorDashboard)]
pub fn investor_dashboard(props: &InvestorDashboardProps) -> Html {
    let investments = &props.seeds.investments.investments;
    let totals = PortfolioTotals::of(investments);

    html! {
        <section class="space-y-6" data-testid="investor">
            <header>
                <h1 class="text-3xl font-bold">{ t("investor.title") }</h1>
                <p class="text-base-content/70">{ t("investor.subtitle") }</p>
            </header>
            <Stat items={totals_stats(&totals, investments.len())} />
            <ChartPlaceholder title_key="investor.performance" />
            <Card title={t("investor.investments")}>
                if investments.is_empty() {
                    <p class="text-base-content/60">{ t("investor.empty") }</p>
                } else {
                    <div class="overflow-x-auto">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th scope="col">{ t("investor.col.project") }</th>
                                    <th scope="col">{ t("investor.col.amount") }</th>
                                    <th scope="col">{ t("investor.col.roi") }</th>
                                    <th scope="col">{ t("investor.col.credits") }</th>
                                    <th scope="col">{ t("investor.col.status") }</th>
                                </tr>
                            </thead>
                            <tbody>{ for investments.iter().map(investment_row) }</tbody>
                        </table>
                    </div>
                }
            </Card>
        </section>
    }
}
