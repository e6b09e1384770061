use super::page_header;
use crate::components::daisy_ui::{
    Badge, Card, DaisyColor, Input, Progress, Select, SelectOption, Stat, StatItem,
};
use crate::i18n::{fmt_number, fmt_pct, t};
use greyn_core::SeedBundle;
use greyn_core::corporate::employees::ALL_ROLES;
use greyn_core::corporate::{Employee, EmployeeQuery, EmployeeRole, WorkforceSummary};
use greyn_core::numbers::{group_thousands, u64_to_f64};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct EmployeesPageProps {
    pub seeds: Rc<SeedBundle>,
}

fn role_options() -> Vec<SelectOption> {
    let mut options = vec![SelectOption {
        label: t("employees.all_roles").into(),
        value: ALL_ROLES.into(),
    }];
    options.extend(EmployeeRole::ALL.iter().map(|role| SelectOption::plain(role.as_str())));
    options
}

fn employee_row(employee: &Employee) -> Html {
    html! {
        <tr data-employee-id={employee.id.clone()}>
            <td>
                <div class="flex items-center gap-3">
                    <div class="avatar placeholder">
                        <div class="bg-success text-success-content w-10 rounded-full">
                            <span aria-hidden="true">{ employee.initials() }</span>
                        </div>
                    </div>
                    <div>
                        <p class="font-medium">{ employee.name.clone() }</p>
                        <p class="text-xs text-base-content/60">{ employee.email.clone() }</p>
                    </div>
                </div>
            </td>
            <td><Badge outline=true label={employee.role.as_str()} /></td>
            <td>{ employee.department.clone() }</td>
            <td class="min-w-32">
                <span class="text-sm">{ group_thousands(u64::from(employee.xp_points)) }</span>
                <Progress pct={employee.xp_bar_width()} variant={DaisyColor::Success} />
            </td>
            <td>{ employee.volunteer_hours }</td>
            <td>{ employee.campaigns_participated }</td>
        </tr>
    }
}

fn summary_stats(summary: &WorkforceSummary) -> Vec<StatItem> {
    let hours = fmt_number(u64_to_f64(summary.total_volunteer_hours));
    vec![
        StatItem::new(t("employees.summary.head_count"), summary.head_count.to_string())
            .figure("👥"),
        StatItem::new(t("employees.summary.total_xp"), group_thousands(summary.total_xp))
            .figure("⭐"),
        StatItem::new(t("employees.summary.hours"), hours).figure("🕒"),
        StatItem::new(t("employees.summary.avg_campaigns"), fmt_pct(summary.avg_campaigns))
            .figure("📣"),
    ]
}

#[function_component(EmployeesPage)]
pub fn employees_page(props: &EmployeesPageProps) -> Html {
    let query = use_state(EmployeeQuery::default);

    let on_search = {
        let query = query.clone();
        Callback::from(move |value: String| query.set((*query).clone().with_search(&value)))
    };
    let on_role = {
        let query = query.clone();
        Callback::from(move |value: String| query.set((*query).clone().with_role_choice(&value)))
    };

    let employees = &props.seeds.employees.employees;
    let summary = WorkforceSummary::of(employees);
    let matches = query.apply(employees);

    html! {
        <>
            { page_header("employees.title", "employees.subtitle") }
            <Stat items={summary_stats(&summary)} />
            <Card>
                <div class="grid gap-4 md:grid-cols-3">
                    <div class="md:col-span-2">
                        <Input
                            id="employee-search"
                            input_type="search"
                            value={query.search.clone()}
                            placeholder={t("employees.search")}
                            aria_label={t("employees.search")}
                            oninput={on_search}
                        />
                    </div>
                    <Select
                        id="employee-role"
                        options={role_options()}
                        value={query.role_choice()}
                        aria_label={t("employees.col.role")}
                        on_change={on_role}
                    />
                </div>
                if matches.is_empty() {
                    <p class="py-6 text-center text-base-content/60" data-testid="employees-empty">{ t("employees.empty") }</p>
                } else {
                    <div class="overflow-x-auto">
                        <table class="table">
                            <thead>
                                <tr>
                                    { for ["name", "role", "department", "xp", "hours", "campaigns"].iter().map(|col| html! {
                                        <th scope="col">{ t(&format!("employees.col.{col}")) }</th>
                                    }) }
                                </tr>
                            </thead>
                            <tbody>{ for matches.iter().map(|employee| employee_row(employee)) }</tbody>
                        </table>
                    </div>
                }
            </Card>
        </>
    }
}
