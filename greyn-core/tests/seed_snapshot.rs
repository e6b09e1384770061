mod common;

use std::fmt::Write as _;
use std::hash::Hasher;

use greyn_core::corporate::{EmployeeQuery, ReportStatus, WorkforceSummary};
use greyn_core::numbers::money_millions;
use greyn_core::{PortfolioTotals, SEED_NAMES, SeedBundle};
use twox_hash::XxHash64;

const CATALOG_HASH: u64 = 0x5a09_7140_ef20_d183;

fn snapshot_hash(bytes: &[u8]) -> u64 {
    let mut hasher = XxHash64::with_seed(0);
    hasher.write(bytes);
    hasher.finish()
}

#[test]
fn catalog_snapshot_stable() {
    let catalog = common::seeds().catalog;
    let mut canonical = String::new();
    for p in &catalog.projects {
        writeln!(
            canonical,
            "{}|{}|{}|{}|{:.2}|{}|{}|{}",
            p.id,
            p.project_name,
            p.ngo_name,
            p.country,
            p.price_per_tonne,
            p.is_verified,
            p.impact_type,
            p.available_credits
        )
        .unwrap();
    }
    assert_eq!(
        snapshot_hash(canonical.as_bytes()),
        CATALOG_HASH,
        "catalog snapshot changed\n{canonical}"
    );
}

#[test]
fn every_named_seed_loads() {
    let seeds: SeedBundle = common::seeds();
    assert_eq!(SEED_NAMES.len(), 10);
    assert_eq!(seeds.activities.activities.len(), 3);
    assert_eq!(seeds.campaigns.campaigns.len(), 4);
    assert_eq!(seeds.emissions.entries.len(), 3);
    assert_eq!(seeds.employees.employees.len(), 8);
    assert_eq!(seeds.reports.reports.len(), 6);
    assert_eq!(seeds.volunteers.events.len(), 3);
    assert_eq!(seeds.volunteers.requests.len(), 4);
    assert_eq!(seeds.kpis.kpis.len(), 7);
    assert_eq!(seeds.admin.funding.len(), 4);
}

#[test]
fn derived_figures_match_dashboards() {
    let seeds = common::seeds();
    assert_eq!(money_millions(seeds.admin.stats.total_investments), "$2.55M");
    assert_eq!(seeds.admin.stats.revenue_label(), "$127K");
    let funding: Vec<u32> = seeds
        .admin
        .funding
        .iter()
        .map(|p| p.progress_label())
        .collect();
    assert_eq!(funding, vec![75, 72, 84, 63]);

    let reports = &seeds.reports;
    assert_eq!(reports.count(ReportStatus::Published), 4);
    assert_eq!(reports.count(ReportStatus::Draft), 1);
    assert_eq!(reports.count(ReportStatus::Archived), 1);
    assert_eq!(
        reports.find("2").map(|r| r.subtitle()).as_deref(),
        Some("320.8t CO₂ • $125K donations")
    );

    let staff = &seeds.employees.employees;
    let summary = WorkforceSummary::of(staff);
    assert_eq!(summary.total_xp, 16_690);
    assert_eq!(summary.total_volunteer_hours, 318);
    assert!((summary.avg_campaigns - 10.1).abs() < 1e-9);
    let top = EmployeeQuery::default().apply(staff);
    assert_eq!(top[0].name, "Michael Chen");

    let totals = PortfolioTotals::of(&seeds.investments.investments);
    assert!((totals.invested - 5_500.0).abs() < f64::EPSILON);
    assert!((totals.co2_tonnes - 89.5).abs() < 1e-9);
}
