//! Corporate dashboard KPI cards.
use serde::{Deserialize, Serialize};

/// Translation keys of the chart panels shown under the KPI grid.
pub const CHART_PANELS: [&str; 4] = [
    "dashboard.chart.emissions_trend",
    "dashboard.chart.donations_vs_offsets",
    "dashboard.chart.volunteer_participation",
    "dashboard.chart.esg_breakdown",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeTrend {
    #[default]
    Positive,
    Negative,
    Neutral,
}

/// One KPI card: a preformatted value with its period-over-period change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiSnapshot {
    /// Also the translation key suffix of the card title
    pub id: String,
    pub value: String,
    #[serde(default)]
    pub unit: Option<String>,
    pub change: String,
    #[serde(default)]
    pub trend: ChangeTrend,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiSeed {
    pub kpis: Vec<KpiSnapshot>,
}

impl KpiSeed {
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&KpiSnapshot> {
        self.kpis.iter().find(|kpi| kpi.id == id)
    }
}
