use greyn_core::Area;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/carbon/marketplace")]
    Marketplace,
    #[at("/carbon/cart")]
    Cart,
    #[at("/admin")]
    Admin,
    #[at("/corporate")]
    Corporate,
    #[at("/corporate/dashboard")]
    CorporateDashboard,
    #[at("/corporate/emissions")]
    Emissions,
    #[at("/corporate/campaigns")]
    Campaigns,
    #[at("/corporate/employees")]
    Employees,
    #[at("/corporate/reports")]
    Reports,
    #[at("/corporate/reports/:id")]
    Report { id: String },
    #[at("/corporate/volunteers")]
    Volunteers,
    #[at("/dashboard")]
    Dashboard,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// The role-gated area this route belongs to.
    #[must_use]
    pub const fn area(&self) -> Area {
        match self {
            Self::Admin => Area::Admin,
            Self::Corporate
            | Self::CorporateDashboard
            | Self::Emissions
            | Self::Campaigns
            | Self::Employees
            | Self::Reports
            | Self::Report { .. }
            | Self::Volunteers => Area::Corporate,
            Self::Home | Self::Marketplace | Self::Cart | Self::Dashboard | Self::NotFound => {
                Area::Public
            }
        }
    }

    /// Where a bare section route lands.
    #[must_use]
    pub const fn redirect(&self) -> Option<Self> {
        match self {
            Self::Corporate => Some(Self::CorporateDashboard),
            _ => None,
        }
    }

    /// The sidebar entry to highlight inside the corporate workspace.
    #[must_use]
    pub fn corporate_section(&self) -> Option<Self> {
        match self {
            Self::Corporate | Self::CorporateDashboard => Some(Self::CorporateDashboard),
            Self::Report { .. } => Some(Self::Reports),
            Self::Emissions
            | Self::Campaigns
            | Self::Employees
            | Self::Reports
            | Self::Volunteers => Some(self.clone()),
            _ => None,
        }
    }
}
