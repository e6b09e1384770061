//! Employee engagement leaderboard.
use crate::filter::{FilterSet, Selection, TextSearch};
use crate::numbers::{mean, progress_pct, round_1dp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// XP at which the progress bar is full.
pub const XP_BAR_MAX: f64 = 3_500.0;

/// Select-box value meaning "every role".
pub const ALL_ROLES: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeRole {
    Admin,
    Sustainability,
    #[serde(rename = "HR")]
    Hr,
    Finance,
    Employee,
}

impl EmployeeRole {
    pub const ALL: [Self; 5] = [
        Self::Admin,
        Self::Sustainability,
        Self::Hr,
        Self::Finance,
        Self::Employee,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Sustainability => "Sustainability",
            Self::Hr => "HR",
            Self::Finance => "Finance",
            Self::Employee => "Employee",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: EmployeeRole,
    pub department: String,
    pub xp_points: u32,
    pub volunteer_hours: u32,
    pub campaigns_participated: u32,
    pub join_date: NaiveDate,
}

impl Employee {
    #[must_use]
    pub fn xp_bar_width(&self) -> f64 {
        progress_pct(f64::from(self.xp_points), XP_BAR_MAX)
    }

    /// Initials for the avatar bubble.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSeed {
    pub employees: Vec<Employee>,
}

fn name_of(employee: &Employee) -> &str {
    &employee.name
}

fn email_of(employee: &Employee) -> &str {
    &employee.email
}

fn department_of(employee: &Employee) -> &str {
    &employee.department
}

/// Search box plus role filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeQuery {
    pub search: String,
    pub role: Selection<EmployeeRole>,
}

impl EmployeeQuery {
    #[must_use]
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = search.to_string();
        self
    }

    #[must_use]
    pub fn with_role_choice(mut self, choice: &str) -> Self {
        self.set_role_choice(choice);
        self
    }

    /// Apply a select-box value; `all` and unknown roles clear the filter.
    pub fn set_role_choice(&mut self, choice: &str) {
        self.role = if choice == ALL_ROLES {
            Selection::All
        } else {
            EmployeeRole::parse(choice).map_or(Selection::All, Selection::Only)
        };
    }

    #[must_use]
    pub fn role_choice(&self) -> &'static str {
        match self.role {
            Selection::All => ALL_ROLES,
            Selection::Only(role) => role.as_str(),
        }
    }

    /// Matching employees ordered by XP, highest first. Ties keep seed order.
    #[must_use]
    pub fn apply<'e>(&self, employees: &'e [Employee]) -> Vec<&'e Employee> {
        let role = self.role.clone();
        let filters = FilterSet::new()
            .with(TextSearch::new(
                &self.search,
                vec![name_of, email_of, department_of],
            ))
            .with(move |e: &Employee| role.admits(&e.role));
        let mut matches = filters.apply(employees);
        matches.sort_by(|a, b| b.xp_points.cmp(&a.xp_points));
        matches
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WorkforceSummary {
    pub head_count: usize,
    pub total_xp: u64,
    pub total_volunteer_hours: u64,
    /// Mean campaigns per employee, one decimal
    pub avg_campaigns: f64,
}

impl WorkforceSummary {
    #[must_use]
    pub fn of(employees: &[Employee]) -> Self {
        let campaigns: Vec<f64> = employees
            .iter()
            .map(|e| f64::from(e.campaigns_participated))
            .collect();
        Self {
            head_count: employees.len(),
            total_xp: employees.iter().map(|e| u64::from(e.xp_points)).sum(),
            total_volunteer_hours: employees.iter().map(|e| u64::from(e.volunteer_hours)).sum(),
            avg_campaigns: round_1dp(mean(&campaigns)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: &str, name: &str, role: EmployeeRole, dept: &str, xp: u32) -> Employee {
        Employee {
            id: id.into(),
            name: name.into(),
            email: format!("{}@company.com", name.to_lowercase().replace(' ', ".")),
            role,
            department: dept.into(),
            xp_points: xp,
            volunteer_hours: 10,
            campaigns_participated: 3,
            join_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
        }
    }

    fn staff() -> Vec<Employee> {
        vec![
            employee("1", "Sarah Johnson", EmployeeRole::Sustainability, "Operations", 2_450),
            employee("2", "Michael Chen", EmployeeRole::Admin, "Management", 3_200),
            employee("3", "Jessica Martinez", EmployeeRole::Employee, "Marketing", 1_560),
            employee("4", "Robert Taylor", EmployeeRole::Employee, "Engineering", 1_780),
        ]
    }

    #[test]
    fn sorted_by_xp_descending() {
        let staff = staff();
        let names: Vec<&str> = EmployeeQuery::default()
            .apply(&staff)
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["Michael Chen", "Sarah Johnson", "Robert Taylor", "Jessica Martinez"]
        );
    }

    #[test]
    fn search_covers_email_and_department() {
        let staff = staff();
        let by_email = EmployeeQuery::default().with_search("MICHAEL.CHEN@");
        assert_eq!(by_email.apply(&staff).len(), 1);
        let by_dept = EmployeeQuery::default().with_search("engin");
        assert_eq!(by_dept.apply(&staff)[0].id, "4");
    }

    #[test]
    fn role_filter_combines_with_search() {
        let staff = staff();
        let query = EmployeeQuery::default()
            .with_role_choice("Employee")
            .with_search("a");
        let ids: Vec<&str> = query.apply(&staff).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["4", "3"]);
        assert_eq!(query.role_choice(), "Employee");
        let cleared = query.with_role_choice(ALL_ROLES);
        assert!(cleared.role.is_all());
        assert!(
            EmployeeQuery::default()
                .with_search("nobody here")
                .apply(&staff)
                .is_empty()
        );
    }

    #[test]
    fn summary_and_bars() {
        let staff = staff();
        let summary = WorkforceSummary::of(&staff);
        assert_eq!(summary.head_count, 4);
        assert_eq!(summary.total_xp, 8_990);
        assert!((summary.avg_campaigns - 3.0).abs() < f64::EPSILON);
        assert!((WorkforceSummary::of(&[]).avg_campaigns).abs() < f64::EPSILON);
        assert!((staff[1].xp_bar_width() - 3_200.0 / 35.0).abs() < 1e-9);
        assert_eq!(staff[0].initials(), "SJ");
        let mut veteran = staff[1].clone();
        veteran.xp_points = 9_000;
        assert!((veteran.xp_bar_width() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn hr_role_keeps_its_label() {
        let role: EmployeeRole = serde_json::from_str("\"HR\"").unwrap();
        assert_eq!(role, EmployeeRole::Hr);
        assert_eq!(EmployeeRole::parse("HR"), Some(EmployeeRole::Hr));
    }
}
