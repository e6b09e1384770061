pub mod assets;
pub mod reports;
pub mod scenarios;
pub mod tester;

pub use assets::TesterAssets;
pub use scenarios::{get_scenario, list_scenarios};
pub use tester::*;
