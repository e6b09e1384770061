pub mod chart_placeholder;
pub mod corporate_sidebar;
pub mod daisy_ui;
pub mod footer;
pub mod header;
pub mod kpi_card;
pub mod nav_link;
pub mod project_card;
