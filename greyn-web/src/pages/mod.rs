pub mod access;
pub mod admin;
pub mod cart;
pub mod corporate;
pub mod home;
pub mod investor_dashboard;
pub mod marketplace;
pub mod not_found;
