pub mod commissions;
pub mod generate;
pub mod health;
pub mod projects;
