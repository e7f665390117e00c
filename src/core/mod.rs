pub mod add;
pub mod calculator;
pub mod coerce;
pub mod config;
pub mod dashboard;
pub mod del;
pub mod edit;
pub mod import;
pub mod log;
pub mod logic;
pub mod persist;
pub mod store;
pub mod view;
