pub mod add;
pub mod calc;
pub mod config;
pub mod dashboard;
pub mod del;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod show;
