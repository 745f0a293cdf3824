//! Ticket office driver: reads configuration from the environment, sells a
//! day's worth of tickets and renders the resulting reports.

pub mod config;
pub mod office;

pub use config::{AppConfig, OutputFormat};
pub use office::{DayReport, run_day};
