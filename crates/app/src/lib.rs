//! Application wiring: configuration loading and the walkthrough scenarios
//! run by the `stockbook` binary.

pub mod config;
pub mod scenarios;

pub use config::{AppConfig, ConfigError};
