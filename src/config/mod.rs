pub mod app_config;
pub mod model;

pub use app_config::{AppConfig, ConfigError, ProbeSettings, load_config};
