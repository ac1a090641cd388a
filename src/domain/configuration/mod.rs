pub mod app_config;
pub mod parse;

pub use app_config::{AppConfig, DEFAULT_CONFIG_FILE, GeminiApiConfig};
pub use parse::parse_config_content;
