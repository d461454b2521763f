use crate::application::metrics::{MetricFormatter, NumberLocale};
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct RenderConfig {
    pub server: ServerSettings,
    pub backend: BackendSettings,
    pub display: DisplaySettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl BackendSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplaySettings {
    pub currency_symbol: String,
    pub locale: NumberLocale,
}

impl DisplaySettings {
    pub fn formatter(&self) -> MetricFormatter {
        MetricFormatter::new(self.currency_symbol.clone(), self.locale)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
}

/// Load `config/render` (optional) overridden by `BUILDAI__SECTION__KEY` variables
pub fn load_render_config() -> anyhow::Result<RenderConfig> {
    let builder = config::Config::builder()
        .add_source(File::with_name("config/render").required(false))
        .add_source(Environment::with_prefix("BUILDAI").separator("__"));

    Ok(build_render_config(builder)?)
}

/// Apply defaults underneath whatever sources `builder` already has
pub fn build_render_config(
    builder: ConfigBuilder<DefaultState>,
) -> Result<RenderConfig, ConfigError> {
    builder
        .set_default("server.bind", "0.0.0.0:8080")?
        .set_default("backend.base_url", "http://127.0.0.1:5000")?
        .set_default("backend.timeout_secs", 30)?
        .set_default("display.currency_symbol", "₹")?
        .set_default("display.locale", "en-US")?
        .set_default("logging.level", "info")?
        .build()?
        .try_deserialize()
}
