use crate::application::dashboard_service::ExecutionMode;
use crate::domain::dashboard::{Dashboard, DEFAULT_TITLE};
use crate::domain::sensor::SeriesRequest;
use crate::infrastructure::http_source::{OrderBy, ReadingsFilter};
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DashboardConfig {
    #[serde(default)]
    pub source: SourceSettings,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub dashboard: DashboardSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub timeout_secs: Option<u64>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    pub order_by: Option<OrderBy>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardSettings {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub mode: ExecutionMode,
    #[serde(default = "SeriesRequest::defaults")]
    pub series: Vec<SeriesRequest>,
}

fn default_base_url() -> String {
    "http://127.0.0.1:6543".to_string()
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            start_date: None,
            end_date: None,
            order_by: None,
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            mode: ExecutionMode::default(),
            series: SeriesRequest::defaults(),
        }
    }
}

impl SourceSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn filter(&self) -> ReadingsFilter {
        ReadingsFilter {
            start_date: self.start_date,
            end_date: self.end_date,
            order_by: self.order_by,
        }
    }
}

impl DashboardSettings {
    pub fn layout(&self) -> Dashboard {
        Dashboard::new(self.title.clone(), self.series.clone())
    }
}

/// Defaults, then `config/dashboard.*` if present, then `DASHBOARD_*`
/// environment variables (`__` separates sections).
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(
            config::Environment::with_prefix("DASHBOARD")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
