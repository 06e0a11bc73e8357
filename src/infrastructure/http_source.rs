// HTTP data source for sensor readings
use crate::application::errors::FetchError;
use crate::application::sensor_source::SensorSource;
use crate::domain::sensor::{SensorReading, SensorType};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::time::Duration;

/// Date format accepted by the upstream `start-date`/`end-date` parameters.
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Server-side ordering the upstream can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderBy {
    Timestamp,
    Value,
}

impl OrderBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderBy::Timestamp => "timestamp",
            OrderBy::Value => "value",
        }
    }
}

/// Optional query parameters; the default sends none.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadingsFilter {
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    pub order_by: Option<OrderBy>,
}

impl ReadingsFilter {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(order_by) = self.order_by {
            pairs.push(("order-by", order_by.as_str().to_string()));
        }
        if let Some(start) = self.start_date {
            pairs.push(("start-date", start.format(DATE_FORMAT).to_string()));
        }
        if let Some(end) = self.end_date {
            pairs.push(("end-date", end.format(DATE_FORMAT).to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone)]
pub struct HttpSensorSource {
    base_url: String,
    client: reqwest::Client,
    filter: ReadingsFilter,
}

impl HttpSensorSource {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
        filter: ReadingsFilter,
    ) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
            filter,
        })
    }

    fn build_url(&self, sensor_type: SensorType) -> String {
        let mut url = format!("{}/api/{}", self.base_url, sensor_type.as_str());
        let query: Vec<String> = self
            .filter
            .query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
            .collect();
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query.join("&"));
        }
        url
    }
}

#[async_trait]
impl SensorSource for HttpSensorSource {
    async fn fetch_readings(
        &self,
        sensor_type: SensorType,
    ) -> Result<Vec<SensorReading>, FetchError> {
        let url = self.build_url(sensor_type);
        tracing::debug!("Fetching {} readings from {}", sensor_type, url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        let readings: Vec<SensorReading> =
            serde_json::from_str(&body).map_err(|source| FetchError::Decode {
                url: url.clone(),
                source,
            })?;

        tracing::debug!("Got {} {} readings", readings.len(), sensor_type);
        Ok(readings)
    }
}
