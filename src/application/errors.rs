// Error types for fetching and rendering series
use thiserror::Error;

/// Why a series' readings could not be retrieved.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}: {body}")]
    Status { url: String, status: u16, body: String },
    #[error("malformed readings from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Why a chart could not be bound to its drawing context.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RenderError {
    #[error("display region not found: {0}")]
    MissingRegion(String),
    #[error("drawing context for {region} is unavailable: {reason}")]
    InvalidContext { region: String, reason: String },
}

/// Terminal failure of one series' fetch-and-render pipeline.
#[derive(Debug, Error)]
pub enum SeriesError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("series task aborted: {0}")]
    Aborted(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum DashboardError {
    #[error("dashboard has already been started")]
    AlreadyStarted,
}
