// Dashboard domain model
use super::sensor::SeriesRequest;

pub const DEFAULT_TITLE: &str = "Sensor Dashboard";

/// The page layout: a title and the series drawn on it, in display order.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub title: String,
    pub series: Vec<SeriesRequest>,
}

impl Dashboard {
    pub fn new(title: String, series: Vec<SeriesRequest>) -> Self {
        Self { title, series }
    }

    pub fn region_ids(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|s| s.target_region_id.as_str())
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE.to_string(), SeriesRequest::defaults())
    }
}
