// Dashboard service - Fetches every series once and binds it to its region
use crate::application::chart_renderer::create_chart;
use crate::application::drawing::DrawingSurface;
use crate::application::errors::{DashboardError, SeriesError};
use crate::application::sensor_source::SensorSource;
use crate::domain::sensor::SeriesRequest;
use serde::Deserialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// How the series pipelines are scheduled relative to each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Every series runs as its own task.
    #[default]
    Concurrent,
    /// Each series is awaited before the next one starts.
    Sequential,
}

/// Result of one series' fetch-and-render pipeline.
#[derive(Debug)]
pub struct SeriesOutcome {
    pub request: SeriesRequest,
    /// Number of points rendered.
    pub result: Result<usize, SeriesError>,
}

impl SeriesOutcome {
    pub fn is_rendered(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes in configuration order.
#[derive(Debug)]
pub struct DashboardReport {
    pub outcomes: Vec<SeriesOutcome>,
}

impl DashboardReport {
    pub fn rendered_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_rendered()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &SeriesOutcome> {
        self.outcomes.iter().filter(|o| !o.is_rendered())
    }
}

#[derive(Clone)]
pub struct DashboardService {
    source: Arc<dyn SensorSource>,
    surface: Arc<dyn DrawingSurface>,
    series: Vec<SeriesRequest>,
    mode: ExecutionMode,
    started: Arc<AtomicBool>,
}

impl DashboardService {
    pub fn new(
        source: Arc<dyn SensorSource>,
        surface: Arc<dyn DrawingSurface>,
        series: Vec<SeriesRequest>,
        mode: ExecutionMode,
    ) -> Self {
        Self {
            source,
            surface,
            series,
            mode,
            started: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Populate every configured region. Only the first call does any work.
    ///
    /// A failing series is reported in its own outcome and never stops the
    /// others from rendering.
    pub async fn start(&self) -> Result<DashboardReport, DashboardError> {
        if self.started.swap(true, Ordering::SeqCst) {
            return Err(DashboardError::AlreadyStarted);
        }

        let start_time = Instant::now();
        tracing::info!("Rendering {} series ({:?})", self.series.len(), self.mode);

        let outcomes = match self.mode {
            ExecutionMode::Concurrent => self.run_concurrent().await,
            ExecutionMode::Sequential => self.run_sequential().await,
        };

        for outcome in &outcomes {
            match &outcome.result {
                Ok(points) => tracing::info!(
                    sensor = %outcome.request.sensor_type,
                    region = %outcome.request.target_region_id,
                    points,
                    "Series rendered"
                ),
                Err(e) => tracing::error!(
                    sensor = %outcome.request.sensor_type,
                    region = %outcome.request.target_region_id,
                    "Series failed: {}",
                    e
                ),
            }
        }

        let report = DashboardReport { outcomes };
        tracing::info!(
            "Dashboard ready: {}/{} series rendered in {}ms",
            report.rendered_count(),
            report.outcomes.len(),
            start_time.elapsed().as_millis()
        );

        Ok(report)
    }

    async fn run_sequential(&self) -> Vec<SeriesOutcome> {
        let mut outcomes = Vec::with_capacity(self.series.len());
        for request in &self.series {
            let result =
                render_series(self.source.as_ref(), self.surface.as_ref(), request).await;
            outcomes.push(SeriesOutcome {
                request: request.clone(),
                result,
            });
        }
        outcomes
    }

    async fn run_concurrent(&self) -> Vec<SeriesOutcome> {
        let tasks: Vec<_> = self
            .series
            .iter()
            .map(|request| {
                let source = self.source.clone();
                let surface = self.surface.clone();
                let request = request.clone();
                tokio::spawn(async move {
                    render_series(source.as_ref(), surface.as_ref(), &request).await
                })
            })
            .collect();

        let joined = futures::future::join_all(tasks).await;

        self.series
            .iter()
            .cloned()
            .zip(joined)
            .map(|(request, joined)| SeriesOutcome {
                request,
                result: joined.unwrap_or_else(|e| Err(SeriesError::Aborted(e.to_string()))),
            })
            .collect()
    }
}

/// Resolve the region, fetch its readings and bind the chart.
pub async fn render_series(
    source: &dyn SensorSource,
    surface: &dyn DrawingSurface,
    request: &SeriesRequest,
) -> Result<usize, SeriesError> {
    let ctx = surface.context(&request.target_region_id)?;
    let readings = source.fetch_readings(request.sensor_type).await?;
    let chart = create_chart(ctx.as_ref(), &readings, &request.label, &request.color)?;
    Ok(chart.data.len())
}
