// Chart renderer - Maps readings onto a line chart bound to a drawing context
use crate::application::drawing::DrawingContext;
use crate::application::errors::RenderError;
use crate::domain::chart::{ChartData, ChartSpec, LineChart};
use crate::domain::sensor::SensorReading;

/// Build a line chart from `readings` and attach it to `ctx`.
///
/// Point `i` of the chart is reading `i`; nothing is sorted or dropped.
pub fn create_chart(
    ctx: &dyn DrawingContext,
    readings: &[SensorReading],
    label: &str,
    color: &str,
) -> Result<LineChart, RenderError> {
    let chart = LineChart::new(
        ChartSpec::line(label, color),
        ChartData::from_readings(readings),
    );
    ctx.attach(chart.clone())?;

    tracing::debug!(
        "Attached chart '{}' with {} points to {}",
        label,
        chart.data.len(),
        ctx.region_id()
    );

    Ok(chart)
}
