// HTML page hosting one section per display region
use crate::domain::dashboard::Dashboard;
use crate::infrastructure::regions::RegionBoard;
use crate::infrastructure::svg::render_line_chart;
use anyhow::Context;
use askama::Template;

struct RegionView<'a> {
    label: &'a str,
    id: &'a str,
    /// Empty until the region has a chart.
    svg: String,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardTemplate<'a> {
    title: &'a str,
    regions: Vec<RegionView<'a>>,
}

/// Regions without a chart are left empty.
pub fn render_page(dashboard: &Dashboard, board: &RegionBoard) -> anyhow::Result<String> {
    let mut regions = Vec::with_capacity(dashboard.series.len());
    for series in &dashboard.series {
        let svg = match board.chart(&series.target_region_id)? {
            Some(chart) => render_line_chart(&chart)
                .with_context(|| format!("Failed to render {}", series.target_region_id))?,
            None => String::new(),
        };
        regions.push(RegionView {
            label: &series.label,
            id: &series.target_region_id,
            svg,
        });
    }

    DashboardTemplate {
        title: &dashboard.title,
        regions,
    }
    .render()
    .context("Failed to render dashboard page")
}
