// Rendering seam between the orchestrator and the display regions
use crate::application::errors::RenderError;
use crate::domain::chart::LineChart;

/// An addressable surface a chart can be attached to.
pub trait DrawingContext: Send + Sync {
    fn region_id(&self) -> &str;

    /// Replace whatever the surface shows with `chart`.
    fn attach(&self, chart: LineChart) -> Result<(), RenderError>;
}

/// Resolves named display regions to drawing contexts.
pub trait DrawingSurface: Send + Sync {
    fn context(&self, region_id: &str) -> Result<Box<dyn DrawingContext>, RenderError>;
}
