// Named display regions that charts are bound to
use crate::application::drawing::{DrawingContext, DrawingSurface};
use crate::application::errors::RenderError;
use crate::domain::chart::LineChart;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, PartialEq)]
pub enum RegionState {
    /// Registered but never populated.
    Empty,
    Rendered(LineChart),
}

/// The set of regions on the page, shared between the renderer and the
/// HTTP handlers.
#[derive(Debug, Clone)]
pub struct RegionBoard {
    regions: Arc<RwLock<HashMap<String, RegionState>>>,
}

impl RegionBoard {
    pub fn with_regions<I, S>(region_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let regions = region_ids
            .into_iter()
            .map(|id| (id.into(), RegionState::Empty))
            .collect();
        Self {
            regions: Arc::new(RwLock::new(regions)),
        }
    }

    /// `Ok(None)` for an unknown region.
    pub fn state(&self, region_id: &str) -> Result<Option<RegionState>, RenderError> {
        let regions = self.regions.read().map_err(|_| poisoned(region_id))?;
        Ok(regions.get(region_id).cloned())
    }

    pub fn chart(&self, region_id: &str) -> Result<Option<LineChart>, RenderError> {
        match self.state(region_id)? {
            Some(RegionState::Rendered(chart)) => Ok(Some(chart)),
            _ => Ok(None),
        }
    }

    /// Panic while holding the write lock so later access sees it poisoned.
    #[cfg(test)]
    pub fn poison(&self) {
        let regions = self.regions.clone();
        let _ = std::thread::spawn(move || {
            let _guard = regions.write().unwrap();
            panic!("region writer panicked");
        })
        .join();
    }
}

fn poisoned(region_id: &str) -> RenderError {
    RenderError::InvalidContext {
        region: region_id.to_string(),
        reason: "region lock poisoned".to_string(),
    }
}

impl DrawingSurface for RegionBoard {
    fn context(&self, region_id: &str) -> Result<Box<dyn DrawingContext>, RenderError> {
        let regions = self.regions.read().map_err(|_| poisoned(region_id))?;

        if !regions.contains_key(region_id) {
            return Err(RenderError::MissingRegion(region_id.to_string()));
        }

        Ok(Box::new(RegionContext {
            region_id: region_id.to_string(),
            regions: self.regions.clone(),
        }))
    }
}

/// Drawing context for one region of a [`RegionBoard`].
pub struct RegionContext {
    region_id: String,
    regions: Arc<RwLock<HashMap<String, RegionState>>>,
}

impl DrawingContext for RegionContext {
    fn region_id(&self) -> &str {
        &self.region_id
    }

    fn attach(&self, chart: LineChart) -> Result<(), RenderError> {
        let mut regions = self
            .regions
            .write()
            .map_err(|_| poisoned(&self.region_id))?;

        match regions.get_mut(&self.region_id) {
            Some(state) => {
                *state = RegionState::Rendered(chart);
                Ok(())
            }
            None => Err(RenderError::MissingRegion(self.region_id.clone())),
        }
    }
}
