// Chart domain models
use super::sensor::SensorReading;

pub const TIME_AXIS_LABEL: &str = "Time";
pub const VALUE_AXIS_LABEL: &str = "Value";
pub const DEFAULT_SMOOTHING: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartKind {
    Line,
}

/// Presentation settings for a single chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub x_label: String,
    pub y_label: String,
    pub series_label: String,
    pub color: String,
    /// Curve tension, 0.0 draws straight segments.
    pub smoothing: f64,
    pub responsive: bool,
}

impl ChartSpec {
    pub fn line(series_label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            kind: ChartKind::Line,
            x_label: TIME_AXIS_LABEL.to_string(),
            y_label: VALUE_AXIS_LABEL.to_string(),
            series_label: series_label.into(),
            color: color.into(),
            smoothing: DEFAULT_SMOOTHING,
            responsive: true,
        }
    }
}

/// Category labels and values, positionally paired.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartData {
    /// Keeps the source order; reading `i` becomes point `i`.
    pub fn from_readings(readings: &[SensorReading]) -> Self {
        let (labels, values) = readings
            .iter()
            .map(|r| (r.timestamp.clone(), r.value))
            .unzip();
        Self { labels, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest and largest value, `None` when empty.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.values.iter().copied().fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub spec: ChartSpec,
    pub data: ChartData,
}

impl LineChart {
    pub fn new(spec: ChartSpec, data: ChartData) -> Self {
        Self { spec, data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_spec_uses_fixed_axes_and_smoothing() {
        let spec = ChartSpec::line("Humidity (%)", "#36a2eb");
        assert_eq!(spec.kind, ChartKind::Line);
        assert_eq!(spec.x_label, "Time");
        assert_eq!(spec.y_label, "Value");
        assert_eq!(spec.smoothing, 0.1);
        assert!(spec.responsive);
        assert_eq!(spec.series_label, "Humidity (%)");
        assert_eq!(spec.color, "#36a2eb");
    }

    #[test]
    fn test_from_readings_preserves_source_order() {
        let readings = vec![
            SensorReading::new("t1", 30.0),
            SensorReading::new("t2", 10.0),
            SensorReading::new("t3", 20.0),
        ];
        let data = ChartData::from_readings(&readings);

        assert_eq!(data.labels, vec!["t1", "t2", "t3"]);
        assert_eq!(data.values, vec![30.0, 10.0, 20.0]);
        assert_eq!(data.len(), 3);
    }

    #[test]
    fn test_from_empty_readings() {
        let data = ChartData::from_readings(&[]);
        assert!(data.is_empty());
        assert!(data.labels.is_empty());
        assert_eq!(data.value_range(), None);
    }

    #[test]
    fn test_value_range() {
        let data = ChartData::from_readings(&[
            SensorReading::new("a", 2.5),
            SensorReading::new("b", -1.0),
            SensorReading::new("c", 7.0),
        ]);
        assert_eq!(data.value_range(), Some((-1.0, 7.0)));
    }
}
