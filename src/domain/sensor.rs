// Sensor domain model
use serde::Deserialize;
use std::fmt;

/// The kinds of sensor exposed by the upstream API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorType {
    Temperature,
    Humidity,
    Light,
}

impl SensorType {
    pub const ALL: [SensorType; 3] = [
        SensorType::Temperature,
        SensorType::Humidity,
        SensorType::Light,
    ];

    /// Path segment used by the upstream resource `/api/{sensor_type}`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorType::Temperature => "temperature",
            SensorType::Humidity => "humidity",
            SensorType::Light => "light",
        }
    }
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One timestamp/value pair as returned by the data source.
///
/// Extra fields sent by the upstream (`id`, `unit`) are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SensorReading {
    pub timestamp: String,
    pub value: f64,
}

impl SensorReading {
    pub fn new(timestamp: impl Into<String>, value: f64) -> Self {
        Self {
            timestamp: timestamp.into(),
            value,
        }
    }
}

/// Static description of one chart: what to fetch, how to style it and
/// where to draw it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeriesRequest {
    pub sensor_type: SensorType,
    pub label: String,
    pub color: String,
    pub target_region_id: String,
}

impl SeriesRequest {
    pub fn new(
        sensor_type: SensorType,
        label: impl Into<String>,
        color: impl Into<String>,
        target_region_id: impl Into<String>,
    ) -> Self {
        Self {
            sensor_type,
            label: label.into(),
            color: color.into(),
            target_region_id: target_region_id.into(),
        }
    }

    /// The built-in series for a sensor type.
    pub fn for_sensor(sensor_type: SensorType) -> Self {
        match sensor_type {
            SensorType::Temperature => {
                Self::new(sensor_type, "Temperature (°C)", "#ff6384", "temperatureChart")
            }
            SensorType::Humidity => {
                Self::new(sensor_type, "Humidity (%)", "#36a2eb", "humidityChart")
            }
            SensorType::Light => Self::new(sensor_type, "Light (lux)", "#ffce56", "lightChart"),
        }
    }

    /// Temperature, humidity and light, in that order.
    pub fn defaults() -> Vec<SeriesRequest> {
        SensorType::ALL.into_iter().map(Self::for_sensor).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensor_type_path_segment_matches_wire_name() {
        for sensor_type in SensorType::ALL {
            let wire = format!("\"{}\"", sensor_type.as_str());
            assert_eq!(serde_json::from_str::<SensorType>(&wire).unwrap(), sensor_type);
        }
        assert!(serde_json::from_str::<SensorType>("\"pressure\"").is_err());
        assert_eq!(SensorType::Humidity.to_string(), "humidity");
    }

    #[test]
    fn test_reading_ignores_upstream_extra_fields() {
        let body = r#"[{"id": 7, "value": 21.5, "unit": "C", "timestamp": "2024-01-01T00:00:00"}]"#;
        let readings: Vec<SensorReading> = serde_json::from_str(body).unwrap();

        assert_eq!(readings, vec![SensorReading::new("2024-01-01T00:00:00", 21.5)]);
    }

    #[test]
    fn test_reading_accepts_integer_values() {
        let reading: SensorReading =
            serde_json::from_str(r#"{"timestamp": "t1", "value": 300}"#).unwrap();
        assert_eq!(reading.value, 300.0);
    }

    #[test]
    fn test_default_series_have_distinct_styling() {
        let series = SeriesRequest::defaults();
        let types: Vec<SensorType> = series.iter().map(|s| s.sensor_type).collect();
        assert_eq!(types, SensorType::ALL.to_vec());

        assert_eq!(series[0].label, "Temperature (°C)");
        assert_eq!(series[0].color, "#ff6384");
        assert_eq!(series[0].target_region_id, "temperatureChart");
        assert_eq!(series[1].color, "#36a2eb");
        assert_eq!(series[1].target_region_id, "humidityChart");
        assert_eq!(series[2].label, "Light (lux)");
        assert_eq!(series[2].color, "#ffce56");
        assert_eq!(series[2].target_region_id, "lightChart");
    }

    #[test]
    fn test_series_request_deserializes_from_config_shape() {
        let json = r##"{"sensor_type": "light", "label": "Lux", "color": "#000", "target_region_id": "lux"}"##;
        let request: SeriesRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request, SeriesRequest::new(SensorType::Light, "Lux", "#000", "lux"));
    }
}
