// Data source trait for sensor readings
use crate::application::errors::FetchError;
use crate::domain::sensor::{SensorReading, SensorType};
use async_trait::async_trait;

#[async_trait]
pub trait SensorSource: Send + Sync {
    /// Fetch the current readings for a sensor type, in the order the source
    /// returns them.
    async fn fetch_readings(
        &self,
        sensor_type: SensorType,
    ) -> Result<Vec<SensorReading>, FetchError>;
}
