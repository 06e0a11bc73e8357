// Domain layer - Sensor readings, series and chart models
pub mod chart;
pub mod dashboard;
pub mod sensor;
