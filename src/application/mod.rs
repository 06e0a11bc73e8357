// Application layer - Use cases and the traits they depend on
pub mod chart_renderer;
pub mod dashboard_service;
pub mod drawing;
pub mod errors;
pub mod sensor_source;
