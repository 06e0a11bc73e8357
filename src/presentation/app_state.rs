// Application state for HTTP handlers
use crate::domain::dashboard::Dashboard;
use crate::infrastructure::regions::RegionBoard;

#[derive(Clone)]
pub struct AppState {
    pub dashboard: Dashboard,
    pub board: RegionBoard,
}
