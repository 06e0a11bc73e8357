// HTTP request handlers
use crate::infrastructure::http_response::{html_response, svg_response};
use crate::infrastructure::regions::RegionState;
use crate::infrastructure::svg::render_line_chart;
use crate::presentation::app_state::AppState;
use crate::presentation::page::render_page;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// The dashboard page with every region
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let html = match render_page(&state.dashboard, &state.board) {
        Ok(html) => html,
        Err(e) => {
            tracing::error!("Dashboard page failed: {:#}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    match html_response(html) {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// One region's chart as SVG
pub async fn region_chart(
    Path(region): Path<String>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    match state.board.state(&region) {
        Ok(Some(RegionState::Rendered(chart))) => match render_line_chart(&chart) {
            Ok(svg) => match svg_response(svg) {
                Ok(response) => response,
                Err(status) => status.into_response(),
            },
            Err(e) => {
                tracing::error!("Chart for {} failed to render: {}", region, e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        },
        Ok(Some(RegionState::Empty)) => StatusCode::NO_CONTENT.into_response(),
        Ok(None) => {
            tracing::debug!("Unknown region requested: {}", region);
            StatusCode::NOT_FOUND.into_response()
        }
        Err(e) => {
            tracing::error!("{}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
