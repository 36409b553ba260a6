//! JSON and health endpoints

use crate::controller::DashboardState;
use crate::state::AppState;
use axum::extract::State;
use axum::response::Json;
use std::sync::Arc;

/// Current dashboard state as JSON
pub async fn dashboard_state(State(state): State<Arc<AppState>>) -> Json<DashboardState> {
    Json(state.controller.snapshot())
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}
