//! Route definitions for the dashboard

use crate::{
    handlers::{actions, api, pages},
    state::AppState,
};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

/// Build the dashboard router
pub fn build_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Pages
        .route("/", get(pages::dashboard))
        .route("/fragments/calls", get(pages::calls_fragment))
        // User actions
        .route("/calls/initiate", post(actions::initiate_call))
        .route("/calls/:id", get(actions::select_call))
        .route("/calls/:id/delete", post(actions::delete_call))
        .route("/error/dismiss", post(actions::dismiss_error))
        // JSON
        .route("/api/state", get(api::dashboard_state))
        // Health check
        .route("/health", get(api::health_check))
}
