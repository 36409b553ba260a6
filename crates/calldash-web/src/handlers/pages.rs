//! Page handlers rendering the dashboard HTML

use crate::state::AppState;
use crate::view;
use axum::extract::State;
use axum::response::Html;
use std::sync::Arc;

/// Full dashboard page; shows the pending success notice once
pub async fn dashboard(State(state): State<Arc<AppState>>) -> Html<String> {
    let notice = state.controller.take_notice();
    let mut snapshot = state.controller.snapshot();
    snapshot.notice = notice;

    Html(view::render_page(&snapshot, state.config.dashboard.poll_interval()))
}

/// Call history panel, polled by the page
pub async fn calls_fragment(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(view::render_call_list(&state.controller.snapshot()))
}
