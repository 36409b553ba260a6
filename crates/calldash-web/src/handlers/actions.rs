//! Form handlers for user actions
//!
//! Every action redirects back to the dashboard, which renders the outcome.

use crate::controller::Confirm;
use crate::state::AppState;
use axum::extract::{Form, Path, State};
use axum::response::Redirect;
use calldash_core::CallId;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

/// Initiate call form
#[derive(Debug, Deserialize)]
pub struct InitiateForm {
    /// Number to dial, as typed
    #[serde(default)]
    pub phone_number: String,
}

/// Delete call form; the page script sets `confirm` to `yes` once the user agrees
#[derive(Debug, Default, Deserialize)]
pub struct DeleteForm {
    /// `yes` when the user confirmed
    #[serde(default)]
    pub confirm: String,
}

impl Confirm for DeleteForm {
    fn confirm(&self, prompt: &str) -> bool {
        let confirmed = self.confirm.eq_ignore_ascii_case("yes");
        debug!(prompt, confirmed, "Delete confirmation");
        confirmed
    }
}

fn back_to_dashboard() -> Redirect {
    Redirect::to("/")
}

/// Initiate a call
pub async fn initiate_call(State(state): State<Arc<AppState>>, Form(form): Form<InitiateForm>) -> Redirect {
    if let Err(e) = state.controller.initiate_call(&form.phone_number).await {
        debug!(reason = %e, "Initiate call not completed");
    }
    back_to_dashboard()
}

/// Select a call and show its details
pub async fn select_call(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Redirect {
    let id = CallId::new(id);
    if let Err(e) = state.controller.select_call(&id).await {
        debug!(call_id = %id, reason = %e, "Select call not completed");
    }
    back_to_dashboard()
}

/// Delete a call after confirmation
pub async fn delete_call(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<DeleteForm>,
) -> Redirect {
    let id = CallId::new(id);
    if let Err(e) = state.controller.delete_call(&id, &form).await {
        debug!(call_id = %id, reason = %e, "Delete call not completed");
    }
    back_to_dashboard()
}

/// Dismiss the error message
pub async fn dismiss_error(State(state): State<Arc<AppState>>) -> Redirect {
    state.controller.dismiss_error();
    back_to_dashboard()
}
