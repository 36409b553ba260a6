//! Dashboard controller
//!
//! Owns the single UI state container, turns user intents into backend calls and
//! reconciles the responses. Background refresh failures are logged only; user
//! action failures become a dismissable message in the state.

use crate::backend::CallBackend;
use crate::error::ActionError;
use calldash_core::types::InitiateCallRequest;
use calldash_core::{Call, CallId, CallListEntry, PHONE_NUMBER_REQUIRED};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, error, info, warn};
use validator::{Validate, ValidationErrors};

/// Fallback message when initiating a call fails without a backend message
pub const INITIATE_FAILED: &str = "Failed to initiate call";

/// Fallback message when loading call details fails without a backend message
pub const SELECT_FAILED: &str = "Failed to load call details";

/// Fallback message when deleting a call fails without a backend message
pub const DELETE_FAILED: &str = "Failed to delete call";

/// Confirmation prompt shown before deleting a call
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this call?";

/// Acknowledgment shown after a call was initiated
pub const INITIATED_NOTICE: &str = "Call initiated successfully!";

/// Everything the dashboard view renders
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardState {
    /// Calls in server order, replaced wholesale on every refresh
    pub calls: Vec<Call>,
    /// Full snapshot of the selected call
    pub selected: Option<Call>,
    /// Pending phone number input
    pub phone_input: String,
    /// True while an initiate request is in flight
    pub initiating: bool,
    /// Last user-facing error
    pub error: Option<String>,
    /// One-shot success acknowledgment
    pub notice: Option<String>,
    /// When the list was last replaced by a backend response
    pub last_refreshed: Option<DateTime<Utc>>,
}

impl DashboardState {
    /// List view projection of the calls
    #[must_use]
    pub fn entries(&self) -> Vec<CallListEntry> {
        self.calls.iter().map(CallListEntry::from).collect()
    }

    /// Whether `id` is the selected call
    #[must_use]
    pub fn is_selected(&self, id: &CallId) -> bool {
        self.selected.as_ref().is_some_and(|call| &call.id == id)
    }
}

/// Result of a list refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The list was replaced with this many calls
    Applied(usize),
    /// A newer refresh already landed; this response was dropped
    Stale,
    /// The backend call failed; the previous list is kept
    Failed,
}

/// Interactive gate for destructive actions
pub trait Confirm: Send + Sync {
    /// Ask the user; `true` means go ahead
    fn confirm(&self, prompt: &str) -> bool;
}

impl Confirm for bool {
    fn confirm(&self, _prompt: &str) -> bool {
        *self
    }
}

#[derive(Debug, Default)]
struct Shared {
    view: DashboardState,
    /// Sequence number of the newest list response applied
    list_applied: u64,
    /// Sequence number of the newest detail request issued
    detail_latest: u64,
}

/// Releases the initiate loading flag on every exit path
struct LoadingGuard {
    shared: Arc<RwLock<Shared>>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.shared.write().view.initiating = false;
    }
}

/// Presentation state machine for the call dashboard
#[derive(Clone)]
pub struct DashboardController {
    backend: Arc<dyn CallBackend>,
    shared: Arc<RwLock<Shared>>,
    list_issued: Arc<AtomicU64>,
}

impl fmt::Debug for DashboardController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashboardController")
            .field("backend", &self.backend.name())
            .field("calls", &self.shared.read().view.calls.len())
            .finish_non_exhaustive()
    }
}

impl DashboardController {
    /// Create a controller with empty state
    pub fn new(backend: Arc<dyn CallBackend>) -> Self {
        Self {
            backend,
            shared: Arc::new(RwLock::new(Shared::default())),
            list_issued: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> DashboardState {
        self.shared.read().view.clone()
    }

    /// Current call list
    pub fn calls(&self) -> Vec<Call> {
        self.shared.read().view.calls.clone()
    }

    /// Currently selected call
    pub fn selected(&self) -> Option<Call> {
        self.shared.read().view.selected.clone()
    }

    /// Record what the user typed into the phone number field
    pub fn set_phone_input(&self, text: impl Into<String>) {
        self.shared.write().view.phone_input = text.into();
    }

    /// Dismiss the current error message
    pub fn dismiss_error(&self) {
        self.shared.write().view.error = None;
    }

    /// Take the success notice; it is shown once
    pub fn take_notice(&self) -> Option<String> {
        self.shared.write().view.notice.take()
    }

    /// Replace the call list with the backend's.
    ///
    /// Failures leave the previous list in place and are only logged.
    pub async fn refresh_list(&self) -> RefreshOutcome {
        let seq = self.list_issued.fetch_add(1, Ordering::SeqCst) + 1;

        match self.backend.list_calls().await {
            Ok(calls) => {
                let mut shared = self.shared.write();
                if seq <= shared.list_applied {
                    debug!(seq, applied = shared.list_applied, "Dropping stale call list");
                    return RefreshOutcome::Stale;
                }

                let count = calls.len();
                shared.list_applied = seq;
                shared.view.calls = calls;
                shared.view.last_refreshed = Some(Utc::now());
                debug!(seq, count, "Call list refreshed");

                RefreshOutcome::Applied(count)
            }
            Err(e) => {
                warn!(backend = self.backend.name(), error = %e, "Failed to refresh call list");
                RefreshOutcome::Failed
            }
        }
    }

    /// Ask the backend to place a call to `phone_number`.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidInput`] for blank input (the backend is not
    /// called), [`ActionError::Busy`] while another initiate is in flight, and
    /// [`ActionError::Failed`] with the user-facing message when the backend fails.
    pub async fn initiate_call(&self, phone_number: &str) -> Result<(), ActionError> {
        let request = InitiateCallRequest::new(phone_number);

        {
            let mut shared = self.shared.write();
            if shared.view.initiating {
                return Err(ActionError::Busy);
            }

            shared.view.phone_input = phone_number.to_string();
            shared.view.notice = None;

            if let Err(errors) = request.validate() {
                let message = validation_message(&errors);
                shared.view.error = Some(message.clone());
                return Err(ActionError::InvalidInput(message));
            }

            shared.view.initiating = true;
            shared.view.error = None;
        }
        let loading = LoadingGuard {
            shared: Arc::clone(&self.shared),
        };

        match self.backend.initiate_call(&request.phone_number).await {
            Ok(ack) => {
                info!(phone_number = %request.phone_number, response = %ack, "Call initiated");
                self.shared.write().view.phone_input.clear();
                drop(loading);

                self.refresh_list().await;
                self.shared.write().view.notice = Some(INITIATED_NOTICE.to_string());
                Ok(())
            }
            Err(e) => {
                error!(phone_number = %request.phone_number, error = %e, "Error initiating call");
                let message = e.user_message(INITIATE_FAILED);
                self.shared.write().view.error = Some(message.clone());
                Err(ActionError::Failed(message))
            }
        }
    }

    /// Load full details for `id` and make it the selected call.
    ///
    /// A response for a selection that has since been superseded is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Failed`] when the backend fails; the previous
    /// selection is kept.
    pub async fn select_call(&self, id: &CallId) -> Result<(), ActionError> {
        let seq = {
            let mut shared = self.shared.write();
            shared.view.error = None;
            shared.detail_latest += 1;
            shared.detail_latest
        };

        let result = self.backend.get_call(id).await;

        let mut shared = self.shared.write();
        if seq != shared.detail_latest {
            debug!(call_id = %id, seq, latest = shared.detail_latest, "Dropping superseded call details");
            return Ok(());
        }

        match result {
            Ok(call) => {
                shared.view.selected = Some(call);
                Ok(())
            }
            Err(e) => {
                error!(call_id = %id, error = %e, "Error fetching call details");
                let message = e.user_message(SELECT_FAILED);
                shared.view.error = Some(message.clone());
                Err(ActionError::Failed(message))
            }
        }
    }

    /// Delete a call after the user confirms.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Declined`] when the confirmation is refused (the
    /// backend is not called) and [`ActionError::Failed`] when the backend fails.
    pub async fn delete_call(&self, id: &CallId, confirmation: &dyn Confirm) -> Result<(), ActionError> {
        if !confirmation.confirm(DELETE_PROMPT) {
            debug!(call_id = %id, "Delete not confirmed");
            return Err(ActionError::Declined);
        }

        self.shared.write().view.error = None;

        match self.backend.delete_call(id).await {
            Ok(ack) => {
                info!(call_id = %id, response = %ack, "Call deleted");
                {
                    let mut shared = self.shared.write();
                    if shared.view.is_selected(id) {
                        shared.view.selected = None;
                    }
                }
                self.refresh_list().await;
                Ok(())
            }
            Err(e) => {
                error!(call_id = %id, error = %e, "Error deleting call");
                let message = e.user_message(DELETE_FAILED);
                self.shared.write().view.error = Some(message.clone());
                Err(ActionError::Failed(message))
            }
        }
    }
}

fn validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(ToString::to_string))
        .unwrap_or_else(|| PHONE_NUMBER_REQUIRED.to_string())
}
