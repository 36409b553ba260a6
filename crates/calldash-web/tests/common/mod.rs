//! Shared helpers for dashboard integration tests

#![allow(dead_code)]

use calldash_core::{Call, CallStatus, Config};
use calldash_web::AppState;
use calldash_web::mock::MockCallBackend;
use serde_json::{Value, json};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize test logging once per test binary
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// Calls in the shapes the backend returns them
pub struct CallFixtures;

impl CallFixtures {
    /// A call that is still ringing
    pub fn ringing(id: i64) -> Call {
        Call::new(id, format!("+1555000{id:04}"), CallStatus::Ringing, "2024-03-15T14:25:30Z")
    }

    /// A finished call with every result populated
    pub fn completed(id: i64) -> Call {
        let mut call = Call::new(id, format!("+1555000{id:04}"), CallStatus::Completed, "2024-03-15T14:20:00Z");
        call.duration = Some(42.0);
        call.transcript = Some("Agent: Hi, is this a good time?\nCustomer: Sure.".to_string());
        call.summary = Some("Customer is interested in a follow-up.".to_string());
        call.extracted_answers = Some(json!({"interested": true, "budget": "5000"}));
        call
    }

    /// Backend JSON for a call list
    pub fn list_body(calls: &[Call]) -> Value {
        json!({ "calls": calls })
    }

    /// Backend JSON for call details
    pub fn detail_body(call: &Call) -> Value {
        json!({ "call": call })
    }
}

/// App state over an in-memory backend
pub fn mock_state(calls: Vec<Call>) -> (Arc<MockCallBackend>, Arc<AppState>) {
    let backend = Arc::new(MockCallBackend::new().with_calls(calls));
    let state = Arc::new(AppState::with_backend(Config::default(), backend.clone()));
    (backend, state)
}
