//! In-memory call backend for testing

use crate::backend::CallBackend;
use crate::error::{ClientError, ClientResult};
use async_trait::async_trait;
use calldash_core::{Call, CallId, CallStatus};
use chrono::Utc;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::time::sleep;

/// A failure the mock should answer with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockFailure {
    /// HTTP status to report
    pub status: u16,
    /// Backend `error` text, if any
    pub message: Option<String>,
}

impl MockFailure {
    /// Failure without a backend message
    #[must_use]
    pub const fn bare(status: u16) -> Self {
        Self {
            status,
            message: None,
        }
    }

    /// Failure carrying a backend message
    pub fn with_message(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: Some(message.into()),
        }
    }

    fn to_error(&self) -> ClientError {
        ClientError::status(self.status, self.message.clone())
    }
}

#[derive(Debug)]
struct Scripted<T> {
    delay: Duration,
    result: Result<T, MockFailure>,
}

#[derive(Debug, Default)]
struct Failures {
    list: Option<MockFailure>,
    initiate: Option<MockFailure>,
    get: Option<MockFailure>,
    delete: Option<MockFailure>,
}

/// Mock call backend keeping calls in memory.
///
/// Scripted responses are consumed first; once the script is empty the mock
/// answers from its call store.
#[derive(Debug, Default)]
pub struct MockCallBackend {
    calls: Mutex<Vec<Call>>,
    failures: Mutex<Failures>,
    list_script: Mutex<VecDeque<Scripted<Vec<Call>>>>,
    detail_script: Mutex<VecDeque<Scripted<Call>>>,
    delay: Duration,
    next_id: AtomicU64,
    list_requests: AtomicUsize,
    initiate_requests: AtomicUsize,
    get_requests: AtomicUsize,
    delete_requests: AtomicUsize,
    dialed: Mutex<Vec<String>>,
}

impl MockCallBackend {
    /// Create an empty mock backend
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            ..Self::default()
        }
    }

    /// Seed the call store
    #[must_use]
    pub fn with_calls(self, calls: Vec<Call>) -> Self {
        let next = calls
            .iter()
            .filter_map(|call| call.id.as_str().parse::<u64>().ok())
            .max()
            .map_or(1, |max| max + 1);
        self.next_id.store(next, Ordering::SeqCst);
        *self.calls.lock() = calls;
        self
    }

    /// Delay every response by `delay`
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Make `list_calls` fail until cleared
    pub fn fail_list(&self, failure: Option<MockFailure>) {
        self.failures.lock().list = failure;
    }

    /// Make `initiate_call` fail until cleared
    pub fn fail_initiate(&self, failure: Option<MockFailure>) {
        self.failures.lock().initiate = failure;
    }

    /// Make `get_call` fail until cleared
    pub fn fail_get(&self, failure: Option<MockFailure>) {
        self.failures.lock().get = failure;
    }

    /// Make `delete_call` fail until cleared
    pub fn fail_delete(&self, failure: Option<MockFailure>) {
        self.failures.lock().delete = failure;
    }

    /// Queue a one-off `list_calls` answer returned after `delay`
    pub fn push_list_response(&self, delay: Duration, result: Result<Vec<Call>, MockFailure>) {
        self.list_script.lock().push_back(Scripted { delay, result });
    }

    /// Queue a one-off `get_call` answer returned after `delay`
    pub fn push_detail_response(&self, delay: Duration, result: Result<Call, MockFailure>) {
        self.detail_script.lock().push_back(Scripted { delay, result });
    }

    /// Replace the stored calls
    pub fn set_calls(&self, calls: Vec<Call>) {
        *self.calls.lock() = calls;
    }

    /// Snapshot of the stored calls
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    /// Number of `list_calls` requests received
    pub fn list_requests(&self) -> usize {
        self.list_requests.load(Ordering::SeqCst)
    }

    /// Number of `initiate_call` requests received
    pub fn initiate_requests(&self) -> usize {
        self.initiate_requests.load(Ordering::SeqCst)
    }

    /// Number of `get_call` requests received
    pub fn get_requests(&self) -> usize {
        self.get_requests.load(Ordering::SeqCst)
    }

    /// Number of `delete_call` requests received
    pub fn delete_requests(&self) -> usize {
        self.delete_requests.load(Ordering::SeqCst)
    }

    /// Phone numbers passed to `initiate_call`, in order
    pub fn dialed_numbers(&self) -> Vec<String> {
        self.dialed.lock().clone()
    }

    async fn pause(&self, extra: Duration) {
        let total = self.delay + extra;
        if !total.is_zero() {
            sleep(total).await;
        }
    }
}

#[async_trait]
impl CallBackend for MockCallBackend {
    async fn list_calls(&self) -> ClientResult<Vec<Call>> {
        self.list_requests.fetch_add(1, Ordering::SeqCst);

        let scripted = self.list_script.lock().pop_front();
        if let Some(Scripted { delay, result }) = scripted {
            self.pause(delay).await;
            return result.map_err(|failure| failure.to_error());
        }

        self.pause(Duration::ZERO).await;
        let failure = self.failures.lock().list.clone();
        if let Some(failure) = failure {
            return Err(failure.to_error());
        }

        Ok(self.calls())
    }

    async fn initiate_call(&self, phone_number: &str) -> ClientResult<serde_json::Value> {
        self.initiate_requests.fetch_add(1, Ordering::SeqCst);
        self.dialed.lock().push(phone_number.to_string());
        self.pause(Duration::ZERO).await;

        let failure = self.failures.lock().initiate.clone();
        if let Some(failure) = failure {
            return Err(failure.to_error());
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let call = Call::new(
            CallId::new(id.to_string()),
            phone_number.trim(),
            CallStatus::Initiated,
            Utc::now().to_rfc3339(),
        );
        // Newest first, like the real backend
        self.calls.lock().insert(0, call);

        Ok(serde_json::json!({ "success": true, "call_id": id }))
    }

    async fn get_call(&self, id: &CallId) -> ClientResult<Call> {
        self.get_requests.fetch_add(1, Ordering::SeqCst);

        let scripted = self.detail_script.lock().pop_front();
        if let Some(Scripted { delay, result }) = scripted {
            self.pause(delay).await;
            return result.map_err(|failure| failure.to_error());
        }

        self.pause(Duration::ZERO).await;
        let failure = self.failures.lock().get.clone();
        if let Some(failure) = failure {
            return Err(failure.to_error());
        }

        self.calls
            .lock()
            .iter()
            .find(|call| &call.id == id)
            .cloned()
            .ok_or_else(|| ClientError::status(404, Some("Call not found".to_string())))
    }

    async fn delete_call(&self, id: &CallId) -> ClientResult<serde_json::Value> {
        self.delete_requests.fetch_add(1, Ordering::SeqCst);
        self.pause(Duration::ZERO).await;

        let failure = self.failures.lock().delete.clone();
        if let Some(failure) = failure {
            return Err(failure.to_error());
        }

        let mut calls = self.calls.lock();
        let before = calls.len();
        calls.retain(|call| &call.id != id);
        if calls.len() == before {
            return Err(ClientError::status(404, Some("Call not found".to_string())));
        }

        Ok(serde_json::json!({ "success": true }))
    }

    fn name(&self) -> &str {
        "mock"
    }
}
