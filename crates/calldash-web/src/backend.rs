//! The call backend seam used by the dashboard controller

use crate::error::ClientResult;
use async_trait::async_trait;
use calldash_core::{Call, CallId};

/// Operations the dashboard needs from the external call service.
///
/// The HTTP implementation lives in [`ApiClient`](crate::api_client::ApiClient);
/// [`MockCallBackend`](crate::mock::MockCallBackend) is used in tests.
#[async_trait]
pub trait CallBackend: Send + Sync {
    /// Fetch all calls in server order
    async fn list_calls(&self) -> ClientResult<Vec<Call>>;

    /// Ask the backend to dial `phone_number`; returns the backend acknowledgment
    async fn initiate_call(&self, phone_number: &str) -> ClientResult<serde_json::Value>;

    /// Fetch one call with transcript, summary and extracted answers
    async fn get_call(&self, id: &CallId) -> ClientResult<Call>;

    /// Delete a call; returns the backend acknowledgment
    async fn delete_call(&self, id: &CallId) -> ClientResult<serde_json::Value>;

    /// Backend name for logs
    fn name(&self) -> &str;
}
