//! HTTP client for communicating with the call backend

use crate::backend::CallBackend;
use crate::error::{ClientError, ClientResult};
use async_trait::async_trait;
use calldash_core::types::{CallDetailResponse, ErrorBody, InitiateCallRequest, ListCallsResponse};
use calldash_core::{Call, CallId};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

/// API client for making HTTP requests to the call backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client for `base_url`, e.g. `http://localhost:3001/api`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client that reuses an existing `reqwest` client
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Base URL without a trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn calls_url(&self) -> String {
        format!("{}/calls", self.base_url)
    }

    fn call_url(&self, id: &CallId) -> String {
        format!("{}/calls/{}", self.base_url, urlencoding::encode(id.as_str()))
    }

    /// Turn a non-success response into a [`ClientError::Status`], keeping the body's `error`
    async fn check_status(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|body| body.error);

        Err(ClientError::status(status.as_u16(), message))
    }

    async fn read_json<T: DeserializeOwned>(response: Response, what: &'static str) -> ClientResult<T> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::decode(what, e))
    }

    /// Acknowledgments are backend-defined and may be empty
    async fn read_ack(response: Response) -> ClientResult<serde_json::Value> {
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_str(&body).map_err(|e| ClientError::decode("acknowledgment", e))
    }
}

#[async_trait]
impl CallBackend for ApiClient {
    async fn list_calls(&self) -> ClientResult<Vec<Call>> {
        let response = self.client.get(self.calls_url()).send().await?;
        let response = Self::check_status(response).await?;

        let list: ListCallsResponse = Self::read_json(response, "call list").await?;
        let calls = list.into_calls();
        debug!(count = calls.len(), "Fetched calls");

        Ok(calls)
    }

    async fn initiate_call(&self, phone_number: &str) -> ClientResult<serde_json::Value> {
        let url = format!("{}/initiate", self.calls_url());
        let response = self
            .client
            .post(url)
            .json(&InitiateCallRequest::new(phone_number))
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let ack = Self::read_ack(response).await?;
        debug!(response = %ack, "Initiate call response");

        Ok(ack)
    }

    async fn get_call(&self, id: &CallId) -> ClientResult<Call> {
        let response = self.client.get(self.call_url(id)).send().await?;
        let response = Self::check_status(response).await?;

        let detail: CallDetailResponse = Self::read_json(response, "call details").await?;
        Ok(detail.call)
    }

    async fn delete_call(&self, id: &CallId) -> ClientResult<serde_json::Value> {
        let response = self.client.delete(self.call_url(id)).send().await?;
        let response = Self::check_status(response).await?;

        let ack = Self::read_ack(response).await?;
        debug!(call_id = %id, response = %ack, "Delete call response");

        Ok(ack)
    }

    fn name(&self) -> &str {
        "http"
    }
}
