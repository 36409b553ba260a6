//! End-to-end dashboard flows against a stubbed HTTP backend

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

mod common;

use calldash_core::{CallId, CallStatus};
use calldash_web::view::{self, AWAITING_RESULTS};
use calldash_web::{ApiClient, DashboardController, RefreshOutcome};
use common::{CallFixtures, init_test_logging};
use serde_json::json;
use std::sync::Arc;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn controller_for(server: &MockServer) -> DashboardController {
    init_test_logging();
    let client = ApiClient::new(format!("{}/api", server.uri()));
    DashboardController::new(Arc::new(client))
}

#[tokio::test]
async fn test_list_then_select_renders_everything() {
    let server = MockServer::start().await;
    let completed = CallFixtures::completed(1);
    Mock::given(method("GET"))
        .and(path("/api/calls"))
        .respond_with(ResponseTemplate::new(200).set_body_json(CallFixtures::list_body(&[
            CallFixtures::ringing(2),
            completed.clone(),
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/calls/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(CallFixtures::detail_body(&completed)))
        .mount(&server)
        .await;

    let controller = controller_for(&server).await;

    assert_eq!(controller.refresh_list().await, RefreshOutcome::Applied(2));
    let list = view::render_call_list(&controller.snapshot());
    assert!(list.contains("Call History (2)"));
    assert!(list.contains("42s"));
    assert!(list.contains("background-color: #27ae60\">completed"));

    controller.select_call(&CallId::from(1)).await.unwrap();
    let details = view::render_details(&controller.snapshot());
    assert!(details.contains("<h3>Transcript</h3>"));
    assert!(details.contains("<h3>AI Summary</h3>"));
    assert!(details.contains("<h3>Extracted Information</h3>"));
    assert!(details.contains("42 seconds"));
    assert!(!details.contains(AWAITING_RESULTS));
}

#[tokio::test]
async fn test_selected_call_without_results_shows_placeholder() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/calls/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "call": {
                "id": 2,
                "phone_number": "+15550000002",
                "status": "in-progress",
                "created_at": "2024-03-15 14:25:30",
                "transcript": "",
                "summary": null,
                "extracted_answers": null
            }
        })))
        .mount(&server)
        .await;

    let controller = controller_for(&server).await;
    assert_ok!(controller.select_call(&CallId::from(2)).await);

    let selected = controller.selected().unwrap();
    assert_eq!(selected.status, CallStatus::InProgress);
    let details = view::render_details(&controller.snapshot());
    assert!(details.contains(AWAITING_RESULTS));
    assert!(details.contains("2024-03-15 14:25:30 UTC"));
    assert!(details.contains("background-color: #2ecc71"));
}

#[tokio::test]
async fn test_initiate_posts_number_and_refreshes_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/calls/initiate"))
        .and(body_json(json!({"phone_number": "+15551234567"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true, "call_id": 3})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/calls"))
        .respond_with(ResponseTemplate::new(200).set_body_json(CallFixtures::list_body(&[CallFixtures::ringing(3)])))
        .expect(1)
        .mount(&server)
        .await;

    let controller = controller_for(&server).await;
    controller.set_phone_input("+15551234567");
    controller.initiate_call("+15551234567").await.unwrap();

    let state = controller.snapshot();
    assert_eq!(state.phone_input, "");
    assert_eq!(state.calls.len(), 1);
    assert_eq!(state.notice.as_deref(), Some("Call initiated successfully!"));
}

#[tokio::test]
async fn test_backend_errors_reach_the_user() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/calls/initiate"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "Invalid phone number format"})))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/calls/5"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let controller = controller_for(&server).await;

    assert_err!(controller.initiate_call("12").await);
    assert_eq!(controller.snapshot().error.as_deref(), Some("Invalid phone number format"));

    assert_err!(controller.delete_call(&CallId::from(5), &true).await);
    assert_eq!(controller.snapshot().error.as_deref(), Some("Failed to delete call"));
}

#[tokio::test]
async fn test_unreachable_backend_keeps_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/calls"))
        .respond_with(ResponseTemplate::new(200).set_body_json(CallFixtures::list_body(&[CallFixtures::ringing(1)])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/calls"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let controller = controller_for(&server).await;

    assert_eq!(controller.refresh_list().await, RefreshOutcome::Applied(1));
    assert_eq!(controller.refresh_list().await, RefreshOutcome::Failed);
    assert_eq!(controller.calls().len(), 1);
    assert!(controller.snapshot().error.is_none());
}
