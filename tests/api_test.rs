use std::collections::HashMap;
use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::body::Body;
use axum::extract::{Path, Query};
use axum::http::{Request, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower::ServiceExt;

use tawau::application::services::{ReportService, TranscriptionService};
use tawau::infrastructure::audio::MockTranscriptionEngine;
use tawau::infrastructure::drive::{GoogleDriveClient, MockDriveClient, MockTokenProvider};
use tawau::infrastructure::llm::MockLlmClient;
use tawau::presentation::{AppState, create_router};

fn create_test_app() -> Router {
    create_test_app_with_engine(MockTranscriptionEngine::default())
}

fn create_test_app_with_engine(engine: MockTranscriptionEngine) -> Router {
    let transcription_service = Arc::new(TranscriptionService::new(
        Arc::new(MockDriveClient),
        Arc::new(engine),
    ));
    let report_service = Arc::new(ReportService::new(Arc::new(MockLlmClient)));

    let state = AppState {
        transcription_service,
        report_service,
    };

    create_router(state)
}

async fn response_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn given_running_server_when_health_check_then_returns_ok() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn given_missing_file_id_when_transcribing_then_returns_bad_request() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/transcribe")
                .header("content-type", "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["error"], "Missing file_id");
}

#[tokio::test]
async fn given_empty_file_id_when_transcribing_then_returns_bad_request() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/transcribe")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"file_id": ""}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["error"], "Missing file_id");
}

#[tokio::test]
async fn given_valid_file_id_when_transcribing_then_returns_sanitized_transcript() {
    let app = create_test_app_with_engine(MockTranscriptionEngine::new(
        "Interview   recording\n\n\nTime: 00:01:23 end",
    ));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/transcribe")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"file_id": "drive-file-1"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["transcript"], "Interview recording\nTime: end");
}

#[tokio::test]
async fn given_missing_transcript_when_generating_report_then_returns_bad_request() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/generate-report")
                .header("content-type", "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["error"], "Missing transcript");
}

#[tokio::test]
async fn given_empty_transcript_when_generating_report_then_returns_bad_request() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/generate-report")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"transcript": ""}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["error"], "Missing transcript");
}

#[tokio::test]
async fn given_transcript_when_generating_report_then_returns_report() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/generate-report")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"transcript": "Candidate spoke clearly about prior work."}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["report"], "Mock report");
}

#[tokio::test]
async fn given_request_without_id_when_any_endpoint_then_response_contains_request_id() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn given_request_with_id_when_any_endpoint_then_response_echoes_request_id() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "test-request-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "test-request-123"
    );
}

#[tokio::test]
async fn given_preflight_request_when_cors_configured_then_allows_any_origin() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/transcribe")
                .header("origin", "http://localhost:5173")
                .header("access-control-request-method", "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
}

async fn start_failing_drive_server() -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/drive/v3/files/{file_id}",
        get(
            move |Path(_file_id): Path<String>,
                  Query(params): Query<HashMap<String, String>>| async move {
                if params.get("alt").map(String::as_str) == Some("media") {
                    (StatusCode::NOT_FOUND, "File not found").into_response()
                } else {
                    Json(json!({ "name": "interview.mp3" })).into_response()
                }
            },
        ),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

#[tokio::test]
async fn given_drive_failure_when_transcribing_then_returns_internal_error_with_cause() {
    let (base_url, shutdown_tx) = start_failing_drive_server().await;

    let drive_client = Arc::new(GoogleDriveClient::new(
        Arc::new(MockTokenProvider),
        Some(base_url),
    ));
    let transcription_service = Arc::new(TranscriptionService::new(
        drive_client,
        Arc::new(MockTranscriptionEngine::default()),
    ));
    let report_service = Arc::new(ReportService::new(Arc::new(MockLlmClient)));

    let state = AppState {
        transcription_service,
        report_service,
    };
    let app = create_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/transcribe")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"file_id": "drive-file-1"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = response_json(response).await;
    let message = json["error"].as_str().unwrap();
    assert!(message.contains("404"));
    assert!(message.contains("File not found"));
    shutdown_tx.send(()).ok();
}
