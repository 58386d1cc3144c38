use std::path::PathBuf;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::Value;
use tower::util::ServiceExt;

use colloquy::{AppState, Environment, ServerConfig, routes};

fn test_config(export_dir: Option<PathBuf>) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 8000,
        environment: Environment::Development,
        frontend_url: "http://localhost:3000".to_string(),
        elevenlabs_api_key: Some("test-key".to_string()),
        scribe_base_url: None,
        num_speakers: 2,
        max_upload_bytes: 1024 * 1024,
        export_dir,
    }
}

fn test_app(export_dir: Option<PathBuf>) -> axum::Router {
    let state = AppState::new(test_config(export_dir)).unwrap();
    routes::create_router(state).unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app(None);

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["status"], "OK");
}

#[tokio::test]
async fn test_missing_api_key_refuses_to_start() {
    let mut config = test_config(None);
    config.elevenlabs_api_key = None;

    assert!(AppState::new(config).is_err());
}

#[tokio::test]
async fn test_transcribe_rejects_non_multipart_request() {
    let app = test_app(None);

    let request = Request::builder()
        .method("POST")
        .uri("/transcribe")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_transcribe_rejects_payload_without_file_field() {
    let app = test_app(None);

    let boundary = "test-boundary";
    let body = format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"note\"\r\n\r\nhello\r\n--{boundary}--\r\n"
    );
    let request = Request::builder()
        .method("POST")
        .uri("/transcribe")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert!(
        json["error"]
            .as_str()
            .unwrap()
            .contains("Missing `file` field")
    );
    assert_eq!(json["status"], 400);
}

#[tokio::test]
async fn test_transcribe_end_to_end_with_fake_provider() {
    // Stand-in provider returning a canned diarized payload
    let provider = axum::Router::new().route(
        "/v1/speech-to-text",
        axum::routing::post(|| async {
            axum::Json(serde_json::json!({
                "language_code": "en",
                "text": "Hi there Hello",
                "words": [
                    {"text": "Hi", "start": 0.0, "end": 0.3, "type": "word", "speaker_id": "speaker_0"},
                    {"text": " ", "start": 0.3, "end": 0.4, "type": "spacing", "speaker_id": "speaker_0"},
                    {"text": "there", "start": 0.4, "end": 0.7, "type": "word", "speaker_id": "speaker_0"},
                    {"text": "Hello", "start": 1.0, "end": 1.4, "type": "word", "speaker_id": "speaker_1"}
                ]
            }))
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let provider_url = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(async move {
        axum::serve(listener, provider).await.unwrap();
    });

    let mut config = test_config(None);
    config.scribe_base_url = Some(provider_url);
    let state = AppState::new(config).unwrap();
    let app = routes::create_router(state).unwrap();

    let boundary = "test-boundary";
    let body = format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"meeting.wav\"\r\nContent-Type: audio/wav\r\n\r\nRIFFfake\r\n--{boundary}--\r\n"
    );
    let request = Request::builder()
        .method("POST")
        .uri("/transcribe")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["filename"], "meeting.wav");
    assert_eq!(json["text"], "Hi there Hello");
    assert_eq!(json["language"], "en");
    assert_eq!(
        json["transcription"],
        "speaker_0: Hi there\nspeaker_1: Hello\n"
    );
    assert!(json.get("export").is_none());
}

#[tokio::test]
async fn test_transcribe_maps_provider_failure_to_bad_gateway() {
    let provider = axum::Router::new().route(
        "/v1/speech-to-text",
        axum::routing::post(|| async {
            (
                StatusCode::UNAUTHORIZED,
                axum::Json(serde_json::json!({"detail": {"status": "invalid_api_key"}})),
            )
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let provider_url = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(async move {
        axum::serve(listener, provider).await.unwrap();
    });

    let mut config = test_config(None);
    config.scribe_base_url = Some(provider_url);
    let state = AppState::new(config).unwrap();
    let app = routes::create_router(state).unwrap();

    let boundary = "test-boundary";
    let body = format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"a.mp3\"\r\n\r\nbytes\r\n--{boundary}--\r\n"
    );
    let request = Request::builder()
        .method("POST")
        .uri("/transcribe")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = response_json(response).await;
    assert!(
        json["error"]
            .as_str()
            .unwrap()
            .contains("invalid_api_key")
    );
}

#[tokio::test]
async fn test_exports_route_absent_without_export_dir() {
    let app = test_app(None);

    let request = Request::builder()
        .uri("/exports/some.pdf")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_exports_served_from_export_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("doc.pdf"), b"%PDF-1.4 fake").unwrap();
    let app = test_app(Some(dir.path().to_path_buf()));

    let request = Request::builder()
        .uri("/exports/doc.pdf")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/pdf"
    );
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"%PDF-1.4 fake");
}

#[tokio::test]
async fn test_exports_unknown_name_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(Some(dir.path().to_path_buf()));

    let request = Request::builder()
        .uri("/exports/missing.pdf")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = response_json(response).await;
    assert_eq!(json["status"], 404);
}

#[tokio::test]
async fn test_exports_rejects_path_traversal() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(Some(dir.path().to_path_buf()));

    // Encoded traversal reaches the handler as a single path segment
    let request = Request::builder()
        .uri("/exports/..%2F..%2Fetc%2Fpasswd")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
