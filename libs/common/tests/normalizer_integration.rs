//! Integration tests for response normalization and the connectivity probe
//!
//! These tests run a small in-process axum server and feed its real HTTP
//! responses through the normalizer.

use axum::{Router, http::StatusCode, http::header, response::IntoResponse, routing::get};
use common::{
    ClientError, Expect,
    normalizer::{into_collection, normalize},
    probe::probe,
};
use reqwest::Url;
use serde_json::{Value, json};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
};

async fn require_json_accept(headers: axum::http::HeaderMap) -> impl IntoResponse {
    match headers.get(header::ACCEPT).and_then(|v| v.to_str().ok()) {
        Some("application/json") => StatusCode::OK,
        _ => StatusCode::NOT_ACCEPTABLE,
    }
}

/// Start the test server and return its base URL
async fn spawn_server() -> Url {
    let app = Router::new()
        .route("/empty", get(|| async { StatusCode::OK }))
        .route("/array", get(|| async { "[]" }))
        .route("/object", get(|| async { r#"{"message":"ok"}"# }))
        .route("/broken", get(|| async { "{not json" }))
        .route(
            "/missing",
            get(|| async { (StatusCode::NOT_FOUND, "not found") }),
        )
        .route(
            "/teapot",
            get(|| async { (StatusCode::IM_A_TEAPOT, "{not json either") }),
        )
        .route(
            "/unavailable",
            get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        )
        .route("/accept", get(require_json_accept));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Url::parse(&format!("http://{}/", addr)).unwrap()
}

async fn fetch(base: &Url, path: &str, expect: Expect) -> Result<Option<Value>, ClientError> {
    let response = reqwest::get(base.join(path).unwrap()).await.unwrap();
    normalize(response, expect).await
}

#[tokio::test]
async fn test_empty_success_body_per_shape() {
    let base = spawn_server().await;

    let value = fetch(&base, "empty", Expect::Collection).await.unwrap();
    assert_eq!(value, Some(json!([])));

    let value = fetch(&base, "empty", Expect::Acknowledgment).await.unwrap();
    assert_eq!(value, None);

    let err = fetch(&base, "empty", Expect::Single).await.unwrap_err();
    match err {
        ClientError::EmptyBody { url } => assert!(url.ends_with("/empty")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_success_bodies_are_parsed() {
    let base = spawn_server().await;

    let value = fetch(&base, "array", Expect::Collection).await.unwrap();
    let items: Vec<Value> = into_collection(value).unwrap();
    assert!(items.is_empty());

    let value = fetch(&base, "object", Expect::Single).await.unwrap();
    assert_eq!(value, Some(json!({"message": "ok"})));
}

#[tokio::test]
async fn test_invalid_json_success_body() {
    let base = spawn_server().await;

    let err = fetch(&base, "broken", Expect::Single).await.unwrap_err();
    assert!(matches!(err, ClientError::Decode { .. }));
    assert_eq!(err.to_string(), "Invalid JSON response from server");
}

#[tokio::test]
async fn test_error_status_takes_precedence_over_decoding() {
    let base = spawn_server().await;

    let err = fetch(&base, "missing", Expect::Single).await.unwrap_err();
    let message = err.to_string();
    assert!(message.contains("404"), "{message}");
    assert!(message.contains("not found"), "{message}");
    assert!(err.is_not_found());

    let err = fetch(&base, "teapot", Expect::Single).await.unwrap_err();
    assert_eq!(err.status(), Some(418));
    assert!(err.to_string().ends_with(" - {not json either"));

    let err = fetch(&base, "unavailable", Expect::Collection)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "HTTP 503: Service Unavailable");
}

#[tokio::test]
async fn test_probe_reports_reachability() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    assert!(probe(&client, base.join("accept").unwrap()).await);
    assert!(probe(&client, base.join("broken").unwrap()).await);
    assert!(!probe(&client, base.join("unavailable").unwrap()).await);
    assert!(!probe(&client, base.join("missing").unwrap()).await);
}

#[tokio::test]
async fn test_probe_swallows_transport_errors() {
    // Reserve a port, then free it so nothing is listening there
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = reqwest::Client::new();
    let url = Url::parse(&format!("http://{}/essays", addr)).unwrap();
    assert!(!probe(&client, url).await);
}

/// Serve one connection whose body ends well before its declared length
async fn spawn_truncated(status_line: &'static str) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0u8; 1024];
        let _ = socket.read(&mut request).await;

        let response = format!(
            "{}\r\nContent-Length: 100\r\nConnection: close\r\n\r\nshort",
            status_line
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });

    Url::parse(&format!("http://{}/truncated", addr)).unwrap()
}

#[tokio::test]
async fn test_unreadable_error_body_is_left_out() {
    let url = spawn_truncated("HTTP/1.1 500 Internal Server Error").await;
    let response = reqwest::get(url).await.unwrap();

    let err = normalize(response, Expect::Single).await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
    match err {
        ClientError::Http { status, body, .. } => {
            assert_eq!(status, 500);
            assert!(body.is_none());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_unreadable_success_body_is_transport_failure() {
    let url = spawn_truncated("HTTP/1.1 200 OK").await;
    let response = reqwest::get(url).await.unwrap();

    let err = normalize(response, Expect::Collection).await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)), "{err:?}");
}
