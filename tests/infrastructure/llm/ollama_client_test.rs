use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::body::Body;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use futures::stream::StreamExt;
use serde_json::{Map, Value, json};
use tokio::net::TcpListener;

use ollama_relay::application::ports::{BackendError, GenerateOutput, InferenceBackend};
use ollama_relay::domain::BackendGenerateRequest;
use ollama_relay::infrastructure::llm::OllamaClient;

const FAST_TIMEOUT: Duration = Duration::from_millis(300);
const NORMAL_TIMEOUT: Duration = Duration::from_secs(5);

async fn echo_generate(Json(body): Json<Value>) -> impl IntoResponse {
    if body["stream"] == json!(true) {
        let lines = "{\"response\":\"a\",\"done\":false}\n{\"response\":\"b\",\"done\":true}\n";
        return (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/x-ndjson")],
            lines.to_string(),
        )
            .into_response();
    }

    if body["model"] == json!("missing") {
        return (
            StatusCode::NOT_FOUND,
            r#"{"error":"model 'missing' not found"}"#.to_string(),
        )
            .into_response();
    }

    Json(json!({"model": body["model"], "response": body["prompt"], "images": body.get("images"), "done": true}))
        .into_response()
}

async fn slow_tags() -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(2)).await;
    Json(json!({"models": []}))
}

async fn stalled_body() -> impl IntoResponse {
    let chunks = futures::stream::once(async {
        tokio::time::sleep(Duration::from_secs(2)).await;
        Ok::<_, std::convert::Infallible>("{\"done\":true}")
    });
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Body::from_stream(chunks),
    )
}

async fn stalled_error_body() -> impl IntoResponse {
    let chunks = futures::stream::once(async {
        tokio::time::sleep(Duration::from_secs(2)).await;
        Ok::<_, std::convert::Infallible>("{\"error\":\"late\"}")
    });
    (StatusCode::INTERNAL_SERVER_ERROR, Body::from_stream(chunks))
}

async fn spawn_stub(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn stub_backend() -> String {
    spawn_stub(
        Router::new()
            .route("/api/generate", post(echo_generate))
            .route("/api/tags", get(|| async { Json(json!({"models": [{"name": "llama3.2:latest"}]})) })),
    )
    .await
}

fn request(model: &str, stream: bool) -> BackendGenerateRequest {
    BackendGenerateRequest {
        model: model.to_string(),
        prompt: "hello".to_string(),
        stream,
        options: Map::new(),
        images: None,
    }
}

#[tokio::test]
async fn given_reachable_backend_when_generating_then_returns_backend_json() {
    let base_url = stub_backend().await;
    let client = OllamaClient::new(&base_url, NORMAL_TIMEOUT, NORMAL_TIMEOUT);

    let output = client.generate(&request("llama3.2", false)).await.unwrap();

    match output {
        GenerateOutput::Complete(body) => {
            assert_eq!(body["model"], "llama3.2");
            assert_eq!(body["response"], "hello");
            assert!(body["images"].is_null());
        }
        other => panic!("expected complete output, got {:?}", other),
    }
}

#[tokio::test]
async fn given_images_when_generating_then_they_are_sent_to_backend() {
    let base_url = stub_backend().await;
    let client = OllamaClient::new(&base_url, NORMAL_TIMEOUT, NORMAL_TIMEOUT);
    let mut req = request("llava", false);
    req.images = Some(vec!["QUJD".to_string()]);

    let output = client.generate(&req).await.unwrap();

    match output {
        GenerateOutput::Complete(body) => assert_eq!(body["images"], json!(["QUJD"])),
        other => panic!("expected complete output, got {:?}", other),
    }
}

#[tokio::test]
async fn given_trailing_slash_in_base_url_when_creating_then_it_is_trimmed() {
    let client = OllamaClient::new("http://localhost:11434/", NORMAL_TIMEOUT, NORMAL_TIMEOUT);

    assert_eq!(client.base_url(), "http://localhost:11434");
}

#[tokio::test]
async fn given_stream_flag_when_generating_then_relays_body_chunks() {
    let base_url = stub_backend().await;
    let client = OllamaClient::new(&base_url, NORMAL_TIMEOUT, NORMAL_TIMEOUT);

    let output = client.generate(&request("llama3.2", true)).await.unwrap();

    match output {
        GenerateOutput::Streaming { content_type, mut body } => {
            assert_eq!(content_type, "application/x-ndjson");
            let mut collected = Vec::new();
            while let Some(chunk) = body.next().await {
                collected.extend_from_slice(&chunk.unwrap());
            }
            let text = String::from_utf8(collected).unwrap();
            assert_eq!(text.lines().count(), 2);
            assert!(text.contains("\"done\":true"));
        }
        other => panic!("expected streaming output, got {:?}", other),
    }
}

#[tokio::test]
async fn given_unknown_model_when_generating_then_returns_status_error_with_body() {
    let base_url = stub_backend().await;
    let client = OllamaClient::new(&base_url, NORMAL_TIMEOUT, NORMAL_TIMEOUT);

    let result = client.generate(&request("missing", false)).await;

    match result {
        Err(BackendError::Status { status, body }) => {
            assert_eq!(status, 404);
            assert!(body.contains("not found"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn given_reachable_backend_when_listing_models_then_returns_tags() {
    let base_url = stub_backend().await;
    let client = OllamaClient::new(&base_url, NORMAL_TIMEOUT, NORMAL_TIMEOUT);

    let models = client.list_models().await.unwrap();

    assert_eq!(models["models"][0]["name"], "llama3.2:latest");
}

#[tokio::test]
async fn given_slow_backend_when_listing_models_then_times_out() {
    let base_url = spawn_stub(Router::new().route("/api/tags", get(slow_tags))).await;
    let client = OllamaClient::new(&base_url, NORMAL_TIMEOUT, FAST_TIMEOUT);

    let result = client.list_models().await;

    assert!(matches!(result, Err(BackendError::Timeout)));
}

#[tokio::test]
async fn given_non_json_body_when_listing_models_then_returns_invalid_response() {
    let base_url = spawn_stub(Router::new().route("/api/tags", get(|| async { "not json" }))).await;
    let client = OllamaClient::new(&base_url, NORMAL_TIMEOUT, NORMAL_TIMEOUT);

    let result = client.list_models().await;

    assert!(matches!(result, Err(BackendError::InvalidResponse(_))));
}

#[tokio::test]
async fn given_nothing_listening_when_generating_then_returns_connection_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = OllamaClient::new(&format!("http://{}", addr), NORMAL_TIMEOUT, NORMAL_TIMEOUT);

    let result = client.generate(&request("llama3.2", false)).await;

    assert!(matches!(result, Err(BackendError::Connection(_))));
}

#[tokio::test]
async fn given_body_stalls_after_headers_when_generating_then_times_out() {
    let base_url = spawn_stub(Router::new().route("/api/generate", post(stalled_body))).await;
    let client = OllamaClient::new(&base_url, FAST_TIMEOUT, NORMAL_TIMEOUT);

    let result = client.generate(&request("llama3.2", false)).await;

    assert!(matches!(result, Err(BackendError::Timeout)));
}

#[tokio::test]
async fn given_body_stalls_after_headers_when_listing_models_then_times_out() {
    let base_url = spawn_stub(Router::new().route("/api/tags", get(stalled_body))).await;
    let client = OllamaClient::new(&base_url, NORMAL_TIMEOUT, FAST_TIMEOUT);

    let result = client.list_models().await;

    assert!(matches!(result, Err(BackendError::Timeout)));
}

#[tokio::test]
async fn given_error_body_cannot_be_read_when_generating_then_keeps_status_with_empty_body() {
    let base_url =
        spawn_stub(Router::new().route("/api/generate", post(stalled_error_body))).await;
    let client = OllamaClient::new(&base_url, FAST_TIMEOUT, NORMAL_TIMEOUT);

    let result = client.generate(&request("llama3.2", false)).await;

    match result {
        Err(BackendError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert!(body.is_empty());
        }
        other => panic!("expected status error, got {:?}", other),
    }
}
