use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use matmaster_core::ai::AiClient;
use matmaster_core::{DataStore, MaterialCodeFormat, SuggestionEngine};
use serde_json::Value;
use tower::ServiceExt;

use crate::latency::SimulatedLatency;
use crate::{AppContext, AppState};

pub fn test_state(ai: Option<Arc<dyn AiClient>>) -> AppState {
    Arc::new(AppContext {
        store: DataStore::default(),
        engine: SuggestionEngine::new(ai).with_code_format(MaterialCodeFormat::Sap8),
        latency: SimulatedLatency::disabled(),
    })
}

pub fn test_app(state: AppState) -> Router {
    super::router().with_state(state)
}

async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    read_json(app.clone().oneshot(request).await.unwrap()).await
}

pub async fn upload_file(
    app: &Router,
    uri: &str,
    file_name: &str,
    contents: &str,
) -> (StatusCode, Value) {
    let boundary = "matmaster-test-boundary";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
         Content-Type: application/octet-stream\r\n\r\n\
         {contents}\r\n\
         --{boundary}--\r\n"
    );
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .unwrap();

    read_json(app.clone().oneshot(request).await.unwrap()).await
}
