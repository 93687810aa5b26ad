//! Telemetry utilities for tracking per-request metrics.
//!
//! This module provides a tracing Layer that counts model calls per HTTP request.

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use std::sync::{
    atomic::{AtomicU32, Ordering},
    Arc,
};
use tracing::{span::Id, Subscriber};
use tracing_subscriber::{layer::Context, registry::LookupSpan, Layer};

/// Name of the span wrapped around every model completion.
pub const AI_CALL_SPAN: &str = "ai.complete";

tokio::task_local! {
    /// Task-local counter for model calls in the current request.
    static AI_CALL_COUNTER: Arc<AtomicU32>;
}

/// Get the current model call count for this request, if available.
pub fn get_ai_call_count() -> Option<u32> {
    AI_CALL_COUNTER
        .try_with(|counter| counter.load(Ordering::Relaxed))
        .ok()
}

/// A tracing Layer that counts `ai.complete` spans per HTTP request.
///
/// Suggestion fan-out uses `tokio::join!`, not spawned tasks, so every span
/// is created inside the request task and sees its counter.
pub struct AiCallCountingLayer;

impl<S> Layer<S> for AiCallCountingLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, _attrs: &tracing::span::Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };

        if span.name() == AI_CALL_SPAN {
            let _ = AI_CALL_COUNTER.try_with(|counter| {
                counter.fetch_add(1, Ordering::Relaxed);
            });
        }
    }
}

/// Middleware that initializes the per-request model call counter.
///
/// This must be the outermost layer so the counter covers the whole request.
pub async fn ai_call_counting_middleware(request: Request<Body>, next: Next) -> Response {
    let counter = Arc::new(AtomicU32::new(0));
    AI_CALL_COUNTER.scope(counter, next.run(request)).await
}

/// Middleware that adds the X-AI-Call-Count header to responses.
/// Only installed when MATMASTER_TRACK_AI_CALLS=1.
pub async fn ai_call_count_header_middleware(request: Request<Body>, next: Next) -> Response {
    let mut response = next.run(request).await;

    if let Some(count) = get_ai_call_count() {
        if let Ok(value) = axum::http::header::HeaderValue::from_str(&count.to_string()) {
            response.headers_mut().insert("X-AI-Call-Count", value);
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{middleware, routing::get, Router};
    use tower::ServiceExt;
    use tracing_subscriber::layer::SubscriberExt;

    async fn two_calls() -> &'static str {
        for _ in 0..2 {
            let _span = tracing::info_span!("ai.complete").entered();
        }
        let _other = tracing::info_span!("unrelated").entered();
        "ok"
    }

    #[tokio::test]
    async fn test_counts_ai_spans_per_request() {
        let subscriber = tracing_subscriber::registry().with(AiCallCountingLayer);
        let _guard = tracing::subscriber::set_default(subscriber);

        let app = Router::new()
            .route("/", get(two_calls))
            .layer(middleware::from_fn(ai_call_count_header_middleware))
            .layer(middleware::from_fn(ai_call_counting_middleware));

        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(Request::get("/").body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.headers()["X-AI-Call-Count"], "2");
        }
    }
}
