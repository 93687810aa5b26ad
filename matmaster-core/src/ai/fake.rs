//! Fake AI client for testing.
//!
//! Replies are chosen by prompt substring so tests run without network access.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::client::{AiClient, AiError};
use super::types::{ChatRequest, ChatResponse, Usage};

/// A fake AI client.
///
/// The user messages of each request are matched, case-insensitively, against
/// the registered substrings in registration order. Without a match it returns
/// the default reply, or an error when there is none.
#[derive(Debug, Default)]
pub struct FakeAiClient {
    responses: Vec<(String, String)>,
    default_response: Option<String>,
    calls: AtomicUsize,
}

impl FakeAiClient {
    /// A client that fails every request.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        Self::new().and_response(prompt_contains, response)
    }

    pub fn and_response(mut self, prompt_contains: &str, response: &str) -> Self {
        self.responses
            .push((prompt_contains.to_lowercase(), response.to_string()));
        self
    }

    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// Number of completions requested so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl AiClient for FakeAiClient {
    async fn complete(
        &self,
        prompt_name: &str,
        request: ChatRequest,
    ) -> Result<ChatResponse, AiError> {
        self.calls.fetch_add(1, Ordering::Relaxed);

        let prompt = request
            .messages
            .iter()
            .map(|m| m.content.to_lowercase())
            .collect::<Vec<_>>()
            .join("\n");

        let content = self
            .responses
            .iter()
            .find(|(pattern, _)| prompt.contains(pattern))
            .map(|(_, response)| response.clone())
            .or_else(|| self.default_response.clone())
            .ok_or_else(|| {
                AiError::Api(format!(
                    "FakeAiClient: no response configured for prompt '{}'",
                    prompt_name
                ))
            })?;

        Ok(ChatResponse {
            content,
            usage: Usage::default(),
        })
    }
}
