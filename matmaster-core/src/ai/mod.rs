//! Optional re-ranking of local suggestions by an OpenAI-compatible model.
//!
//! This module provides:
//! - `AiClient` trait for abstracting chat-completion providers
//! - `OpenAiClient` backed by `async-openai`
//! - `FakeAiClient` for tests
//! - Prompt templates and reply parsing for field suggestions
//!
//! # Configuration
//!
//! - `OPENAI_API_KEY` (required): enables the model path when set
//! - `OPENAI_BASE_URL` (optional): API base URL
//! - `MATMASTER_AI_MODEL` (optional): model name, e.g. "gpt-4o"

mod client;
mod config;
mod fake;
pub mod prompts;
mod refine;
mod types;

pub use client::{AiClient, AiError, OpenAiClient};
pub use config::{AiConfig, ConfigError};
pub use fake::FakeAiClient;
pub use refine::{parse_ai_response, refine_suggestions};
pub use types::{ChatMessage, ChatRequest, ChatResponse, Role, Usage};
