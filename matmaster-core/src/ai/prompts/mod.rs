//! AI prompt templates.

pub mod suggestions;

pub use suggestions::{render_suggestion_prompt, SUGGESTION_SYSTEM_PROMPT};
