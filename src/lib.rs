//! A serverless relay for Google Gemini.
//!
//! Clients POST a `{userPrompt, systemPrompt}` pair; the relay attaches the
//! server-side API key, makes one `generateContent` call and answers with the
//! first candidate's text.

pub mod config;
pub mod error;
pub mod handler;
pub mod provider;
pub mod providers;
pub mod types;

// Re-export core types for easy usage
pub use config::{RelayConfig, API_KEY_ENV};
pub use error::Error;
pub use handler::PromptRelay;
pub use provider::TextProvider;
pub use providers::*;
pub use types::*;
