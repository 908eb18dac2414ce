pub mod client;
pub mod types;

pub use client::{GeminiProvider, GEMINI_BASE_URL, GEMINI_MODEL};
