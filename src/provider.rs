use crate::{Error, PromptPair};

/// A trait for upstream services that turn a prompt pair into generated text.
#[async_trait::async_trait]
pub trait TextProvider: Send + Sync + 'static {
    /// Make one generation call and return the first candidate's text.
    async fn generate(&self, prompts: &PromptPair) -> Result<String, Error>;
}
