use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use super::types::{candidate_text, GeminiRequest};
use crate::provider::TextProvider;
use crate::{Error, PromptPair};

/// Model every relay call is made against.
pub const GEMINI_MODEL: &str = "gemini-2.5-flash-preview-09-2025";

/// Public Generative Language API host.
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Google Gemini provider authenticated with an API key.
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    base_url: Option<String>,
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl GeminiProvider {
    /// Create a new Gemini provider.
    pub fn new(api_key: String) -> Result<Self, Error> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            api_key,
            base_url: None,
        })
    }

    /// Create a new Gemini provider with custom base URL (for testing).
    pub fn new_with_base_url(api_key: String, base_url: String) -> Result<Self, Error> {
        let mut provider = Self::new(api_key)?;
        provider.base_url = Some(base_url);
        Ok(provider)
    }

    /// Get the `generateContent` endpoint, without the key.
    fn get_endpoint(&self) -> String {
        let base_url = self.base_url.as_deref().unwrap_or(GEMINI_BASE_URL);
        format!(
            "{}/v1beta/models/{}:generateContent",
            base_url.trim_end_matches('/'),
            GEMINI_MODEL
        )
    }
}

#[async_trait::async_trait]
impl TextProvider for GeminiProvider {
    async fn generate(&self, prompts: &PromptPair) -> Result<String, Error> {
        let gemini_request = GeminiRequest::from(prompts);

        tracing::debug!(model = GEMINI_MODEL, "sending generateContent request");

        let response = self
            .client
            .post(self.get_endpoint())
            .query(&[("key", self.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(&gemini_request)
            .send()
            .await
            .map_err(Error::transport)?;

        let status = response.status();
        let body = response.text().await.map_err(Error::transport)?;

        if !status.is_success() {
            return Err(Error::upstream(status.as_u16(), body));
        }

        let value: Value = serde_json::from_str(&body)?;

        candidate_text(&value)
            .map(str::to_owned)
            .ok_or(Error::InvalidResponse)
    }
}
