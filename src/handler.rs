//! The prompt relay handler.
//!
//! One invocation runs the guard checks in order (method, credential, body,
//! prompts), makes a single upstream call and translates the outcome into an
//! [`OutboundResponse`]. No error escapes [`PromptRelay::handle`].

use crate::config::{RelayConfig, API_KEY_ENV};
use crate::provider::TextProvider;
use crate::providers::GeminiProvider;
use crate::{Error, InboundRequest, OutboundResponse, PromptPair};

/// Relays prompt pairs to a [`TextProvider`].
///
/// `provider` is `None` when no credential was configured; every POST then
/// answers 500.
pub struct PromptRelay<P = GeminiProvider> {
    provider: Option<P>,
}

impl PromptRelay<GeminiProvider> {
    /// Build a relay backed by Gemini from process configuration.
    pub fn from_config(config: RelayConfig) -> Result<Self, Error> {
        let provider = config.api_key.map(GeminiProvider::new).transpose()?;
        Ok(Self { provider })
    }
}

impl<P: TextProvider> PromptRelay<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// A relay with no credential configured.
    pub fn without_credential() -> Self {
        Self { provider: None }
    }

    /// Whether a credential was configured; without one every POST fails.
    pub fn has_credential(&self) -> bool {
        self.provider.is_some()
    }

    /// Handle one invocation.
    pub async fn handle(&self, request: &InboundRequest) -> OutboundResponse {
        if request.http_method != "POST" {
            return OutboundResponse::method_not_allowed();
        }

        let Some(provider) = &self.provider else {
            return OutboundResponse::from(&Error::MissingApiKey(API_KEY_ENV));
        };

        let prompts = match PromptPair::from_body(request.body.as_deref()) {
            Ok(prompts) => prompts,
            Err(e) => return OutboundResponse::from(&e),
        };

        match provider.generate(&prompts).await {
            Ok(text) => {
                tracing::debug!(chars = text.len(), "relayed generated text");
                OutboundResponse::text(text)
            }
            Err(e) => {
                if e.should_log() {
                    tracing::error!(error = %e, "Function error");
                }
                OutboundResponse::error(500, e.to_string())
            }
        }
    }
}
