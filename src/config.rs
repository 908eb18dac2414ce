use std::env;

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Process-wide relay configuration, read once at start.
#[derive(Clone, Default)]
pub struct RelayConfig {
    pub api_key: Option<String>,
}

impl std::fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl RelayConfig {
    /// Create a configuration; an empty key counts as unset.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.is_empty()),
        }
    }

    /// Create configuration from environment variables.
    pub fn from_env() -> Self {
        Self::new(env::var(API_KEY_ENV).ok())
    }
}
