use thiserror::Error;

/// Errors that can occur while relaying a prompt.
#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("API key is not set. Set {0} in the function environment variables.")]
    MissingApiKey(&'static str),

    #[error("Bad request: Invalid JSON.")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Bad request: Missing prompts.")]
    MissingPrompts,

    #[error("Google API error! status: {status}, body: {body}")]
    Upstream { status: u16, body: String },

    #[error("Invalid response structure from Google API.")]
    InvalidResponse,
}

impl Error {
    pub fn upstream(status: u16, body: impl Into<String>) -> Self {
        Error::Upstream {
            status,
            body: body.into(),
        }
    }

    /// Transport errors carry the request URL, which holds the API key.
    pub fn transport(err: reqwest::Error) -> Self {
        Error::Http(err.without_url())
    }

    /// HTTP status the handler answers with for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::InvalidJson(_) | Error::MissingPrompts => 400,
            _ => 500,
        }
    }

    /// Only failures past the guard checks are logged.
    pub fn should_log(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::Serialization(_) | Error::Upstream { .. } | Error::InvalidResponse
        )
    }
}
