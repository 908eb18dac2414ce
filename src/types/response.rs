use serde_json::json;

use crate::Error;

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_TEXT: &str = "text/plain";

/// The response the relay hands back to the hosting runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundResponse {
    pub status_code: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl OutboundResponse {
    /// 200 carrying the generated text as `{"text": ...}`.
    pub fn text(text: impl AsRef<str>) -> Self {
        Self {
            status_code: 200,
            content_type: CONTENT_TYPE_JSON,
            body: json!({ "text": text.as_ref() }).to_string(),
        }
    }

    /// A JSON `{"error": ...}` body with the given status.
    pub fn error(status_code: u16, message: impl AsRef<str>) -> Self {
        Self {
            status_code,
            content_type: CONTENT_TYPE_JSON,
            body: json!({ "error": message.as_ref() }).to_string(),
        }
    }

    /// 405 with a plain-text body.
    pub fn method_not_allowed() -> Self {
        Self {
            status_code: 405,
            content_type: CONTENT_TYPE_TEXT,
            body: "Method Not Allowed".to_string(),
        }
    }
}

impl From<&Error> for OutboundResponse {
    fn from(err: &Error) -> Self {
        Self::error(err.status_code(), err.to_string())
    }
}
