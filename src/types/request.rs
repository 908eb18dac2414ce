use serde_json::Value;

use crate::Error;

/// An inbound HTTP request, reduced to what the relay looks at.
///
/// The body is kept as raw bytes so that invalid UTF-8 fails JSON parsing
/// instead of being patched up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundRequest {
    pub http_method: String,
    pub body: Option<Vec<u8>>,
}

impl InboundRequest {
    pub fn new(http_method: impl Into<String>, body: Option<Vec<u8>>) -> Self {
        Self {
            http_method: http_method.into(),
            body,
        }
    }

    /// Create a POST request carrying the given body.
    pub fn post(body: impl Into<Vec<u8>>) -> Self {
        Self::new("POST", Some(body.into()))
    }
}

/// The prompt pair a client submits for relaying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub user_prompt: String,
    pub system_prompt: String,
}

impl PromptPair {
    pub fn new(user_prompt: impl Into<String>, system_prompt: impl Into<String>) -> Self {
        Self {
            user_prompt: user_prompt.into(),
            system_prompt: system_prompt.into(),
        }
    }

    /// Parse a request body of the form `{"userPrompt": ..., "systemPrompt": ...}`.
    ///
    /// A missing body fails the same way malformed JSON does. Both prompts
    /// must be non-empty strings.
    pub fn from_body(body: Option<&[u8]>) -> Result<Self, Error> {
        let value: Value =
            serde_json::from_slice(body.unwrap_or_default()).map_err(Error::InvalidJson)?;

        let user_prompt = non_empty_str(&value, "userPrompt").ok_or(Error::MissingPrompts)?;
        let system_prompt = non_empty_str(&value, "systemPrompt").ok_or(Error::MissingPrompts)?;

        Ok(Self::new(user_prompt, system_prompt))
    }
}

fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_both_prompts() {
        let body = r#"{"userPrompt":"Tell me about yourself","systemPrompt":"You are an interviewer"}"#;
        let prompts = PromptPair::from_body(Some(body.as_bytes())).unwrap();
        assert_eq!(prompts.user_prompt, "Tell me about yourself");
        assert_eq!(prompts.system_prompt, "You are an interviewer");
    }

    #[test]
    fn test_ignores_extra_fields() {
        let body = r#"{"userPrompt":"u","systemPrompt":"s","temperature":0.2}"#;
        assert_eq!(
            PromptPair::from_body(Some(body.as_bytes())).unwrap(),
            PromptPair::new("u", "s")
        );
    }

    #[test]
    fn test_malformed_or_absent_body_is_invalid_json() {
        for body in [Some("{"), Some("not json"), Some(""), None] {
            let err = PromptPair::from_body(body.map(str::as_bytes)).unwrap_err();
            assert!(matches!(err, Error::InvalidJson(_)), "body {body:?} gave {err}");
        }
    }

    #[test]
    fn test_missing_empty_or_mistyped_prompts() {
        let bodies = [
            r#"{}"#,
            r#"{"userPrompt":"u"}"#,
            r#"{"systemPrompt":"s"}"#,
            r#"{"userPrompt":"","systemPrompt":"s"}"#,
            r#"{"userPrompt":"u","systemPrompt":""}"#,
            r#"{"userPrompt":42,"systemPrompt":"s"}"#,
            r#"{"userPrompt":"u","systemPrompt":null}"#,
            r#"[]"#,
            r#"null"#,
            r#""userPrompt""#,
        ];

        for body in bodies {
            let err = PromptPair::from_body(Some(body.as_bytes())).unwrap_err();
            assert!(matches!(err, Error::MissingPrompts), "body {body} gave {err}");
        }
    }

    #[test]
    fn test_invalid_utf8_is_invalid_json() {
        let body = b"{\"userPrompt\":\"\xff\xfe\",\"systemPrompt\":\"s\"}";
        let err = PromptPair::from_body(Some(&body[..])).unwrap_err();
        assert!(matches!(err, Error::InvalidJson(_)), "gave {err}");
    }
}
