use serde::Serialize;
use serde_json::Value;

use crate::PromptPair;

/// Gemini `generateContent` request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
    pub system_instruction: GeminiContent,
}

/// Gemini content: a list of parts.
#[derive(Debug, Clone, Serialize)]
pub struct GeminiContent {
    pub parts: Vec<GeminiPart>,
}

/// A text part of Gemini content.
#[derive(Debug, Clone, Serialize)]
pub struct GeminiPart {
    pub text: String,
}

impl GeminiContent {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![GeminiPart { text: text.into() }],
        }
    }
}

impl From<&PromptPair> for GeminiRequest {
    fn from(prompts: &PromptPair) -> Self {
        Self {
            contents: vec![GeminiContent::text(prompts.user_prompt.clone())],
            system_instruction: GeminiContent::text(prompts.system_prompt.clone()),
        }
    }
}

/// Path of the generated text inside a Gemini response.
const CANDIDATE_TEXT_POINTER: &str = "/candidates/0/content/parts/0/text";

/// Look up `candidates[0].content.parts[0].text`.
///
/// Any missing step, a non-string leaf or an empty string reads as absent.
pub fn candidate_text(response: &Value) -> Option<&str> {
    response
        .pointer(CANDIDATE_TEXT_POINTER)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_shape() {
        let request = GeminiRequest::from(&PromptPair::new("Hello", "Be brief"));
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "contents": [{ "parts": [{ "text": "Hello" }] }],
                "systemInstruction": { "parts": [{ "text": "Be brief" }] }
            })
        );
    }

    #[test]
    fn test_candidate_text_present() {
        let response = json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "hello" }, { "text": "ignored" }] },
                "finishReason": "STOP"
            }],
            "usageMetadata": { "promptTokenCount": 4 }
        });
        assert_eq!(candidate_text(&response), Some("hello"));
    }

    #[test]
    fn test_candidate_text_absent() {
        let responses = [
            json!({}),
            json!({ "candidates": [] }),
            json!({ "candidates": [{}] }),
            json!({ "candidates": [{ "content": {} }] }),
            json!({ "candidates": [{ "content": { "parts": [] } }] }),
            json!({ "candidates": [{ "content": { "parts": [{ "inlineData": {} }] } }] }),
            json!({ "candidates": [{ "content": { "parts": [{ "text": "" }] } }] }),
            json!({ "candidates": [{ "content": { "parts": [{ "text": 7 }] } }] }),
            json!({ "candidates": { "content": "nope" } }),
            json!(null),
        ];

        for response in responses {
            assert_eq!(candidate_text(&response), None, "response {response}");
        }
    }
}
