use serde::{Deserialize, Serialize};

// ─── Request ──────────────────────────────────────────────────────────────

/// Body of a `models/<model>:generateContent` request.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// A single-turn request carrying one user text part.
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                role: None,
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        }
    }
}

/// One conversational turn. `role` is omitted on requests (the API infers
/// "user" for single-turn content) and echoed as "model" on responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A content fragment. Only text parts are modeled; other part kinds the API
/// can return deserialize with `text: None` and are skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

// ─── Response ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub model_version: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, or `None` when the
    /// response carries no usable text.
    pub fn extract_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let mut text = String::new();
        for part in &content.parts {
            if let Some(t) = &part.text {
                text.push_str(t);
            }
        }
        (!text.is_empty()).then_some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_embeds_prompt_as_single_text_part() {
        let request = GenerateContentRequest::from_prompt("summarize this");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "contents": [{"parts": [{"text": "summarize this"}]}]
            })
        );
    }

    #[test]
    fn extract_text_from_typical_response() {
        let body = r###"{
            "candidates": [{
                "content": {
                    "parts": [{"text": "## Features\n- Added X"}],
                    "role": "model"
                },
                "finishReason": "STOP"
            }],
            "modelVersion": "gemini-flash-latest"
        }"###;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            response.extract_text().as_deref(),
            Some("## Features\n- Added X")
        );
    }

    #[test]
    fn extract_text_concatenates_multiple_parts() {
        let body = r###"{
            "candidates": [{
                "content": {"parts": [{"text": "## Feat"}, {"text": "ures"}]}
            }]
        }"###;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.extract_text().as_deref(), Some("## Features"));
    }

    #[test]
    fn extract_text_none_when_no_candidates() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.extract_text().is_none());
    }

    #[test]
    fn extract_text_none_when_candidate_has_no_content() {
        let body = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert!(response.extract_text().is_none());
    }

    #[test]
    fn extract_text_skips_non_text_parts() {
        let body = r#"{
            "candidates": [{
                "content": {"parts": [{"inlineData": {"mimeType": "image/png"}}, {"text": "ok"}]}
            }]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.extract_text().as_deref(), Some("ok"));
    }
}
