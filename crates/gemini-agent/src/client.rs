use crate::types::{GenerateContentRequest, GenerateContentResponse};
use crate::{GeminiError, Result};

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-flash-latest";

/// Production endpoint. Overridable for tests via [`GeminiClient::with_base_url`].
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

// ─── GeminiClient ─────────────────────────────────────────────────────────

/// Client for the `generateContent` endpoint.
///
/// One request per call, no retries, no streaming. Timeouts are whatever
/// `reqwest` defaults to.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Point the client at a different host (mock servers in tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send `prompt` and return the completion text.
    ///
    /// A 2xx response without extractable text is an error carrying the full
    /// response body, so the caller's diagnostic shows exactly what came back.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        tracing::debug!("POST {url}");

        let request = GenerateContentRequest::from_prompt(prompt);
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GeminiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|source| GeminiError::Decode {
                body: body.clone(),
                source,
            })?;

        parsed
            .extract_text()
            .ok_or(GeminiError::EmptyResponse { response: body })
    }
}
