//! Generative collaborator clients.
//!
//! The extraction pipeline only needs one synchronous text-in/text-out call,
//! expressed by [`GenerativeClient`] so tests can substitute a stub. The
//! production implementation is [`GeminiClient`].

use crate::error::{AuditError, AuditResult};

/// Default Gemini model used for extraction.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// One synchronous prompt-to-text call against a generative model.
pub trait GenerativeClient: Send + Sync {
    /// Sends a single prompt and returns the model's free-form reply.
    ///
    /// No retry and no streaming; a network hang blocks the run.
    fn generate(&self, prompt: &str) -> AuditResult<String>;
}

/// Blocking HTTP client for the Gemini `generateContent` endpoint.
///
/// Configuration is explicit: the API key and model are constructor
/// arguments, never ambient process state.
pub struct GeminiClient {
    api_key: String,
    model: String,
    endpoint: String,
    http: reqwest::blocking::Client,
}

impl GeminiClient {
    /// Creates a client for the given credential and model name.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Overrides the API endpoint (test servers).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// The model this client talks to.
    pub fn model(&self) -> &str {
        &self.model
    }
}

impl GenerativeClient for GeminiClient {
    fn generate(&self, prompt: &str) -> AuditResult<String> {
        let url = format!("{}/models/{}:generateContent", self.endpoint, self.model);
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().unwrap_or_default();
            return Err(AuditError::Generation {
                message: format!("model endpoint returned {}: {}", status, detail),
                source: None,
            });
        }

        let reply: serde_json::Value = response.json()?;
        reply["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| AuditError::Generation {
                message: "model reply carried no candidate text".to_string(),
                source: None,
            })
    }
}
