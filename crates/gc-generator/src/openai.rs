//! Chat-completions backend for a served classification model.

use crate::{source::ModelSource, GenerationRequest, GeneratorError, TextGenerator};
use async_trait::async_trait;
use gc_core::config::GeneratorConfig;
use std::time::Duration;

pub struct OpenAiCompatibleGenerator {
    pub base_url: String,
    pub model: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl OpenAiCompatibleGenerator {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, GeneratorError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { base_url: base_url.into(), model: model.into(), api_key, client })
    }

    pub fn from_config(config: &GeneratorConfig, source: &ModelSource) -> Result<Self, GeneratorError> {
        Self::new(
            config.base_url.clone(),
            source.model_name(),
            config.api_key.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url.trim_end_matches('/'))
    }

    fn auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(k) => req.bearer_auth(k),
            None => req,
        }
    }

    /// Request body. Chat endpoints always open the assistant turn, and padding
    /// is handled server-side, so only the decoding fields are sent.
    pub fn request_body(&self, req: &GenerationRequest) -> serde_json::Value {
        serde_json::json!({
            "model":       &self.model,
            "messages":    req.messages,
            "max_tokens":  req.params.max_new_tokens,
            "temperature": req.params.temperature,
            "stream":      false,
        })
    }
}

async fn check_response_status(resp: reqwest::Response) -> Result<serde_json::Value, GeneratorError> {
    let status = resp.status().as_u16();
    let text = resp.text().await?;
    if status >= 400 {
        return Err(GeneratorError::ApiError { status, message: error_message(&text) });
    }
    Ok(serde_json::from_str(&text)?)
}

/// Error text from a failed response. Proxies often answer with HTML or plain text,
/// so a non-JSON body is kept as-is.
fn error_message(text: &str) -> String {
    let Ok(body) = serde_json::from_str::<serde_json::Value>(text) else {
        let trimmed = text.trim();
        return if trimmed.is_empty() { "unknown API error".to_string() } else { trimmed.to_string() };
    };
    body["error"]["message"]
        .as_str()
        .or_else(|| body["error"].as_str())
        .or_else(|| body["message"].as_str())
        .unwrap_or("unknown API error")
        .to_string()
}

/// Assistant text of the first choice; missing content reads as empty output.
pub fn completion_text(body: &serde_json::Value) -> String {
    body["choices"][0]["message"]["content"].as_str().unwrap_or("").to_string()
}

#[async_trait]
impl TextGenerator for OpenAiCompatibleGenerator {
    async fn generate(&self, req: &GenerationRequest) -> Result<String, GeneratorError> {
        let resp = self.auth(self.client.post(self.endpoint())).json(&self.request_body(req)).send().await?;
        let json = check_response_status(resp).await?;
        Ok(completion_text(&json))
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}
