//! Text generation capability behind the classifier.
//!
//! The classifier only sees [`TextGenerator`]: chat messages in, generated text out.
//! Backends:
//!   OpenAiCompatibleGenerator — any `/v1/chat/completions` server (vLLM, Ollama,
//!                               llama.cpp, TGI) hosting the classification model
//!   DisabledGenerator         — no model; every request takes the keyword fallback
//!   ScriptedGenerator         — deterministic queued outputs for tests and demos

pub mod disabled;
pub mod error;
pub mod openai;
pub mod prompt;
pub mod scripted;
pub mod source;

pub use disabled::DisabledGenerator;
pub use error::GeneratorError;
pub use openai::OpenAiCompatibleGenerator;
pub use prompt::{build_request, PromptMode};
pub use scripted::{ScriptStep, ScriptedGenerator};
pub use source::ModelSource;

use async_trait::async_trait;
use gc_core::config::{GeneratorBackend, GeneratorConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }
}

/// Decoding parameters. Greedy decoding with a fixed new-token budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub max_new_tokens: u32,
    pub temperature: f32,
    /// Apply the chat template with the assistant turn opened.
    pub add_generation_prompt: bool,
    /// Use the end-of-sequence token for padding when the tokenizer has none.
    pub pad_with_eos: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_new_tokens: 256,
            temperature: 0.0,
            add_generation_prompt: true,
            pad_with_eos: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub messages: Vec<ChatMessage>,
    pub params: GenerationParams,
}

impl GenerationRequest {
    pub fn system_prompt(&self) -> Option<&str> {
        self.messages.iter().find(|m| m.role == Role::System).map(|m| m.content.as_str())
    }

    pub fn user_text(&self) -> Option<&str> {
        self.messages.iter().find(|m| m.role == Role::User).map(|m| m.content.as_str())
    }
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generated text only; the prompt is never echoed back.
    async fn generate(&self, req: &GenerationRequest) -> Result<String, GeneratorError>;

    fn model_id(&self) -> &str;

    /// Whether a model handle is available at all.
    fn is_loaded(&self) -> bool {
        true
    }
}

/// Build the configured generator. Model source resolution happens here, once.
pub fn build_generator(config: &GeneratorConfig) -> Result<Arc<dyn TextGenerator>, GeneratorError> {
    match config.backend {
        GeneratorBackend::Disabled => {
            tracing::info!("generator disabled, keyword fallback only");
            Ok(Arc::new(DisabledGenerator::new()))
        }
        GeneratorBackend::OpenaiCompatible => {
            let source = ModelSource::resolve(Path::new(&config.local_model_dir), &config.model_id);
            tracing::info!(source = %source, base_url = %config.base_url, "using chat-completions generator");
            Ok(Arc::new(OpenAiCompatibleGenerator::from_config(config, &source)?))
        }
    }
}
