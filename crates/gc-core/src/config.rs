//! Service configuration.
//!
//! Reads `grievance.toml` (or the path in `GC_CONFIG`) and then applies `GC_*`
//! environment overrides. A missing file falls back to built-in defaults.

use crate::error::{GcError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "grievance.toml";
pub const DEFAULT_MODEL_ID: &str = "smolify/smolified-complaint-classification";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GrievanceConfig {
    pub server: ServerConfig,
    pub generator: GeneratorConfig,
    pub classifier: ClassifierConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorBackend {
    OpenaiCompatible,
    /// No model; every request goes through the keyword fallback.
    Disabled,
}

impl std::str::FromStr for GeneratorBackend {
    type Err = GcError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai_compatible" | "openai-compatible" => Ok(Self::OpenaiCompatible),
            "disabled" | "none" => Ok(Self::Disabled),
            other => Err(GcError::Config(format!("unknown generator backend: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub backend: GeneratorBackend,
    pub base_url: String,
    pub model_id: String,
    pub local_model_dir: String,
    pub api_key: Option<String>,
    pub max_new_tokens: u32,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Generations whose trimmed length is below this go straight to fallback.
    pub min_output_chars: usize,
    /// A batch fails as a whole when `failures > len * batch_failure_ratio`.
    pub batch_failure_ratio: f64,
    pub log_preview_chars: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".into(), port: 8000 }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            backend: GeneratorBackend::OpenaiCompatible,
            base_url: "http://localhost:11434".into(),
            model_id: DEFAULT_MODEL_ID.into(),
            local_model_dir: "local_model".into(),
            api_key: None,
            max_new_tokens: 256,
            timeout_secs: 30,
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            min_output_chars: 10,
            batch_failure_ratio: 0.5,
            log_preview_chars: 100,
        }
    }
}

impl GrievanceConfig {
    /// Load from `GC_CONFIG` (or `grievance.toml`), then apply environment overrides.
    pub fn load() -> Result<Self> {
        let path = std::env::var("GC_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut config = Self::from_path_or_default(Path::new(&path))?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_path_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `GC_*` overrides through `lookup`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(host) = lookup("GC_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("GC_PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| GcError::Config(format!("GC_PORT is not a port number: {port}")))?;
        }
        if let Some(backend) = lookup("GC_GENERATOR_BACKEND") {
            self.generator.backend = backend.parse()?;
        }
        if let Some(url) = lookup("GC_GENERATOR_URL") {
            self.generator.base_url = url;
        }
        if let Some(model) = lookup("GC_MODEL_ID") {
            self.generator.model_id = model;
        }
        if let Some(dir) = lookup("GC_LOCAL_MODEL_DIR") {
            self.generator.local_model_dir = dir;
        }
        if let Some(key) = lookup("GC_API_KEY") {
            self.generator.api_key = Some(key).filter(|k| !k.is_empty());
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<()> {
        let ratio = self.classifier.batch_failure_ratio;
        if !(0.0..=1.0).contains(&ratio) {
            return Err(GcError::Config(format!("batch_failure_ratio must be within [0, 1], got {ratio}")));
        }
        if self.generator.max_new_tokens == 0 {
            return Err(GcError::Config("max_new_tokens must be positive".into()));
        }
        Ok(())
    }
}
