use crate::{GenerationRequest, GeneratorError, TextGenerator};
use async_trait::async_trait;

/// Generator stand-in when no model is deployed.
#[derive(Debug, Default)]
pub struct DisabledGenerator;

impl DisabledGenerator {
    pub fn new() -> Self { Self }
}

#[async_trait]
impl TextGenerator for DisabledGenerator {
    async fn generate(&self, _req: &GenerationRequest) -> Result<String, GeneratorError> {
        Err(GeneratorError::Unavailable("no generator configured".into()))
    }

    fn model_id(&self) -> &str {
        "disabled"
    }

    fn is_loaded(&self) -> bool {
        false
    }
}
