//! Deterministic generator that replays queued outputs.

use crate::{GenerationRequest, GeneratorError, TextGenerator};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStep {
    Output(String),
    Fault(String),
}

impl ScriptStep {
    pub fn output(text: impl Into<String>) -> Self {
        Self::Output(text.into())
    }

    pub fn fault(message: impl Into<String>) -> Self {
        Self::Fault(message.into())
    }
}

/// Replays `steps` in order, then `default` (or an `Unavailable` fault) once the
/// queue is drained. Every request is recorded.
#[derive(Debug, Default)]
pub struct ScriptedGenerator {
    steps: Mutex<VecDeque<ScriptStep>>,
    default: Option<ScriptStep>,
    seen: Mutex<Vec<GenerationRequest>>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl ScriptedGenerator {
    pub fn new(steps: impl IntoIterator<Item = ScriptStep>) -> Self {
        Self { steps: Mutex::new(steps.into_iter().collect()), ..Default::default() }
    }

    pub fn outputs<S: Into<String>>(outputs: impl IntoIterator<Item = S>) -> Self {
        Self::new(outputs.into_iter().map(|o| ScriptStep::Output(o.into())))
    }

    /// Always answer with `output`.
    pub fn repeating(output: impl Into<String>) -> Self {
        Self::default().with_default(ScriptStep::Output(output.into()))
    }

    pub fn with_default(mut self, step: ScriptStep) -> Self {
        self.default = Some(step);
        self
    }

    pub fn calls(&self) -> usize {
        lock(&self.seen).len()
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        lock(&self.seen).clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, req: &GenerationRequest) -> Result<String, GeneratorError> {
        lock(&self.seen).push(req.clone());
        let step = lock(&self.steps).pop_front().or_else(|| self.default.clone());
        match step {
            Some(ScriptStep::Output(text)) => Ok(text),
            Some(ScriptStep::Fault(message)) => Err(GeneratorError::Unavailable(message)),
            None => Err(GeneratorError::Unavailable("script exhausted".into())),
        }
    }

    fn model_id(&self) -> &str {
        "scripted"
    }
}
