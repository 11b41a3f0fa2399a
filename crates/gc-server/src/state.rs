//! Application state shared across all handlers.

use gc_classifier::ComplaintClassifier;
use gc_core::{GcError, GrievanceConfig};
use gc_generator::{build_generator, TextGenerator};
use std::sync::Arc;

/// Shared application state. The classifier, and with it the generator handle,
/// is built once and shared read-only.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<ComplaintClassifier>,
    pub start_time: std::time::Instant,
}

impl AppState {
    pub fn new(classifier: ComplaintClassifier) -> Self {
        Self {
            classifier: Arc::new(classifier),
            start_time: std::time::Instant::now(),
        }
    }

    pub fn with_generator(generator: Arc<dyn TextGenerator>) -> Self {
        Self::new(ComplaintClassifier::new(generator))
    }

    pub fn from_config(config: &GrievanceConfig) -> anyhow::Result<Self> {
        let generator = build_generator(&config.generator).map_err(|e| GcError::Generator(e.to_string()))?;
        Ok(Self::new(ComplaintClassifier::from_config(generator, config)))
    }
}
