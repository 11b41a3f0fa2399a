//! Complaint classification: generator protocol with retry and keyword fallback,
//! followed by business-rule derivation.

pub mod batch;
pub mod pipeline;

pub use batch::{BatchFailure, BatchOutcome};
pub use pipeline::{BaseOutcome, FallbackReason, Resolution};

use gc_core::config::{ClassifierConfig, GrievanceConfig};
use gc_core::{Classification, Explanation, GcError, Result};
use gc_generator::{GenerationParams, TextGenerator};
use gc_parser::{default_parsers, OutputParser};
use gc_rules::{derive_classification, RuleTables, RULE_TABLES};
use std::sync::Arc;

/// Owns the generator handle and every table the pipeline consults. Stateless
/// across requests; share it behind an `Arc`.
pub struct ComplaintClassifier {
    generator: Arc<dyn TextGenerator>,
    parsers: Vec<Box<dyn OutputParser>>,
    tables: RuleTables,
    params: GenerationParams,
    config: ClassifierConfig,
}

impl ComplaintClassifier {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            parsers: default_parsers(),
            tables: RULE_TABLES.clone(),
            params: GenerationParams::default(),
            config: ClassifierConfig::default(),
        }
    }

    pub fn from_config(generator: Arc<dyn TextGenerator>, config: &GrievanceConfig) -> Self {
        let params = GenerationParams {
            max_new_tokens: config.generator.max_new_tokens,
            ..GenerationParams::default()
        };
        Self::new(generator).with_params(params).with_config(config.classifier.clone())
    }

    pub fn with_config(mut self, config: ClassifierConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_tables(mut self, tables: RuleTables) -> Self {
        self.tables = tables;
        self
    }

    pub fn generator(&self) -> &Arc<dyn TextGenerator> {
        &self.generator
    }

    pub fn model_loaded(&self) -> bool {
        self.generator.is_loaded()
    }

    pub fn tables(&self) -> &RuleTables {
        &self.tables
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify one complaint and derive the operational fields.
    pub async fn classify(&self, complaint: &str) -> Result<Classification> {
        validate_complaint(complaint)?;
        let outcome = self.classify_base(complaint).await;
        Ok(derive_classification(&outcome.classification, complaint, &self.tables))
    }

    /// Classify, then justify the result.
    pub async fn explain(&self, complaint: &str) -> Result<Explanation> {
        let classification = self.classify(complaint).await?;
        Ok(gc_rules::explain(&classification, complaint, &self.tables.explanation))
    }
}

pub fn validate_complaint(complaint: &str) -> Result<()> {
    if complaint.is_empty() {
        return Err(GcError::InvalidComplaint("complaint text must not be empty".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests;
