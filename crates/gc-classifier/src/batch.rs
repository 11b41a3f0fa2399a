//! Sequential batch classification with per-item failure isolation.

use crate::ComplaintClassifier;
use gc_core::Classification;
use serde::Serialize;

const PREVIEW_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchFailure {
    pub index: usize,
    /// First 50 characters of the complaint.
    pub complaint: String,
    pub error: String,
}

#[derive(Debug, Clone)]
pub struct BatchOutcome {
    /// Same length and order as the input; failed items hold the manual-review sentinel.
    pub results: Vec<Classification>,
    pub failures: Vec<BatchFailure>,
    /// More than the configured share of items failed.
    pub failed: bool,
}

impl BatchOutcome {
    pub fn summary(&self) -> String {
        format!("Batch processing failed for {} items", self.failures.len())
    }
}

impl ComplaintClassifier {
    pub async fn classify_batch(&self, complaints: &[String]) -> BatchOutcome {
        let mut results = Vec::with_capacity(complaints.len());
        let mut failures = Vec::new();

        for (index, complaint) in complaints.iter().enumerate() {
            match self.classify(complaint).await {
                Ok(classification) => results.push(classification),
                Err(e) => {
                    tracing::warn!(index, error = %e, "batch item failed");
                    failures.push(BatchFailure {
                        index,
                        complaint: complaint.chars().take(PREVIEW_CHARS).collect(),
                        error: e.to_string(),
                    });
                    results.push(Classification::manual_review());
                }
            }
        }

        let failed = failures.len() as f64 > complaints.len() as f64 * self.config.batch_failure_ratio;
        if failed {
            tracing::error!(failures = failures.len(), total = complaints.len(), "batch failure threshold exceeded");
        }
        BatchOutcome { results, failures, failed }
    }
}
