use crate::*;
use gc_core::{GcError, Severity};
use gc_generator::{DisabledGenerator, ScriptStep, ScriptedGenerator};
use gc_parser::ParseMethod;
use gc_rules::fallback_classify;
use std::sync::Arc;

const HARASSMENT: &str = "My professor harasses me during lecture";

fn classifier(generator: &Arc<ScriptedGenerator>) -> ComplaintClassifier {
    ComplaintClassifier::new(generator.clone())
}

fn scripted(outputs: &[&str]) -> Arc<ScriptedGenerator> {
    Arc::new(ScriptedGenerator::outputs(outputs.iter().copied()))
}

fn cats(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ========== Parse Paths ==========

#[tokio::test]
async fn test_json_first_attempt() {
    let g = scripted(&[r#"{"categories":["HR"],"severity":"Normal"}"#]);
    let out = classifier(&g).classify_base("I was denied leave twice").await;
    assert_eq!(out.resolution, Resolution::Parsed(ParseMethod::JsonObject));
    assert_eq!(out.classification.categories, cats(&["HR"]));
    assert_eq!(out.classification.severity, Severity::Normal);
    assert_eq!(out.generations, 1);
    assert_eq!(g.calls(), 1);
}

#[tokio::test]
async fn test_native_first_attempt() {
    let g = scripted(&["Categories: Fraud, Corruption or Bribery | Severity: Critical"]);
    let out = classifier(&g).classify_base("They asked for a bribe").await;
    assert_eq!(out.resolution, Resolution::Parsed(ParseMethod::NativeFormat));
    assert_eq!(out.classification.categories, cats(&["Fraud", "Corruption or Bribery"]));
    assert_eq!(out.classification.severity, Severity::Critical);
}

#[tokio::test]
async fn test_retry_with_strict_prompt() {
    let g = scripted(&[
        "I think this complaint is about a leave dispute.",
        r#"{"categories":["HR"],"severity":"High"}"#,
    ]);
    let out = classifier(&g).classify_base("I was denied leave twice").await;
    assert_eq!(out.resolution, Resolution::Parsed(ParseMethod::JsonObject));
    assert_eq!(out.generations, 2);
    let requests = g.requests();
    assert!(!requests[0].system_prompt().unwrap().contains("MUST be valid JSON only"));
    assert!(requests[1].system_prompt().unwrap().contains("MUST be valid JSON only"));
    assert_eq!(requests[1].user_text(), Some("I was denied leave twice"));
}

#[tokio::test]
async fn test_both_attempts_unparseable() {
    let g = scripted(&["no structure in this answer", "still no structure here"]);
    let c = classifier(&g);
    let out = c.classify_base(HARASSMENT).await;
    assert_eq!(out.resolution, Resolution::Fallback(FallbackReason::Unparseable));
    assert_eq!(out.generations, 2);
    assert_eq!(out.classification, fallback_classify(HARASSMENT, &c.tables().fallback));
    assert_eq!(out.classification.categories, cats(&["Harassment"]));
}

#[tokio::test]
async fn test_at_most_two_generations() {
    let g = Arc::new(ScriptedGenerator::repeating("never parseable output"));
    let out = classifier(&g).classify_base(HARASSMENT).await;
    assert!(out.is_fallback());
    assert_eq!(g.calls(), 2);
}

// ========== Degenerate Output ==========

#[tokio::test]
async fn test_empty_first_output_skips_retry() {
    let g = scripted(&[""]);
    let out = classifier(&g).classify_base(HARASSMENT).await;
    assert_eq!(out.resolution, Resolution::Fallback(FallbackReason::DegenerateOutput));
    assert_eq!(out.generations, 1);
    assert_eq!(g.calls(), 1);
}

#[tokio::test]
async fn test_short_output_is_degenerate() {
    let g = scripted(&["   {}   "]);
    let out = classifier(&g).classify_base(HARASSMENT).await;
    assert_eq!(out.resolution, Resolution::Fallback(FallbackReason::DegenerateOutput));
}

#[tokio::test]
async fn test_empty_retry_output() {
    let g = scripted(&["this is not structured at all", "  "]);
    let out = classifier(&g).classify_base(HARASSMENT).await;
    assert_eq!(out.resolution, Resolution::Fallback(FallbackReason::DegenerateOutput));
    assert_eq!(out.generations, 2);
}

// ========== Generator Faults ==========

#[tokio::test]
async fn test_generator_fault_first_attempt() {
    let g = Arc::new(ScriptedGenerator::new([ScriptStep::fault("model crashed")]));
    let out = classifier(&g).classify_base(HARASSMENT).await;
    assert_eq!(out.resolution, Resolution::Fallback(FallbackReason::GeneratorFault));
    assert_eq!(out.generations, 1);
    assert_eq!(out.classification.severity, Severity::High);
}

#[tokio::test]
async fn test_generator_fault_on_retry() {
    let g = Arc::new(ScriptedGenerator::new([
        ScriptStep::output("unparseable but long enough"),
        ScriptStep::fault("timeout"),
    ]));
    let out = classifier(&g).classify_base(HARASSMENT).await;
    assert_eq!(out.resolution, Resolution::Fallback(FallbackReason::GeneratorFault));
    assert_eq!(out.generations, 2);
}

#[tokio::test]
async fn test_disabled_generator_always_falls_back() {
    let c = ComplaintClassifier::new(Arc::new(DisabledGenerator::new()));
    assert!(!c.model_loaded());
    let out = c.classify_base("The water cooler is broken").await;
    assert_eq!(out.resolution, Resolution::Fallback(FallbackReason::GeneratorFault));
    assert_eq!(out.classification.categories, cats(&["Infrastructure"]));
}

// ========== Normalization ==========

#[tokio::test]
async fn test_out_of_set_severity_becomes_normal() {
    let g = scripted(&[r#"{"categories":["HR"],"severity":"Severe"}"#]);
    let out = classifier(&g).classify_base("Payroll is late again").await;
    assert_eq!(out.resolution, Resolution::Parsed(ParseMethod::JsonObject));
    assert_eq!(out.classification.severity, Severity::Normal);
}

#[tokio::test]
async fn test_severity_case_normalized() {
    let g = scripted(&["Categories: Safety Hazard | Severity: critical"]);
    let out = classifier(&g).classify_base("Exposed wiring in lab").await;
    assert_eq!(out.classification.severity, Severity::Critical);
}

#[tokio::test]
async fn test_empty_json_categories_fall_through_to_native() {
    let g = scripted(&[r#"Categories: HR | Severity: High {"categories":[],"severity":"High"}"#]);
    let out = classifier(&g).classify_base("Payroll is late again").await;
    assert_eq!(out.resolution, Resolution::Parsed(ParseMethod::NativeFormat));
    assert_eq!(out.classification.categories, cats(&["HR"]));
}

#[tokio::test]
async fn test_blank_categories_trigger_retry() {
    let g = scripted(&[
        r#"{"categories":["  "],"severity":"High"}"#,
        r#"{"categories":[" Fraud "],"severity":"High"}"#,
    ]);
    let out = classifier(&g).classify_base("Someone forged my signature").await;
    assert_eq!(out.generations, 2);
    assert_eq!(out.classification.categories, cats(&["Fraud"]));
}

#[tokio::test]
async fn test_invariants_hold_on_fallback() {
    let c = ComplaintClassifier::new(Arc::new(DisabledGenerator::new()));
    let texts = [
        "x", "My professor harasses me during lecture", "the AC is not working",
        "urgent: exam marks missing", "Someone stole my bicycle", "   padded text   ",
    ];
    for text in texts {
        let out = c.classify_base(text).await;
        assert!(!out.classification.categories.is_empty(), "{text:?}");
        assert!(Severity::ALL.contains(&out.classification.severity));
    }
}

// ========== Classify / Explain ==========

#[tokio::test]
async fn test_classify_derives_fields() {
    let g = scripted(&[r#"{"categories":["Corruption or Bribery"],"severity":"Critical"}"#]);
    let c = classifier(&g).classify("I am being asked to pay 50000 rupees to get my transfer approved.").await.unwrap();
    assert_eq!(c.route_to, "Vigilance / Ethics Office");
    assert!(c.escalation_required);
    assert!(c.anonymous_recommended);
    assert_eq!(c.sla_hours, 24);
}

#[tokio::test]
async fn test_classify_rejects_empty_without_generating() {
    let g = scripted(&[]);
    let err = classifier(&g).classify("").await.unwrap_err();
    assert!(matches!(err, GcError::InvalidComplaint(_)));
    assert_eq!(g.calls(), 0);
}

#[tokio::test]
async fn test_classify_whitespace_only_falls_back() {
    let c = ComplaintClassifier::new(Arc::new(DisabledGenerator::new()));
    let out = c.classify("   ").await.unwrap();
    assert_eq!(out.categories, cats(&["Other"]));
    assert_eq!(out.severity, Severity::Normal);
    assert!(!out.is_manual_review());
}

#[tokio::test]
async fn test_custom_tables_drive_derivation() {
    let mut tables = gc_rules::default_rule_tables();
    tables.routing.default_department = "Registrar".into();
    tables.sla.default_hours = 72;
    let c = ComplaintClassifier::new(Arc::new(DisabledGenerator::new())).with_tables(tables);
    let out = c.classify("zzz").await.unwrap();
    assert_eq!(out.categories, cats(&["Other"]));
    assert_eq!(out.route_to, "Registrar");
    assert_eq!(c.tables().sla.default_hours, 72);
}

#[tokio::test]
async fn test_explain() {
    let g = scripted(&[r#"{"categories":["Corruption or Bribery"],"severity":"Critical"}"#]);
    let e = classifier(&g).explain("I must pay a bribe in cash to get my file moved").await.unwrap();
    assert_eq!(e.summary_reason, "Classified as Critical due to corruption or bribery with power imbalance indicators");
    assert_eq!(e.key_triggers, cats(&["pay", "bribe", "cash"]));
}

#[tokio::test]
async fn test_from_config_applies_token_budget() {
    let mut config = gc_core::GrievanceConfig::default();
    config.generator.max_new_tokens = 64;
    let g = scripted(&[r#"{"categories":["HR"],"severity":"Normal"}"#]);
    ComplaintClassifier::from_config(g.clone(), &config).classify_base("late salary").await;
    assert_eq!(g.requests()[0].params.max_new_tokens, 64);
}

// ========== Batch ==========

fn batch(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_batch_isolates_item_failure() {
    let c = ComplaintClassifier::new(Arc::new(DisabledGenerator::new()));
    let items = batch(&["The water cooler is broken", "", "My professor harasses me during lecture", "Lost ID card"]);
    let out = c.classify_batch(&items).await;
    assert_eq!(out.results.len(), 4);
    assert!(!out.failed);
    assert!(out.results[1].is_manual_review());
    assert_eq!(out.failures.len(), 1);
    assert_eq!(out.failures[0].index, 1);
    assert_eq!(out.results[2].categories, cats(&["Harassment"]));
}

#[tokio::test]
async fn test_batch_preserves_order() {
    let g = scripted(&[
        r#"{"categories":["HR"],"severity":"Normal"}"#,
        r#"{"categories":["Fraud"],"severity":"High"}"#,
        r#"{"categories":["Safety Hazard"],"severity":"Critical"}"#,
    ]);
    let out = classifier(&g).classify_batch(&batch(&["a complaint", "b complaint", "c complaint"])).await;
    let firsts: Vec<&str> = out.results.iter().map(|r| r.categories[0].as_str()).collect();
    assert_eq!(firsts, vec!["HR", "Fraud", "Safety Hazard"]);
}

#[tokio::test]
async fn test_batch_half_failed_is_not_fatal() {
    let c = ComplaintClassifier::new(Arc::new(DisabledGenerator::new()));
    let out = c.classify_batch(&batch(&["", "broken fan", "", "broken tap"])).await;
    assert_eq!(out.failures.len(), 2);
    assert!(!out.failed);
}

#[tokio::test]
async fn test_batch_majority_failed() {
    let c = ComplaintClassifier::new(Arc::new(DisabledGenerator::new()));
    let out = c.classify_batch(&batch(&["", "broken fan", "", ""])).await;
    assert!(out.failed);
    assert_eq!(out.summary(), "Batch processing failed for 3 items");
}

#[tokio::test]
async fn test_batch_whitespace_item_is_classified() {
    let c = ComplaintClassifier::new(Arc::new(DisabledGenerator::new()));
    let out = c.classify_batch(&batch(&["\n", "broken fan", ""])).await;
    assert!(!out.results[0].is_manual_review());
    assert_eq!(out.results[0].categories, cats(&["Other"]));
    assert_eq!(out.failures.len(), 1);
    assert_eq!(out.failures[0].index, 2);
    assert_eq!(out.failures[0].complaint, "");
}
