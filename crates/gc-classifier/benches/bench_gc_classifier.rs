use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gc_classifier::{pipeline::normalize, ComplaintClassifier};
use gc_generator::DisabledGenerator;
use gc_parser::ParsedOutput;
use std::sync::Arc;
use tokio::runtime::Runtime;

fn bench_classify(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let complaint = "I am being asked to pay 50000 rupees to get my transfer approved. This is pure corruption.";

    let fallback_only = ComplaintClassifier::new(Arc::new(DisabledGenerator::new()));
    c.bench_function("classify_fallback_1000", |b| {
        b.iter(|| {
            rt.block_on(async {
                for _ in 0..1000 {
                    black_box(fallback_only.classify(complaint).await.unwrap());
                }
            })
        })
    });

    let parsed = ParsedOutput::new(vec![" Corruption or Bribery ".into(), "".into(), "Fraud".into()], "critical");
    c.bench_function("normalize_1000", |b| {
        b.iter(|| {
            for _ in 0..1000 {
                black_box(normalize(parsed.clone()));
            }
        })
    });
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
