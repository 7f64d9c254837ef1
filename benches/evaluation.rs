use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ccg_legality::legality::{DeckLegality, DeckMetrics, LegalityEvaluator, RuleSet};

fn metrics() -> DeckMetrics {
    (0..13).fold(
        DeckMetrics {
            faction_count: 2,
            total_count: 40,
            rare_count: 12,
            unique_count: 2,
            repeats_same_unique: false,
            has_hero: true,
            ..DeckMetrics::default()
        },
        |m, i| m.with_family(format!("AX_{i:02}"), 3),
    )
}

fn bench_evaluate(c: &mut Criterion) {
    let metrics = metrics();
    let standard = RuleSet::standard();
    let draft = RuleSet::draft();

    c.bench_function("evaluate standard", |b| {
        b.iter(|| LegalityEvaluator::evaluate(black_box(&metrics), black_box(&standard)))
    });
    c.bench_function("evaluate draft", |b| {
        b.iter(|| LegalityEvaluator::evaluate(black_box(&metrics), black_box(&draft)))
    });
    c.bench_function("deck legality", |b| {
        b.iter(|| DeckLegality::evaluate(black_box(&metrics)))
    });
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
