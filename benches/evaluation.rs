//! Evaluation benchmarks for the URL rule engine.
//!
//! These benchmarks measure first-match evaluation over rule lists of
//! increasing size, the cost of a warm versus cold regex cache, and batch
//! evaluation throughput.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use url_rule_engine::{EngineConfig, MatchStrategy, Rule, RulesConfig, UrlMatcher};

fn generate_rules(count: usize) -> Vec<Rule> {
    (0..count)
        .map(|i| match i % 4 {
            0 => Rule::new(format!("regex-{i}"), format!(r"^https://r{i}\."), MatchStrategy::Regex),
            1 => Rule::new(format!("exact-{i}"), format!("https://e{i}.com"), MatchStrategy::Exact),
            2 => Rule::new(format!("kw-{i}"), format!("kw{i}x; other{i}x"), MatchStrategy::Keyword),
            _ => Rule::new(format!("wild-{i}"), format!("https://*.w{i}.com/*"), MatchStrategy::Unset),
        })
        .collect()
}

fn generate_urls(count: usize, rule_count: usize) -> Vec<String> {
    (0..count)
        .map(|i| match i % 3 {
            0 => format!("https://e{}.com", (i % rule_count) | 1),
            1 => format!("https://mail.w{}.com/inbox", (i % rule_count) | 3),
            _ => format!("https://unmatched.example/{i}"),
        })
        .collect()
}

fn bench_rule_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("rule_scaling");

    for rule_count in [10, 50, 100, 500].iter() {
        let matcher = UrlMatcher::new(generate_rules(*rule_count));
        let urls = generate_urls(30, *rule_count);

        group.bench_with_input(
            BenchmarkId::new("evaluate", rule_count),
            rule_count,
            |b, _| {
                b.iter(|| {
                    for url in &urls {
                        black_box(matcher.evaluate(black_box(url)));
                    }
                })
            },
        );
    }

    group.finish();
}

fn bench_regex_cache(c: &mut Criterion) {
    let mut group = c.benchmark_group("regex_cache");
    let rules = vec![Rule::new(
        "docs",
        r"^https://docs\.(rs|python\.org)/",
        MatchStrategy::Regex,
    )];

    group.bench_function("warm", |b| {
        let matcher = UrlMatcher::new(rules.clone());
        b.iter(|| black_box(matcher.evaluate(black_box("https://docs.rs/regex"))))
    });

    group.bench_function("cold_engine_per_call", |b| {
        let config = EngineConfig::default().with_precompile_regex(false);
        b.iter(|| {
            let matcher = UrlMatcher::with_config(rules.clone(), config.clone());
            black_box(matcher.evaluate(black_box("https://docs.rs/regex")))
        })
    });

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let rules = generate_rules(200);
    let urls = generate_urls(10_000, 200);

    for (label, threshold) in [("sequential", usize::MAX), ("parallel", 1)] {
        let matcher = UrlMatcher::with_config(
            rules.clone(),
            EngineConfig::default().with_min_batch_size_for_parallelism(threshold),
        );
        group.bench_function(label, |b| {
            b.iter(|| black_box(matcher.evaluate_batch(&urls)))
        });
    }

    group.finish();
}

fn bench_load_rules(c: &mut Criterion) -> anyhow::Result<()> {
    let json = generate_rules(500)
        .into_iter()
        .collect::<RulesConfig>()
        .to_json_string()?;
    // Fail before timing anything if the generated file does not parse
    RulesConfig::from_json_str(&json)?;

    c.bench_function("load_and_build_500", |b| {
        b.iter(|| {
            let config = RulesConfig::from_json_str(black_box(&json)).unwrap_or_default();
            black_box(UrlMatcher::from_rules_config(&config))
        })
    });

    Ok(())
}

fn bench_loading(c: &mut Criterion) {
    if let Err(e) = bench_load_rules(c) {
        eprintln!("skipping load benchmark: {e}");
    }
}

criterion_group!(
    benches,
    bench_rule_scaling,
    bench_regex_cache,
    bench_batch,
    bench_loading
);
criterion_main!(benches);
