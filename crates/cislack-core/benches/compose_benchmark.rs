use cislack_core::{build_request, compose, extract_context, DispatchConfig, RunContext};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::borrow::Cow;

fn run_context(payload: serde_json::Value) -> RunContext {
    RunContext {
        owner: "lituus-io".into(),
        repo: "cislack".into(),
        payload,
        git_ref: "refs/heads/main".into(),
        event_name: "pull_request".into(),
        workflow: "Build & Test / linux".into(),
        run_id: "9876543210".into(),
        ..Default::default()
    }
}

fn bench_extract_context(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_context");

    let payloads = vec![
        (serde_json::json!({}), "push"),
        (serde_json::json!({"issue": {"number": 42}}), "issue"),
        (serde_json::json!({"pull_request": {"number": 7}}), "pull_request"),
    ];

    for (payload, name) in payloads {
        let ctx = run_context(payload);
        group.bench_with_input(BenchmarkId::from_parameter(name), &ctx, |b, ctx| {
            b.iter(|| extract_context(black_box(ctx)))
        });
    }

    group.finish();
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    let elements = extract_context(&run_context(serde_json::json!({"pull_request": {"number": 7}})));

    for (color, verbose, name) in [
        ("", false, "plain"),
        ("", true, "detailed"),
        ("#F44336", false, "colored"),
        ("#F44336", true, "colored_detailed"),
    ] {
        let config = DispatchConfig {
            channel: Cow::Borrowed("builds"),
            message: Cow::Borrowed("Build failed on main"),
            username: Cow::Borrowed("GitHub Actions"),
            color: Cow::Borrowed(color),
            verbose,
            ..Default::default()
        };
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, config| {
            b.iter(|| compose(black_box(config), black_box(&elements)))
        });
    }

    group.finish();
}

fn bench_build_request_serialized(c: &mut Criterion) {
    let ctx = run_context(serde_json::json!({"issue": {"number": 1}}));
    let config = DispatchConfig {
        channel: Cow::Borrowed("builds"),
        message: Cow::Borrowed("Build failed on main"),
        color: Cow::Borrowed("#4CAF50"),
        verbose: true,
        ..Default::default()
    };

    c.bench_function("build_request_to_json", |b| {
        b.iter(|| {
            let request = build_request(black_box(&config), black_box(&ctx));
            serde_json::to_vec(&request).unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_extract_context,
    bench_compose,
    bench_build_request_serialized
);
criterion_main!(benches);
