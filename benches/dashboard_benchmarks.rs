//! Benchmarks for dashboard rendering and call decoding

use calldash_core::types::ListCallsResponse;
use calldash_core::{Call, CallId, CallStatus, status_color};
use calldash_web::DashboardState;
use calldash_web::view;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;

const STATUSES: [&str; 7] = [
    "initiated",
    "ringing",
    "in-progress",
    "completed",
    "failed",
    "canceled",
    "voicemail",
];

#[allow(clippy::cast_precision_loss)]
fn sample_calls(count: usize) -> Vec<Call> {
    (0..count)
        .map(|i| {
            let status = STATUSES.get(i % STATUSES.len()).copied().unwrap_or("completed");
            let mut call = Call::new(
                CallId::new(i.to_string()),
                format!("+1555{i:07}"),
                CallStatus::from(status),
                "2024-03-15T14:25:30Z",
            );
            call.duration = Some(((i % 300) + 1) as f64);
            call
        })
        .collect()
}

/// Benchmark call list rendering at realistic history sizes
fn bench_render_call_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_call_list");

    for size in [10_usize, 100, 1000] {
        let state = DashboardState {
            calls: sample_calls(size),
            ..DashboardState::default()
        };
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &state, |b, state| {
            b.iter(|| view::render_call_list(black_box(state)));
        });
    }

    group.finish();
}

/// Benchmark full page rendering with a selected call
fn bench_render_page(c: &mut Criterion) {
    let calls = sample_calls(100);
    let mut selected = calls.first().cloned().unwrap_or_else(|| Call::new(0, "+1", CallStatus::Completed, ""));
    selected.transcript = Some("Agent: Hello\nCustomer: Hi".repeat(50));
    selected.summary = Some("Customer agreed to a follow-up.".to_string());
    selected.extracted_answers = Some(serde_json::json!({"interested": true, "budget": 5000}));

    let state = DashboardState {
        calls,
        selected: Some(selected),
        ..DashboardState::default()
    };

    c.bench_function("render_page", |b| {
        b.iter(|| view::render_page(black_box(&state), Duration::from_secs(5)));
    });
}

/// Benchmark decoding a backend list response
fn bench_decode_call_list(c: &mut Criterion) {
    let body = serde_json::json!({ "calls": sample_calls(500) }).to_string();

    let mut group = c.benchmark_group("decode_call_list");
    group.throughput(Throughput::Bytes(body.len() as u64));
    group.bench_function("500_calls", |b| {
        b.iter(|| serde_json::from_str::<ListCallsResponse>(black_box(&body)));
    });
    group.finish();
}

/// Benchmark status color lookup
fn bench_status_color(c: &mut Criterion) {
    c.bench_function("status_color", |b| {
        b.iter(|| {
            STATUSES
                .iter()
                .map(|status| status_color(black_box(status)))
                .count()
        });
    });
}

criterion_group!(
    benches,
    bench_render_call_list,
    bench_render_page,
    bench_decode_call_list,
    bench_status_color
);
criterion_main!(benches);
