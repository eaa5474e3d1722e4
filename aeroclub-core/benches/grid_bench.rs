//! Criterion benchmarks for the layout hot path.
//!
//! Benchmarks:
//! 1. Daily grid assembly over one page of the demo club
//! 2. Weekly search grid assembly
//! 3. Suggestion lookup while typing

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use aeroclub_core::data::demo_snapshot;
use aeroclub_core::schedule::{assemble, suggest, FilterCriterion, ViewState};

fn bench_assemble(c: &mut Criterion) {
    let today = chrono::NaiveDate::from_ymd_opt(2024, 5, 8).unwrap();
    let now = today.and_hms_opt(12, 0, 0).unwrap();
    let snapshot = demo_snapshot(today);

    let browse = ViewState::new(today);
    c.bench_function("assemble_daily", |b| {
        b.iter(|| assemble(black_box(&browse), black_box(&snapshot), now))
    });

    let mut search = ViewState::new(today);
    search.apply_filter(FilterCriterion::instructor("Jane Doe"));
    c.bench_function("assemble_weekly_instructor", |b| {
        b.iter(|| assemble(black_box(&search), black_box(&snapshot), now))
    });
}

fn bench_suggest(c: &mut Criterion) {
    let today = chrono::NaiveDate::from_ymd_opt(2024, 5, 8).unwrap();
    let snapshot = demo_snapshot(today);
    c.bench_function("suggest_two_letters", |b| {
        b.iter(|| {
            suggest(
                black_box("ma"),
                &snapshot.resources,
                &snapshot.people,
                Some(12),
            )
        })
    });
}

criterion_group!(benches, bench_assemble, bench_suggest);
criterion_main!(benches);
