//! Performance benchmarks for the Timesheet Engine.
//!
//! Covers the pure pipeline stages and the HTTP endpoints:
//! - Shift validation against a full month
//! - Merging and row reconciliation for a month of shifts
//! - Summary endpoint round trip
//! - Export endpoint round trip (template load, write and xlsx render)
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use timesheet_engine::api::{create_router, AppState};
use timesheet_engine::calculation::validate_new_shift;
use timesheet_engine::config::{ConfigLoader, ShiftLimits};
use timesheet_engine::models::{Category, ShiftRecord};
use timesheet_engine::timesheet::build_timesheet_rows;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/timesheet").expect("Failed to load config");
    AppState::new(config)
}

/// Two shifts on each of the first `days` days of April 2025.
fn create_month_of_shifts(days: u32) -> Vec<ShiftRecord> {
    let subjects = ["線形代数", "物理", "プログラミング演習"];

    (1..=days)
        .flat_map(|day| {
            [(1, "09:00", "10:30"), (2, "10:40", "12:10")]
                .into_iter()
                .map(move |(id, start, end)| ShiftRecord {
                    id,
                    year: 2025,
                    month: 4,
                    day,
                    label: String::new(),
                    class_name: subjects[(day as usize) % subjects.len()].to_string(),
                    category: Category::Class,
                    teacher_name: "佐藤".to_string(),
                    start_time: start.to_string(),
                    end_time: end.to_string(),
                    break_minutes: 0,
                })
        })
        .collect()
}

fn post_body(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

/// Benchmark: validating one more shift against a full month.
fn bench_validate_shift(c: &mut Criterion) {
    let shifts = create_month_of_shifts(30);
    let mut candidate = shifts[0].clone();
    candidate.day = 30;
    candidate.start_time = "13:00".to_string();
    candidate.end_time = "14:00".to_string();
    let limits = ShiftLimits::default();

    c.bench_function("validate_new_shift_month", |b| {
        b.iter(|| black_box(validate_new_shift(black_box(&shifts), &candidate, &limits)))
    });
}

/// Benchmark: merge and reconcile rows at increasing month fill.
fn bench_build_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_timesheet_rows");

    for days in [1u32, 7, 16, 30].iter() {
        let shifts = create_month_of_shifts(*days);
        group.throughput(Throughput::Elements(shifts.len() as u64));
        group.bench_with_input(BenchmarkId::new("days", days), &shifts, |b, shifts| {
            b.iter(|| black_box(build_timesheet_rows(shifts, 2025, 4)))
        });
    }

    group.finish();
}

/// Benchmark: POST /summary for a full month.
fn bench_summary_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = serde_json::json!({
        "grade": "1",
        "year": 2025,
        "month": 4,
        "shifts": create_month_of_shifts(30)
    })
    .to_string();

    c.bench_function("summary_endpoint_month", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router.oneshot(post_body("/summary", body.clone())).await.unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: POST /export for a full month.
fn bench_export_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = serde_json::json!({
        "profile": {
            "name": "山田 太郎",
            "kana": "ヤマダ タロウ",
            "staff_id": "A1234567",
            "grade": "1"
        },
        "year": 2025,
        "month": 4,
        "shifts": create_month_of_shifts(30)
    })
    .to_string();

    let mut group = c.benchmark_group("export");
    group.sample_size(20);
    group.bench_function("export_endpoint_month", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router.oneshot(post_body("/export", body.clone())).await.unwrap();
            black_box(response)
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_validate_shift,
    bench_build_rows,
    bench_summary_endpoint,
    bench_export_endpoint,
);
criterion_main!(benches);
