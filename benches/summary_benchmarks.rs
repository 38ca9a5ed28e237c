use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use trainmeter::demo::sample_activities;
use trainmeter::export::{render_summaries, ExportFormat};
use trainmeter::{describe, CaloriesCalculator, Locale};

/// Benchmarks for summary construction and rendering

fn bench_summarize(c: &mut Criterion) {
    let activities = sample_activities(Locale::English).expect("sample workouts are valid");

    let mut group = c.benchmark_group("Summarize");
    for activity in &activities {
        group.bench_with_input(
            BenchmarkId::new("summarize", activity.training().type_label()),
            activity,
            |b, activity| b.iter(|| black_box(activity).summarize()),
        );
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let activities = sample_activities(Locale::English).expect("sample workouts are valid");
    let summaries: Vec<_> = activities.iter().map(|a| a.summarize()).collect();

    let mut group = c.benchmark_group("Render");
    group.throughput(Throughput::Elements(summaries.len() as u64));

    group.bench_function("describe", |b| {
        b.iter(|| {
            for activity in &activities {
                black_box(describe(activity));
            }
        })
    });

    for format in [ExportFormat::Text, ExportFormat::Json, ExportFormat::Table] {
        group.bench_with_input(
            BenchmarkId::new("render_summaries", format!("{:?}", format)),
            &format,
            |b, &format| b.iter(|| render_summaries(black_box(&summaries), format, Locale::English)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_summarize, bench_render);
criterion_main!(benches);
