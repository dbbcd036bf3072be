use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use histogram_core::{MemoryHost, Renderer, Samples};

fn gen_samples() -> Samples {
    let v: Vec<f64> = (0..48).map(|i| ((i as f64) * 0.3).sin().abs() * 10.0 + 1.0).collect();
    Samples::try_new(v).expect("48 finite samples")
}

fn bench_render(c: &mut Criterion) {
    let samples = gen_samples();
    let now = NaiveDate::from_ymd_opt(2024, 3, 10).and_then(|d| d.and_hms_opt(14, 30, 0)).expect("valid instant");
    let renderer = Renderer::default();

    let mut group = c.benchmark_group("histogram");
    for &width in &[320.0f64, 800.0, 1920.0] {
        group.bench_with_input(BenchmarkId::new("layout_graphic", width as u32), &width, |b, &w| {
            b.iter(|| black_box(renderer.graphic(&samples, w, now)));
        });
        group.bench_with_input(BenchmarkId::new("settled_svg", width as u32), &width, |b, &w| {
            let g = renderer.graphic(&samples, w, now);
            b.iter(|| black_box(g.settled().to_svg()));
        });
    }
    group.bench_function("memory_host_redraw", |b| {
        let host = MemoryHost::default();
        let c = host.add_container(800.0);
        b.iter(|| {
            renderer.render(&host, c, &samples, now).expect("render");
            black_box(host.graphic_count(c));
        });
    });
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
