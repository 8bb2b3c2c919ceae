use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};
use smith_core::{forward, inverse, DrawingArea, PixelPoint};

fn gen_impedances(n: usize) -> Vec<(f64, f64)> {
    let mut v = Vec::with_capacity(n);
    for i in 0..n {
        let t = i as f64 * 0.01;
        // spiral that sweeps most of the disk
        v.push(((t * 0.7).sin().abs() * 5.0, t.cos() * 4.0));
    }
    v
}

fn bench_forward(c: &mut Criterion) {
    let area = DrawingArea::new(400.0, 400.0, 760.0);
    let mut group = c.benchmark_group("forward");
    for &n in &[1_000usize, 100_000usize] {
        let data = gen_impedances(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &data, |b, d| {
            b.iter(|| {
                for &(r, x) in d {
                    let _ = black_box(forward(&area, r, x));
                }
            });
        });
    }
    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let area = DrawingArea::new(400.0, 400.0, 760.0);
    let pixels: Vec<PixelPoint> = gen_impedances(10_000)
        .into_iter()
        .filter_map(|(r, x)| forward(&area, r, x).ok())
        .collect();
    c.bench_function("inverse_10000", |b| {
        b.iter(|| {
            for &p in &pixels {
                let _ = black_box(inverse(&area, p));
            }
        });
    });
}

criterion_group!(benches, bench_forward, bench_inverse);
criterion_main!(benches);
