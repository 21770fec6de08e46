use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use halfdft::dft::{forward, inverse};
use halfdft_bench::test_signal;
use realfft::RealFftPlanner;

fn bench_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("forward");
    for &size in &[64usize, 256, 511, 512] {
        let signal = test_signal(size, 7);
        group.bench_function(BenchmarkId::new("halfdft", size), |b| {
            b.iter(|| forward(&signal).unwrap())
        });

        let mut planner = RealFftPlanner::<f64>::new();
        let rfft = planner.plan_fft_forward(size);
        let mut in_data: Vec<f64> = signal.iter().map(|&s| s as f64).collect();
        let mut out_data = rfft.make_output_vec();
        group.bench_function(BenchmarkId::new("realfft", size), |b| {
            b.iter(|| {
                rfft.process(&mut in_data, &mut out_data).unwrap();
            })
        });
    }
    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse");
    for &size in &[64usize, 256, 511, 512] {
        let spectrum = forward(&test_signal(size, 9)).unwrap();
        group.bench_function(BenchmarkId::new("halfdft", size), |b| {
            b.iter(|| inverse(&spectrum, size).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_forward, bench_inverse);
criterion_main!(benches);
