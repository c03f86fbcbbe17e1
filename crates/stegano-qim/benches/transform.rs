use criterion::{criterion_group, criterion_main, Criterion};
use stegano_qim::{forward, inverse, SampleGrid};

fn textured_grid(rows: usize, cols: usize) -> SampleGrid {
    let samples = (0..rows * cols).map(|i| ((i * 37) % 256) as f64).collect();
    SampleGrid::from_samples(rows, cols, samples).expect("Grid buffer does not match dimensions")
}

pub fn transform(c: &mut Criterion) {
    let grid = textured_grid(512, 512);
    let coefficients = forward(&grid);

    c.bench_function("Forward Transform 512x512", |b| b.iter(|| forward(&grid)));
    c.bench_function("Inverse Transform 512x512", |b| {
        b.iter(|| inverse(&coefficients))
    });
}

criterion_group!(benches, transform);
criterion_main!(benches);
