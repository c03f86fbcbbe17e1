use criterion::{criterion_group, criterion_main, Criterion};
use stegano_qim::{forward, QimDecoder, QimEncoder, SampleGrid};

pub fn codec(c: &mut Criterion) {
    let grid = SampleGrid::filled(512, 512, 128.0);
    let coefficients = forward(&grid);
    let secret_message = vec![0x5a; 1024];

    c.bench_function("QIM Embedding", |b| {
        b.iter(|| {
            let mut carrier = coefficients.clone();
            QimEncoder::new()
                .embed(&mut carrier, &secret_message)
                .expect("Cannot embed secret message");
        })
    });

    let mut carrier = coefficients.clone();
    QimEncoder::new()
        .embed(&mut carrier, &secret_message)
        .expect("Cannot embed secret message");

    c.bench_function("QIM Extraction", |b| {
        b.iter(|| {
            QimDecoder::new()
                .extract(&carrier)
                .expect("Cannot extract secret message")
        })
    });
}

criterion_group!(benches, codec);
criterion_main!(benches);
