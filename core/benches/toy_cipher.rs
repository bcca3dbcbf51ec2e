use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use privlab_core::{
    CipherConfig,
    toy::{ToyCipher, ToyCiphertext, ToyPlaintext, ToySecret},
};
use sampling::Source;

fn bench_encrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("toy_encrypt");

    let toy: ToyCipher = ToyCipher::new(&CipherConfig::default()).unwrap();
    let sk: ToySecret = ToySecret::new(1_000_003).unwrap();
    let pt: ToyPlaintext = ToyPlaintext::new(4242).unwrap();
    let mut source: Source = Source::new([0u8; 32]);

    group.bench_function("encrypt", |b| b.iter(|| toy.encrypt(black_box(&pt), &sk, &mut source)));
    group.bench_function("simulate", |b| {
        b.iter(|| toy.simulate(black_box(1_000_003), 5, 7, &mut source).unwrap())
    });

    group.finish();
}

fn bench_fold(c: &mut Criterion) {
    let mut group = c.benchmark_group("toy_fold");

    let toy: ToyCipher = ToyCipher::new(&CipherConfig::default()).unwrap();
    let sk: ToySecret = ToySecret::new(1 << 40).unwrap();
    let mut source: Source = Source::new([1u8; 32]);

    for n in [16usize, 256, 4096] {
        let cts: Vec<ToyCiphertext> = (0..n as i64)
            .map(|i| toy.encrypt(&ToyPlaintext::new(i).unwrap(), &sk, &mut source))
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &cts, |b, cts| {
            b.iter(|| black_box(ToyCiphertext::try_sum(cts).unwrap()).decrypt(&sk))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encrypt, bench_fold);
criterion_main!(benches);
