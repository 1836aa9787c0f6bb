use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use hill_crypto::preset::alphabets::EXTENDED_SPANISH;
use hill_crypto::ring::matrix_ops::determinant;
use hill_crypto::{Direction, HillCipher, KeyMatrix};

fn bench_happy_flow(c: &mut Criterion) {
    // 1) one-time setup
    let encoder = HillCipher::try_with("THREE KEY", &EXTENDED_SPANISH, Direction::Encode)
        .expect("build encoder");
    let decoder = HillCipher::try_with("THREE KEY", &EXTENDED_SPANISH, Direction::Decode)
        .expect("build decoder");

    // the same message every iteration
    let original = "Heh safasdkjfhkjas fha sdf asda".repeat(32);

    c.bench_function("happy_flow", |b| {
        b.iter(|| {
            let cipher = encoder.transform(black_box(&original)).expect("encode");
            let decoded = decoder.transform(&cipher).expect("decode");
            black_box(decoded);
        })
    });
}

fn bench_sequential_vs_parallel(c: &mut Criterion) {
    let encoder = HillCipher::try_with(
        "FIVE BY FIVE KEY LONG KEY",
        &EXTENDED_SPANISH,
        Direction::Encode,
    )
    .expect("build encoder");

    let mut group = c.benchmark_group("transform");
    for size in [1_000usize, 10_000, 100_000] {
        let message = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. "
            .chars()
            .cycle()
            .take(size)
            .collect::<String>();

        group.bench_with_input(BenchmarkId::new("sequential", size), &message, |b, m| {
            b.iter(|| encoder.transform(black_box(m)).expect("encode"))
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &message, |b, m| {
            b.iter(|| encoder.transform_par(black_box(m)).expect("encode"))
        });
    }
    group.finish();
}

fn bench_determinant_growth(c: &mut Criterion) {
    // Laplace expansion is factorial in the block size
    let mut group = c.benchmark_group("determinant");
    for n in 2..=7 {
        let key = KeyMatrix::random(n, &EXTENDED_SPANISH, 7).expect("random key");
        group.bench_with_input(BenchmarkId::from_parameter(n), key.matrix(), |b, m| {
            b.iter(|| determinant(black_box(m)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_happy_flow,
    bench_sequential_vs_parallel,
    bench_determinant_growth
);
criterion_main!(benches);
