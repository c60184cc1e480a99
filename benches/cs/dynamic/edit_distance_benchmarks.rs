use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use editscore::dynamic::{align, levenshtein};

fn random_tokens(rng: &mut StdRng, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.gen_range(b'a'..=b'z')).collect()
}

/// Square inputs: time should grow with n² cells.
fn bench_square(c: &mut Criterion) {
    let mut group = c.benchmark_group("levenshtein_square");
    let mut rng = StdRng::seed_from_u64(42);

    for &n in &[64usize, 256, 1024, 4096] {
        let a = random_tokens(&mut rng, n);
        let b = random_tokens(&mut rng, n);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| levenshtein(black_box(&a), black_box(&b)))
        });
    }

    group.finish();
}

/// Fixed short side, growing long side: time linear in the long side.
fn bench_skewed(c: &mut Criterion) {
    let mut group = c.benchmark_group("levenshtein_skewed");
    let mut rng = StdRng::seed_from_u64(7);
    let short = random_tokens(&mut rng, 32);

    for &n in &[1_000usize, 10_000, 100_000] {
        let long = random_tokens(&mut rng, n);
        group.throughput(Throughput::Elements((n * short.len()) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| levenshtein(black_box(&long), black_box(&short)))
        });
    }

    group.finish();
}

fn bench_alignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("align");
    let mut rng = StdRng::seed_from_u64(3);

    for &n in &[64usize, 256, 1024] {
        let a = random_tokens(&mut rng, n);
        let b = random_tokens(&mut rng, n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| align(black_box(&a), black_box(&b)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_square, bench_skewed, bench_alignment);
criterion_main!(benches);
