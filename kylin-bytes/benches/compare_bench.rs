use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use kylin_bytes::Comparator;
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// `n` pairs of equal-length keys that share all but their last byte, so
/// every comparison scans the whole key.
fn make_pairs(n: usize, len: usize, seed: u64) -> Vec<(Vec<u8>, Vec<u8>)> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let mut a = vec![0u8; len];
            rng.fill(a.as_mut_slice());
            let mut b = a.clone();
            if let Some(last) = b.last_mut() {
                *last = rng.random();
            }
            (a, b)
        })
        .collect()
}

fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare");

    for &len in &[3usize, 16, 64, 1024] {
        let pairs = make_pairs(1024, len, 42);
        group.throughput(Throughput::Bytes((pairs.len() * len) as u64));

        for cmp in [Comparator::Portable, Comparator::Word] {
            group.bench_with_input(BenchmarkId::new(cmp.name(), len), &pairs, |b, pairs| {
                b.iter(|| {
                    for (x, y) in pairs {
                        black_box(cmp.compare(black_box(x), black_box(y)));
                    }
                });
            });
        }

        group.bench_with_input(BenchmarkId::new("slice_ord", len), &pairs, |b, pairs| {
            b.iter(|| {
                for (x, y) in pairs {
                    black_box(black_box(x.as_slice()).cmp(black_box(y.as_slice())));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compare);
criterion_main!(benches);
