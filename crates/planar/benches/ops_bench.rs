//! Criterion benchmarks for the point/vector operations over batches of random inputs.
//! Batch sizes: n in {16, 256, 4096}.
//! Results land under target/criterion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use planar::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_vectors(n: usize, seed: u64) -> Vec<Vector2f> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| v2f(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)))
        .collect()
}

fn bench_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("planar");
    for &n in &[16usize, 256, 4096] {
        let vs = random_vectors(n, 43);
        let ws = random_vectors(n, 44);

        group.bench_with_input(BenchmarkId::new("rotate", n), &vs, |b, vs| {
            b.iter(|| {
                for v in vs {
                    black_box(v.to_point().rotate(black_box(37.5)));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("normalize", n), &vs, |b, vs| {
            b.iter(|| {
                for v in vs {
                    black_box(v.normalize());
                }
            })
        });

        group.bench_with_input(
            BenchmarkId::new("lerp_dot_det", n),
            &(vs.clone(), ws.clone()),
            |b, (vs, ws)| {
                b.iter(|| {
                    let mut acc = 0.0f32;
                    for (v, w) in vs.iter().zip(ws) {
                        let m = v.lerp(w, 0.5);
                        acc += m.dot(w) + v.determinant(&m);
                    }
                    black_box(acc)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_ops);
criterion_main!(benches);
