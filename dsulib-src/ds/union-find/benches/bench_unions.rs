use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion,
};
use quick_find::QuickFind;
use quick_union::QuickUnion;
use rand::{
    distributions::{Distribution, Uniform},
    Rng, SeedableRng,
};
use rand_chacha::ChaCha20Rng;
use union_find::UnionFind;

fn schedule<R: Rng>(n: usize, len: usize, rng: &mut R) -> Vec<(usize, usize)> {
    let between = Uniform::from(0..n);
    (0..len)
        .map(|_| (between.sample(rng), between.sample(rng)))
        .collect()
}

fn bench_unions(c: &mut Criterion) {
    let mut group = c.benchmark_group("disjoint-set");

    let mut rng = ChaCha20Rng::from_seed([
        0x31, 0x86, 0xFA, 0x0E, 0x5D, 0xC4, 0x29, 0xB7, 0x60, 0x9B, 0x12,
        0xE5, 0x4C, 0xD8, 0xA3, 0x7F, 0x08, 0x91, 0x6E, 0xF4, 0x2B, 0xDA,
        0x57, 0x0A, 0xC9, 0x34, 0x8D, 0x62, 0xBE, 0x15, 0xE0, 0x73,
    ]);

    for n in [1 << 10, 1 << 13] {
        let queries = schedule(n, 2 * n, &mut rng);

        group.bench_with_input(
            BenchmarkId::new("quick-find", n),
            &queries,
            |b, queries| {
                b.iter(|| {
                    let mut qf = QuickFind::new(n);
                    for &(p, q) in queries {
                        let _ = black_box(qf.union(p, q));
                    }
                    qf
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("quick-union", n),
            &queries,
            |b, queries| {
                b.iter(|| {
                    let mut qu = QuickUnion::new(n);
                    for &(p, q) in queries {
                        let _ = black_box(qu.union(p, q));
                    }
                    qu
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("weighted", n),
            &queries,
            |b, queries| {
                b.iter(|| {
                    let mut uf = UnionFind::new(n);
                    for &(p, q) in queries {
                        let _ = black_box(uf.union(p, q));
                    }
                    uf
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_unions);
criterion_main!(benches);
