use criterion::{criterion_group, criterion_main, Criterion};
use rand::seq::SliceRandom;
use scc_ordmap::OrderedMap;
use std::time::Instant;

fn upsert_cold(c: &mut Criterion) {
    c.bench_function("OrderedMap: upsert, cold", |b| {
        b.iter_custom(|iters| {
            let map: OrderedMap<u64, u64> = OrderedMap::default();
            let start = Instant::now();
            for i in 0..iters {
                assert!(map.upsert(i, i).is_none());
            }
            start.elapsed()
        })
    });
}

fn upsert_warmed_up(c: &mut Criterion) {
    c.bench_function("OrderedMap: upsert, warmed up", |b| {
        b.iter_custom(|iters| {
            let map: OrderedMap<u64, u64> = OrderedMap::with_capacity(iters as usize);
            let start = Instant::now();
            for i in 0..iters {
                assert!(map.upsert(i, i).is_none());
            }
            start.elapsed()
        })
    });
}

fn read(c: &mut Criterion) {
    c.bench_function("OrderedMap: read", |b| {
        b.iter_custom(|iters| {
            let map: OrderedMap<u64, u64> = OrderedMap::with_capacity(iters as usize);
            for i in 0..iters {
                assert!(map.upsert(i, i).is_none());
            }
            let start = Instant::now();
            for i in 0..iters {
                assert_eq!(map.read(&i, |_, v| *v == i), Some(true));
            }
            start.elapsed()
        })
    });
}

fn remove_shuffled(c: &mut Criterion) {
    c.bench_function("OrderedMap: remove, shuffled", |b| {
        b.iter_custom(|iters| {
            let map: OrderedMap<u64, u64> = (0..iters).map(|i| (i, i)).collect();
            let mut keys: Vec<u64> = (0..iters).collect();
            keys.shuffle(&mut rand::rng());
            let start = Instant::now();
            for k in &keys {
                assert!(map.remove(k).is_some());
            }
            start.elapsed()
        })
    });
}

fn range(c: &mut Criterion) {
    c.bench_function("OrderedMap: range", |b| {
        let map: OrderedMap<u64, u64> = (0..65536).map(|i| (i, i)).collect();
        b.iter(|| {
            let mut sum = 0;
            assert_eq!(
                map.range(|_, v| {
                    sum += *v;
                    true
                }),
                65536
            );
            sum
        })
    });
}

criterion_group!(
    ordered_map,
    upsert_cold,
    upsert_warmed_up,
    read,
    remove_shuffled,
    range
);
criterion_main!(ordered_map);
