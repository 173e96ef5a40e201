use criterion::{criterion_group, Criterion};
use hashsearch_index::{Config, Uint64};
use std::time::{Duration, Instant};

#[cfg(not(full_bench))]
const N_ITEMS: [usize; 2] = [10_000, 50_000];
#[cfg(full_bench)]
const N_ITEMS: [usize; 4] = [10_000, 50_000, 100_000, 500_000];

fn bench_insert(c: &mut Criterion) {
    for variant in ["add", "has_or_add", "unordered_append"] {
        for items in N_ITEMS {
            let keys = super::random_keys(items);
            let label = format!("{}/variant={variant} items={items}", module_path!());
            c.bench_function(&label, |b| {
                b.iter_custom(|iters| {
                    let mut total = Duration::ZERO;
                    for _ in 0..iters {
                        let index = Uint64::init(Config { capacity: items });
                        let start = Instant::now();
                        match variant {
                            "add" => keys.iter().for_each(|k| index.add(*k)),
                            "has_or_add" => keys.iter().for_each(|k| {
                                index.has_or_add(*k);
                            }),
                            _ => {
                                keys.iter().for_each(|k| index.unordered_append(*k));
                                index.sort();
                            }
                        }
                        total += start.elapsed();
                    }
                    total
                });
            });
        }
    }
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench_insert
}
