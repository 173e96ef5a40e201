use criterion::{black_box, criterion_group, Criterion};
use hashsearch_index::Uint64;

fn bench_has(c: &mut Criterion) {
    for items in [10_000, 100_000, 1_000_000] {
        let keys = super::random_keys(items);
        let index = Uint64::new();
        for key in &keys {
            index.unordered_append(*key);
        }
        index.sort();

        let label = format!("{}/items={items}", module_path!());
        c.bench_function(&label, |b| {
            let mut i = 0;
            b.iter(|| {
                // Alternate between present and (likely) absent keys
                let key = keys[i % items];
                i += 1;
                black_box(index.has(&key));
                black_box(index.has(&key.wrapping_add(1)));
            });
        });
    }
}

criterion_group!(benches, bench_has);
