use criterion::{criterion_group, Criterion};
use hashsearch_cryptography::{Fnv128a, Fnv64a, Hasher};
use rand::{rngs::StdRng, RngCore, SeedableRng};

fn bench<H: Hasher>(c: &mut Criterion, name: &str) {
    let mut sampler = StdRng::seed_from_u64(0);
    for message_length in [16, 100, 1000, 10000].into_iter() {
        let mut msg = vec![0u8; message_length];
        sampler.fill_bytes(msg.as_mut_slice());
        let msg = msg.as_slice();
        c.bench_function(
            &format!("{}/hasher={name} msg_len={}", module_path!(), msg.len()),
            |b| {
                b.iter(|| {
                    let mut hasher = H::new();
                    hasher.update(msg);
                    hasher.finalize();
                });
            },
        );
    }
}

fn benchmark_hash_message(c: &mut Criterion) {
    bench::<Fnv64a>(c, "fnv64a");
    bench::<Fnv128a>(c, "fnv128a");
}

criterion_group!(benches, benchmark_hash_message);
