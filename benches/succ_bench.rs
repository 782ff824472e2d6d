use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use strie::Trie;

// Reversed domain names, the canonical longest-prefix workload: matching
// "com.example.cdn" against a suffix list stored as "com.example".
fn synthetic_domains(n: usize) -> Vec<String> {
    let tlds = ["com", "org", "net", "io", "dev"];
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    (0..n)
        .map(|i| {
            let tld = tlds[i % tlds.len()];
            let label_len = rng.gen_range(4..12);
            let label: String = (0..label_len)
                .map(|_| rng.gen_range(b'a'..=b'z') as char)
                .collect();
            format!("{tld}.{label}{i}")
        })
        .collect()
}

fn bench_trie(c: &mut Criterion) {
    let mut group = c.benchmark_group("trie");
    let domains = synthetic_domains(100_000);

    group.bench_function("build_100k", |b| {
        b.iter(|| Trie::from_keys(black_box(&domains)))
    });

    let trie = Trie::from_keys(&domains);
    let root = trie.root();
    let probes: Vec<String> = domains
        .iter()
        .step_by(1000)
        .map(|d| format!("{d}.extra.labels"))
        .collect();

    group.bench_function("search_prefix", |b| {
        b.iter(|| {
            for p in &probes {
                black_box(root.search_prefix(p.as_bytes()));
            }
        })
    });

    group.bench_function("search_exact", |b| {
        b.iter(|| {
            for d in domains.iter().step_by(1000) {
                black_box(root.search(d.as_bytes()).is_leaf());
            }
        })
    });
}

criterion_group!(benches, bench_trie);
criterion_main!(benches);
