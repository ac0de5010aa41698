use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::{json, Value};

use omp_crypto::{ConfigurableHasher, HashableConfig};

fn listing(options: usize) -> Value {
    let options: Vec<Value> = (0..options)
        .map(|i| {
            json!({
                "currency": "PART",
                "basePrice": i,
                "shippingPrice": { "domestic": 0.1, "international": 0.2 },
                "address": { "type": "NORMAL", "address": "pZmMxcdzhqPknghTFHMRKyW4SGndXJw2H9" }
            })
        })
        .collect();
    json!({
        "type": "MPA_LISTING_ADD",
        "generated": 1592210962204u64,
        "item": {
            "information": {
                "title": "bench",
                "shortDescription": "short",
                "longDescription": "x".repeat(1024),
                "category": ["ROOT", "Particl", "Free Swag"]
            },
            "seller": { "address": "pZmMxcdzhqPknghTFHMRKyW4SGndXJw2H9", "signature": "sig" },
            "payment": {
                "type": "SALE",
                "escrow": { "type": "MULTISIG", "ratio": { "buyer": 100, "seller": 100 } },
                "options": options
            }
        }
    })
}

fn sha256_1kb_bench(c: &mut Criterion) {
    let data = vec![0xCDu8; 1024];

    c.bench_function("sha256_1KB", |b| {
        b.iter(|| omp_crypto::sha256(black_box(&data)))
    });
}

fn canonical_listing_bench(c: &mut Criterion) {
    let payload = listing(4);

    c.bench_function("canonical_bytes_listing", |b| {
        b.iter(|| omp_crypto::canonical_bytes(black_box(&payload)))
    });
}

fn hash_listing_bench(c: &mut Criterion) {
    let payload = listing(1);
    let config = HashableConfig::listing();

    c.bench_function("hash_listing_1_option", |b| {
        b.iter(|| ConfigurableHasher::hash(black_box(&payload), &config))
    });
}

fn hash_listing_many_options_bench(c: &mut Criterion) {
    let payload = listing(32);
    let config = HashableConfig::listing();

    c.bench_function("hash_listing_32_options", |b| {
        b.iter(|| ConfigurableHasher::hash(black_box(&payload), &config))
    });
}

criterion_group!(
    benches,
    sha256_1kb_bench,
    canonical_listing_bench,
    hash_listing_bench,
    hash_listing_many_options_bench,
);
criterion_main!(benches);
