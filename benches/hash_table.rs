#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names
)]
use std::collections::HashMap;

use chaintable::{HashTable, KeyHasher};
use criterion::{Criterion, criterion_group, criterion_main};
use proptest::{
    collection::vec,
    prelude::{Strategy, any},
    strategy::ValueTree,
    test_runner::TestRunner,
};

const ITEMS_AMOUNT: usize = 1000;
const SAMPLE_SIZE: usize = 10;

fn hash_table_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let items = vec((any::<String>(), any::<String>()), ITEMS_AMOUNT)
        .new_tree(&mut runner)
        .unwrap()
        .current();

    let mut group = c.benchmark_group("Hash table comparison benchmark");
    group.sample_size(SAMPLE_SIZE);
    let mut builtin_table = HashTable::with_hasher(16, KeyHasher::Builtin).unwrap();
    let mut djb2_table = HashTable::with_hasher(16, KeyHasher::Djb2).unwrap();
    let mut rust_map = HashMap::new();
    group.bench_function("chained builtin insert", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                builtin_table.insert(key, value);
            }
        });
    });
    group.bench_function("chained djb2 insert", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                djb2_table.insert(key, value);
            }
        });
    });
    group.bench_function("rust std insert", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                rust_map.insert(key, value);
            }
        });
    });
    group.bench_function("chained builtin retrieve", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = builtin_table.retrieve(key);
            }
        });
    });
    group.bench_function("chained djb2 retrieve", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = djb2_table.retrieve(key);
            }
        });
    });
    group.bench_function("rust std get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = rust_map.get(key);
            }
        });
    });
    group.finish();
}

criterion_group!(benches, hash_table_benches);

criterion_main!(benches);
