use std::collections::HashSet;
use criterion::{criterion_group, criterion_main, Criterion};
use rand::distributions::Uniform;
use rand::{Rng, thread_rng};
use rand::prelude::IteratorRandom;
use setfilter::{BloomFilter, Filter, FilterConfig, OverloadPolicy};

pub fn lookup_values(c: &mut Criterion) {
    let mut bf = BloomFilter::new(10u32.pow(6), 0.02).unwrap();
    let mut track_inserted = HashSet::new();

    let mut rng = thread_rng();
    let distribution = Uniform::new_inclusive(0, 10u64.pow(12));
    while track_inserted.len() < 10usize.pow(6) {
        let value = rng.sample(distribution).to_be_bytes();
        if track_inserted.insert(value) {
            bf.add(&value).unwrap();
        }
    }

    let mut bgroup = c.benchmark_group("lookup-values");
    bgroup.bench_function("lookup-random-values",
                     |b|
                         b.iter(||
                             bf.contains(
                                 &rng.sample(distribution).to_be_bytes()
                             )
                         ));

    bgroup.bench_function("lookup-inserted-values",
                     |b|
                         b.iter(||
                             bf.contains(track_inserted.iter().choose(&mut rng).unwrap())
                         ));
}

pub fn add_values(c: &mut Criterion) {
    let config = FilterConfig::new(10u32.pow(6), 0.02).with_overload_policy(OverloadPolicy::Warn);
    let mut bf = BloomFilter::with_config(config).unwrap();
    let mut rng = thread_rng();

    c.bench_function("add-random-values",
                     |b|
                         b.iter(||
                             bf.add(&rng.gen::<u64>().to_be_bytes()).unwrap()
                         ));
}

criterion_group!(benches, lookup_values, add_values);
criterion_main!(benches);
