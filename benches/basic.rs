use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use longmap::{LongHashMap, LongMap};
use std::collections::HashMap;


fn longmap_fill(n: u64) -> LongHashMap<u64> {
    let mut map = LongHashMap::new();
    for i in 0..n {
        map.insert(i as i64, i);
    }
    assert_eq!(map.size(), n as usize);
    map
}

fn std_fill(n: u64) -> HashMap<i64, u64> {
    let mut map = HashMap::new();
    for i in 0..n {
        map.insert(i as i64, i);
    }
    assert_eq!(map.len(), n as usize);
    map
}

fn longmap_lookup(map: &LongHashMap<u64>, n: u64) -> u64 {
    (0..n).fold(0, |acc, i| acc + map.get(i as i64).copied().unwrap_or(0))
}

fn std_lookup(map: &HashMap<i64, u64>, n: u64) -> u64 {
    (0..n).fold(0, |acc, i| acc + map.get(&(i as i64)).copied().unwrap_or(0))
}

fn longmap_churn(n: u64) {
    let mut map = longmap_fill(n);
    for i in (0..n).step_by(2) {
        map.remove(i as i64);
    }
    assert_eq!(map.size(), (n / 2) as usize);
}


fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("maps");

    for i in [1000u64, 10000u64, 100000u64].iter() {

        group.bench_with_input(BenchmarkId::new("longmap_insert", i), i,
            |b, i| b.iter(|| longmap_fill(*i)));

        group.bench_with_input(BenchmarkId::new("std_insert", i), i,
            |b, i| b.iter(|| std_fill(*i)));

        let long = longmap_fill(*i);
        group.bench_with_input(BenchmarkId::new("longmap_get", i), i,
            |b, i| b.iter(|| black_box(longmap_lookup(&long, *i))));

        let std_map = std_fill(*i);
        group.bench_with_input(BenchmarkId::new("std_get", i), i,
            |b, i| b.iter(|| black_box(std_lookup(&std_map, *i))));

        group.bench_with_input(BenchmarkId::new("longmap_churn", i), i,
            |b, i| b.iter(|| longmap_churn(*i)));
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
