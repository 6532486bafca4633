//! Performance bench for the common point operations and traversals. Here to
//! quickly test for regressions.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::seq::SliceRandom;
use rand::{rng, Rng};

use art_index::ArtIndex;

// Two levels of shared prefix plus a random suffix, so the tree exercises
// both compressed prefixes and wide fan-out.
fn gen_keys(l1_prefix: usize, l2_prefix: usize, suffix: usize) -> Vec<String> {
    let mut keys = Vec::new();
    let chars: Vec<char> = ('a'..='z').collect();
    let mut rng = rng();
    for l1 in &chars {
        let level1_prefix = l1.to_string().repeat(l1_prefix);
        for l2 in &chars {
            let level2_prefix = l2.to_string().repeat(l2_prefix);
            let key_prefix = level1_prefix.clone() + &level2_prefix;
            for _ in 0..64 {
                let suffix: String = (0..suffix)
                    .map(|_| chars[rng.random_range(0..chars.len())])
                    .collect();
                keys.push(key_prefix.clone() + &suffix);
            }
        }
    }
    keys.shuffle(&mut rng);
    keys
}

pub fn rand_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("rand_insert");
    group.throughput(Throughput::Elements(1));

    let keys = gen_keys(2, 2, 3);
    group.bench_function("rand_insert", |b| {
        let mut tree = ArtIndex::new();
        let mut rng = rng();
        b.iter(|| {
            let key = &keys[rng.random_range(0..keys.len())];
            tree.insert(key.as_str(), key.clone());
        })
    });

    group.finish();
}

pub fn rand_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("rand_get");
    group.throughput(Throughput::Elements(1));

    let keys = gen_keys(2, 2, 3);
    let mut tree = ArtIndex::new();
    for key in &keys {
        tree.insert(key.as_str(), key.clone());
    }
    group.bench_function("rand_get", |b| {
        let mut rng = rng();
        b.iter(|| {
            let key = &keys[rng.random_range(0..keys.len())];
            black_box(tree.get(key.as_str()));
        })
    });

    group.finish();
}

pub fn rand_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("rand_remove");
    group.throughput(Throughput::Elements(1));

    let keys = gen_keys(2, 2, 3);
    group.bench_function("rand_remove", |b| {
        let mut tree = ArtIndex::new();
        for key in &keys {
            tree.insert(key.as_str(), key.clone());
        }
        let mut rng = rng();
        b.iter(|| {
            let key = &keys[rng.random_range(0..keys.len())];
            black_box(tree.remove(key.as_str()));
        })
    });

    group.finish();
}

pub fn iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");

    let keys = gen_keys(2, 2, 3);
    let mut tree = ArtIndex::new();
    for key in &keys {
        tree.insert(key.as_str(), key.clone());
    }
    group.throughput(Throughput::Elements(tree.len() as u64));
    group.bench_function("iterate", |b| {
        b.iter(|| {
            for node in tree.iter() {
                black_box(node.value());
            }
        })
    });

    group.finish();
}

pub fn scan_prefix(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_prefix");

    let keys = gen_keys(2, 2, 3);
    let mut tree = ArtIndex::new();
    for key in &keys {
        tree.insert(key.as_str(), key.clone());
    }
    group.bench_function("two_level_prefix", |b| {
        b.iter(|| {
            tree.scan("aabb", |node| {
                black_box(node.value());
            });
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    rand_insert,
    rand_get,
    rand_remove,
    iterate,
    scan_prefix
);
criterion_main!(benches);
