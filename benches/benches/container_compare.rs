// Copyright 2025 the Quadfa Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::measurement::WallTime;
use criterion::{
    BatchSize, BenchmarkGroup, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use quadfa_index::{Bound, Container, DEFAULT_MAX_DEPTH, Linear, QuadTree};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

type Item = (Bound, u32);

fn gen_unit_rects(count: usize, side: i32, seed: u64) -> Vec<Item> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let x = rng.gen_range(0..side);
            let y = rng.gen_range(0..side);
            (Bound::from_xywh(x, y, 1, 1).unwrap(), i as u32)
        })
        .collect()
}

fn gen_random_rects(count: usize, side: i32, max_size: i32, seed: u64) -> Vec<Item> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let w = rng.gen_range(1..=max_size);
            let h = rng.gen_range(1..=max_size);
            let x = rng.gen_range(0..=side - w);
            let y = rng.gen_range(0..=side - h);
            (Bound::from_xywh(x, y, w, h).unwrap(), i as u32)
        })
        .collect()
}

fn gen_regions(count: usize, side: i32, size: i32, seed: u64) -> Vec<Bound> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let x = rng.gen_range(0..=side - size);
            let y = rng.gen_range(0..=side - size);
            Bound::from_xywh(x, y, size, size).unwrap()
        })
        .collect()
}

fn filled<C: Container<Item>>(mut container: C, items: &[Item]) -> C {
    for item in items {
        container.insert(*item).unwrap();
    }
    container
}

fn bench_dense_unit_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("dense_unit_grid_64");
    let outer = Bound::from_xywh(0, 0, 64, 64).unwrap();
    let items = gen_unit_rects(10_000, 64, 0xCAFE_F00D);
    let regions = gen_regions(1_000, 64, 4, 0xDEAD_BEEF);
    let tree = filled(QuadTree::<Item, 6>::new(outer), &items);
    let linear = filled(Linear::new(outer), &items);
    group.throughput(Throughput::Elements(regions.len() as u64));

    group.bench_function("quadtree_query_overlap", |b| {
        b.iter(|| {
            let hits: usize = regions.iter().map(|r| tree.query_overlap(*r).len()).sum();
            black_box(hits);
        });
    });
    group.bench_function("linear_query_overlap", |b| {
        b.iter(|| {
            let hits: usize = regions.iter().map(|r| linear.query_overlap(*r).len()).sum();
            black_box(hits);
        });
    });
    group.bench_function("quadtree_query_contain", |b| {
        b.iter(|| {
            let hits: usize = regions.iter().map(|r| tree.query_contain(*r).len()).sum();
            black_box(hits);
        });
    });
    group.bench_function("linear_query_contain", |b| {
        b.iter(|| {
            let hits: usize = regions.iter().map(|r| linear.query_contain(*r).len()).sum();
            black_box(hits);
        });
    });
    group.finish();
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_random");
    let outer = Bound::from_xywh(0, 0, 2048, 2048).unwrap();
    for &n in &[1_000usize, 10_000] {
        let items = gen_random_rects(n, 2048, 24, 0xFACE_FEED);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("quadtree_n{n}"), |b| {
            b.iter(|| {
                let tree = filled(QuadTree::<Item, DEFAULT_MAX_DEPTH>::new(outer), &items);
                black_box(tree.len())
            });
        });
        group.bench_function(format!("linear_n{n}"), |b| {
            b.iter(|| black_box(filled(Linear::new(outer), &items).len()));
        });
    }
    group.finish();
}

fn bench_max_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("max_depth_query_overlap");
    let outer = Bound::from_xywh(0, 0, 2048, 2048).unwrap();
    let items = gen_random_rects(20_000, 2048, 16, 0xC1A5_7E55);
    let regions = gen_regions(256, 2048, 64, 0xBADC_F00D);

    fn run<const D: usize>(
        group: &mut BenchmarkGroup<'_, WallTime>,
        outer: Bound,
        items: &[Item],
        regions: &[Bound],
    ) {
        let tree = filled(QuadTree::<Item, D>::new(outer), items);
        group.bench_function(format!("quadtree_depth{D}"), |b| {
            b.iter(|| {
                let hits: usize = regions.iter().map(|r| tree.query_overlap(*r).len()).sum();
                black_box(hits);
            });
        });
    }

    run::<2>(&mut group, outer, &items, &regions);
    run::<4>(&mut group, outer, &items, &regions);
    run::<6>(&mut group, outer, &items, &regions);
    run::<8>(&mut group, outer, &items, &regions);
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_overlap");
    let outer = Bound::from_xywh(0, 0, 2048, 2048).unwrap();
    let items = gen_random_rects(10_000, 2048, 24, 0x1234_5678);
    let regions = gen_regions(64, 2048, 128, 0x9999_ABCD);

    group.bench_function("quadtree", |b| {
        b.iter_batched(
            || filled(QuadTree::<Item, DEFAULT_MAX_DEPTH>::new(outer), &items),
            |mut tree| {
                let removed: usize = regions.iter().map(|r| tree.remove_overlap(*r)).sum();
                black_box(removed);
            },
            BatchSize::LargeInput,
        );
    });
    group.bench_function("linear", |b| {
        b.iter_batched(
            || filled(Linear::new(outer), &items),
            |mut linear| {
                let removed: usize = regions.iter().map(|r| linear.remove_overlap(*r)).sum();
                black_box(removed);
            },
            BatchSize::LargeInput,
        );
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_dense_unit_grid,
    bench_insert,
    bench_max_depth,
    bench_remove,
);
criterion_main!(benches);
