// Copyright 2025 the Quadfa Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use quadfa_index::{Bound, DEFAULT_MAX_DEPTH, QuadTree};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use rstar::primitives::Rectangle;
use rstar::{AABB, RTree};

fn gen_random_rects(count: usize, side: i32, max_size: i32) -> Vec<Bound> {
    let mut rng = StdRng::seed_from_u64(0xFACE_FEED_CAFE_BABE);
    (0..count)
        .map(|_| {
            let w = rng.gen_range(1..=max_size);
            let h = rng.gen_range(1..=max_size);
            let x = rng.gen_range(0..=side - w);
            let y = rng.gen_range(0..=side - h);
            Bound::from_xywh(x, y, w, h).unwrap()
        })
        .collect()
}

fn to_rstar_rects(v: &[Bound]) -> Vec<Rectangle<[i32; 2]>> {
    v.iter()
        .map(|r| {
            let tl = r.top_left();
            let br = r.bottom_right();
            Rectangle::from_corners([tl.x, tl.y], [br.x, br.y])
        })
        .collect()
}

fn to_envelope(r: Bound) -> AABB<[i32; 2]> {
    let tl = r.top_left();
    let br = r.bottom_right();
    AABB::from_corners([tl.x, tl.y], [br.x, br.y])
}

fn bench_rtree_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_external_compare_i32");
    let outer = Bound::from_xywh(0, 0, 2048, 2048).unwrap();
    let query = Bound::from_xywh(800, 800, 400, 400).unwrap();
    for &n in &[4_096usize, 16_384] {
        let rects = gen_random_rects(n, 2048, 24);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("quadfa_build_query_n{n}"), |b| {
            b.iter_batched(
                || QuadTree::<Bound, DEFAULT_MAX_DEPTH>::new(outer),
                |mut tree| {
                    for r in rects.iter().copied() {
                        let _ = tree.insert(r);
                    }
                    let hits = tree.query_overlap(query).len() + tree.query_contain(query).len();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("rstar_build_query_bulk_n{n}"), |b| {
            b.iter_batched(
                || to_rstar_rects(&rects),
                |rectangles| {
                    let tree = RTree::bulk_load(rectangles);
                    let envelope = to_envelope(query);
                    let hits = tree.locate_in_envelope_intersecting(&envelope).count()
                        + tree.locate_in_envelope(&envelope).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("rstar_build_query_incremental_n{n}"), |b| {
            b.iter_batched(
                || to_rstar_rects(&rects),
                |rectangles| {
                    let mut tree = RTree::new();
                    for r in rectangles {
                        tree.insert(r);
                    }
                    let envelope = to_envelope(query);
                    let hits = tree.locate_in_envelope_intersecting(&envelope).count()
                        + tree.locate_in_envelope(&envelope).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rtree_external_compare);
criterion_main!(benches);
