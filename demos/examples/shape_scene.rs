// Copyright 2025 the Quadfa Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shape scene: the same random shapes in a quadtree and in a linear container.
//!
//! Moves a cursor region around the scene, times overlap and containment queries
//! on both containers, drops a white shape under the cursor, erases what the last
//! cursor touches, and prints the quadtree partition.
//!
//! Run:
//! - `cargo run -p quadfa_demos --example shape_scene`
//! - `RUST_LOG=quadfa_index=trace cargo run -p quadfa_demos --example shape_scene -- -n 200 --seed 3`

use std::time::{Duration, Instant};

use clap::Parser;
use quadfa_demos::{Canvas, Color, SceneConfig, Shape, random_gray_shape};
use quadfa_index::{Bound, Container, DEFAULT_MAX_DEPTH, Error, Linear, QuadTree, Vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

type Named = (&'static str, Box<dyn Container<Shape>>);

fn timed<R>(f: impl FnOnce() -> R) -> (R, Duration) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}

fn main() -> Result<(), Error> {
    env_logger::init();
    let cfg = SceneConfig::parse();
    let area = cfg.area()?;
    let mut rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut containers: [Named; 2] = [
        (
            "quadtree",
            Box::new(QuadTree::<Shape, DEFAULT_MAX_DEPTH>::new(area)),
        ),
        ("linear", Box::new(Linear::<Shape>::new(area))),
    ];

    let min = Vec2::new(cfg.min_size, cfg.min_size);
    let max = Vec2::new(cfg.max_size, cfg.max_size);
    for _ in 0..cfg.items {
        let shape = random_gray_shape(area, min, max, &mut rng);
        for (_, c) in &mut containers {
            c.insert(shape)?;
        }
    }
    log::info!("scene {area} holds {} shapes", cfg.items);

    let mut cursor = area.center();
    for round in 0..cfg.rounds {
        cursor = Vec2::new(
            rng.gen_range(area.top_left().x..=area.bottom_right().x),
            rng.gen_range(area.top_left().y..=area.bottom_right().y),
        );
        let region = cfg.region_at(cursor);
        println!("round {round}: cursor region {region}");
        let mut counts = Vec::new();
        for (name, c) in &containers {
            let (overlap, t_overlap) = timed(|| c.query_overlap(region));
            let (contain, t_contain) = timed(|| c.query_contain(region));
            println!(
                "  {name:>8}: overlap {:>6} in {t_overlap:>10.2?}, contain {:>6} in {t_contain:>10.2?}",
                overlap.len(),
                contain.len(),
            );
            counts.push((overlap.len(), contain.len()));
        }
        if counts.windows(2).any(|w| w[0] != w[1]) {
            log::error!("containers disagree at {region}: {counts:?}");
        }
    }

    let region = cfg.region_at(cursor);
    let stamp = Shape {
        bound: region,
        color: Color::WHITE,
    };
    for (name, c) in &mut containers {
        match c.insert(stamp) {
            Ok(handle) => log::info!("{name}: placed {region} as {handle:?}"),
            Err(err @ Error::OutOfBounds { .. }) => log::warn!("{name}: {err}"),
            Err(err) => return Err(err),
        }
    }

    for (name, c) in &mut containers {
        let (removed, t) = timed(|| c.remove_overlap(region));
        println!("{name:>10}: erased {removed} shapes touching {region} in {t:.2?}, {} left", c.len());
    }

    let (_, tree) = &containers[0];
    print_partition(&cfg, area, &tree.bounds(), region);
    Ok(())
}

fn print_partition(cfg: &SceneConfig, area: Bound, bounds: &[Bound], cursor: Bound) {
    let mut canvas = Canvas::new(area, cfg.cols, cfg.rows);
    if area.overlaps(&cursor) {
        canvas.fill(cursor, '.');
    }
    for bound in bounds {
        canvas.outline(*bound);
    }
    println!("quadtree partition ({} nodes):", bounds.len());
    print!("{canvas}");
}
