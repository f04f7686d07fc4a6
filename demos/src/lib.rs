// Copyright 2025 the Quadfa Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene helpers shared by the Quadfa demo programs.
//!
//! - [`Shape`]: a coloured rectangle payload.
//! - [`random_gray_shape`]: scene generator producing light-gray shapes.
//! - [`Canvas`]: a character grid used to print container partitions.
//! - [`SceneConfig`]: command-line options for the demos.
//!
//! Run:
//! - `cargo run -p quadfa_demos --example shape_scene -- --help`

use core::fmt;

use clap::Parser;
use quadfa_index::{Bound, Bounded, Vec2};
use rand::Rng;

/// RGB colour, one byte per channel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
}

impl Color {
    /// Opaque white, used for shapes placed by hand.
    pub const WHITE: Self = Self::gray(255);

    /// A gray with all three channels set to `level`.
    pub const fn gray(level: u8) -> Self {
        Self {
            r: level,
            g: level,
            b: level,
        }
    }
}

/// A rectangle with a colour.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Shape {
    /// Occupied rectangle.
    pub bound: Bound,
    /// Fill colour.
    pub color: Color,
}

impl Bounded for Shape {
    fn bound(&self) -> Bound {
        self.bound
    }
}

/// A random shape inside `area` with a light gray colour.
///
/// Width and height are drawn from `min_size..=max_size` per axis and clamped so
/// the shape fits in `area`. The gray level is drawn from `127..=255`.
pub fn random_gray_shape<R: Rng + ?Sized>(
    area: Bound,
    min_size: Vec2,
    max_size: Vec2,
    rng: &mut R,
) -> Shape {
    let room = area.size();
    let size = Vec2::new(
        random_extent(min_size.x, max_size.x, room.x, rng),
        random_extent(min_size.y, max_size.y, room.y, rng),
    );
    let tl = area.top_left();
    let br = area.bottom_right();
    let top_left = Vec2::new(
        rng.gen_range(tl.x..=br.x - size.x),
        rng.gen_range(tl.y..=br.y - size.y),
    );
    Shape {
        bound: Bound::from_corners(top_left, top_left + size),
        color: Color::gray(rng.gen_range(127..=255)),
    }
}

fn random_extent<R: Rng + ?Sized>(min: i32, max: i32, room: i32, rng: &mut R) -> i32 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rng.gen_range(lo.max(0)..=hi.max(0)).min(room)
}

/// Character grid onto which bounds are projected.
///
/// The grid maps `area` onto `cols` × `rows` cells. Coordinates outside `area` are
/// clamped to its edge.
#[derive(Clone, Debug)]
pub struct Canvas {
    area: Bound,
    cols: usize,
    rows: usize,
    cells: Vec<char>,
}

impl Canvas {
    /// Blank canvas. Zero dimensions are raised to one cell.
    pub fn new(area: Bound, cols: usize, rows: usize) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            area,
            cols,
            rows,
            cells: vec![' '; cols * rows],
        }
    }

    /// Draw the outline of `bound` with box-drawing ASCII.
    pub fn outline(&mut self, bound: Bound) {
        let (c0, r0, c1, r1) = self.project(bound);
        for c in c0..=c1 {
            self.stroke(c, r0, '-');
            self.stroke(c, r1, '-');
        }
        for r in r0..=r1 {
            self.stroke(c0, r, '|');
            self.stroke(c1, r, '|');
        }
        for (c, r) in [(c0, r0), (c1, r0), (c0, r1), (c1, r1)] {
            self.set(c, r, '+');
        }
    }

    /// Fill every cell covered by `bound` with `mark`.
    pub fn fill(&mut self, bound: Bound, mark: char) {
        let (c0, r0, c1, r1) = self.project(bound);
        for r in r0..=r1 {
            for c in c0..=c1 {
                self.set(c, r, mark);
            }
        }
    }

    fn project(&self, bound: Bound) -> (usize, usize, usize, usize) {
        let tl = self.area.top_left();
        let size = self.area.size();
        let col = |x: i32| scale(x, tl.x, size.x, self.cols);
        let row = |y: i32| scale(y, tl.y, size.y, self.rows);
        (
            col(bound.top_left().x),
            row(bound.top_left().y),
            col(bound.bottom_right().x),
            row(bound.bottom_right().y),
        )
    }

    fn stroke(&mut self, col: usize, row: usize, ch: char) {
        let cell = &mut self.cells[row * self.cols + col];
        *cell = match (*cell, ch) {
            ('|', '-') | ('-', '|') | ('+', _) => '+',
            _ => ch,
        };
    }

    fn set(&mut self, col: usize, row: usize, ch: char) {
        self.cells[row * self.cols + col] = ch;
    }
}

fn scale(v: i32, origin: i32, extent: i32, cells: usize) -> usize {
    if extent <= 0 {
        return 0;
    }
    let last = i64::try_from(cells - 1).unwrap_or(i64::MAX);
    let offset = (i64::from(v) - i64::from(origin)).clamp(0, i64::from(extent));
    usize::try_from(offset * last / i64::from(extent)).unwrap_or(0)
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.cells.chunks(self.cols) {
            let text: String = line.iter().collect();
            writeln!(f, "{}", text.trim_end())?;
        }
        Ok(())
    }
}

/// Command-line options for the scene demos.
#[derive(Parser, Clone, Debug)]
#[command(version, about = "Populate a quadtree and a linear container with the same shapes and compare them")]
pub struct SceneConfig {
    /// Scene width in units.
    #[arg(long, default_value_t = 1024)]
    pub width: i32,

    /// Scene height in units.
    #[arg(long, default_value_t = 768)]
    pub height: i32,

    /// Number of shapes to generate.
    #[arg(short = 'n', long, default_value_t = 10_000)]
    pub items: usize,

    /// Minimum shape width and height.
    #[arg(long, default_value_t = 1)]
    pub min_size: i32,

    /// Maximum shape width and height.
    #[arg(long, default_value_t = 12)]
    pub max_size: i32,

    /// Width and height of the cursor region used for queries and removals.
    #[arg(short, long, default_value_t = 100)]
    pub region: i32,

    /// Random seed; omit for a fresh scene every run.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of cursor positions to query.
    #[arg(long, default_value_t = 8)]
    pub rounds: usize,

    /// Columns of the printed partition.
    #[arg(long, default_value_t = 64)]
    pub cols: usize,

    /// Rows of the printed partition.
    #[arg(long, default_value_t = 24)]
    pub rows: usize,
}

impl SceneConfig {
    /// The scene area, `(0, 0)` to `(width - 1, height - 1)`.
    pub fn area(&self) -> quadfa_index::Result<Bound> {
        Bound::new(Vec2::ZERO, Vec2::new(self.width - 1, self.height - 1))
    }

    /// Cursor region of the configured size centred on `cursor`.
    pub fn region_at(&self, cursor: Vec2) -> Bound {
        let half = Vec2::new(self.region, self.region) / 2;
        Bound::from_corners(cursor - half, cursor + half)
    }
}
