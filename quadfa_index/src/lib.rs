// Copyright 2025 the Quadfa Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadfa Index: a region quadtree over integer rectangles.
//!
//! - Insert items that carry an axis-aligned integer [`Bound`] and get back a stable [`Handle`].
//! - Query by region, either for items overlapping it or for items fully contained in it.
//! - Remove every item overlapping, or contained in, a region.
//!
//! Items live in a generational store owned by the container; tree nodes hold only
//! handles. Handles stay valid while other items come and go, and stop resolving once
//! their own item is removed.
//!
//! The payload type only needs to implement [`Bounded`]. `Bound` itself and
//! `(Bound, P)` pairs do.
//!
//! # Example
//!
//! ```rust
//! use quadfa_index::{Bound, QuadTree, Vec2};
//!
//! let outer = Bound::new(Vec2::new(0, 0), Vec2::new(100, 100)).unwrap();
//! let mut tree: QuadTree<(Bound, char)> = QuadTree::new(outer);
//!
//! let a = tree.insert((Bound::from_xywh(0, 0, 10, 10).unwrap(), 'a')).unwrap();
//! let c = tree.insert((Bound::from_xywh(40, 40, 20, 20).unwrap(), 'c')).unwrap();
//!
//! // Overlap counts touching edges; containment counts equal bounds.
//! let half = Bound::from_xywh(0, 0, 50, 50).unwrap();
//! assert_eq!(tree.query_contain(half), [a]);
//! assert_eq!(tree.query_overlap(half).len(), 2);
//!
//! assert_eq!(tree.remove_overlap(half), 2);
//! assert!(tree.get(c).is_none());
//! ```
//!
//! Items must lie inside the outer bound given at construction:
//!
//! ```rust
//! use quadfa_index::{Bound, Error, QuadTree};
//!
//! let mut tree: QuadTree<Bound> = QuadTree::new(Bound::from_xywh(0, 0, 64, 64).unwrap());
//! let outside = Bound::from_xywh(60, 60, 10, 10).unwrap();
//! assert!(matches!(tree.insert(outside), Err(Error::OutOfBounds { .. })));
//! assert!(tree.is_empty());
//! ```
//!
//! ## Choosing a container
//!
//! - [`QuadTree`]: cost scales with the number of answers and the nodes the region
//!   touches. The depth limit is the const parameter `MAX_DEPTH` (default
//!   [`DEFAULT_MAX_DEPTH`]); deeper trees separate dense scenes better but allocate
//!   more nodes.
//! - [`Linear`]: scans everything. Useful as a baseline and for very small sets.
//!
//! Both implement [`Container`], so they can be swapped behind a trait object.
//!
//! ## Logging
//!
//! The crate reports through the [`log`] facade: rejected inserts at `debug`,
//! node creation and removal counts at `trace`. It never installs a logger.

#![no_std]

extern crate alloc;

pub mod container;
pub mod containers;
pub mod error;
pub mod store;
pub mod types;

pub use container::Container;
pub use containers::linear::Linear;
pub use containers::quadtree::{DEFAULT_MAX_DEPTH, QuadTree};
pub use error::{Error, Result};
pub use store::Handle;
pub use types::{Bound, Bounded, Quadrant, Vec2};
