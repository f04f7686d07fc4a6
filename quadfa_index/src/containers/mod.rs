// Copyright 2025 the Quadfa Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Container implementations.
//!
//! - `quadtree`: region quadtree; queries and removals touch only the nodes
//!   overlapping the region, and nodes fully inside the region are drained
//!   without per-item tests.
//! - `linear`: flat store scanned on every query. Used as a correctness oracle
//!   and as the baseline in benchmarks.

pub mod linear;
pub(crate) mod node;
pub mod quadtree;
