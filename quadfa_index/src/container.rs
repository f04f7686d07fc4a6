// Copyright 2025 the Quadfa Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Container trait shared by the quadtree and the linear scan.

use alloc::vec::Vec;

use crate::error::Result;
use crate::store::Handle;
use crate::types::{Bound, Bounded};

/// Region-queryable item container.
///
/// Implemented by [`QuadTree`](crate::QuadTree) and [`Linear`](crate::Linear) so the two
/// can be swapped behind a `Box<dyn Container<T>>` and compared on the same workload.
pub trait Container<T: Bounded> {
    /// Fixed outer bound; every stored item lies inside it.
    fn outer_bound(&self) -> Bound;

    /// Store an item and return its handle.
    ///
    /// Fails with [`Error::OutOfBounds`](crate::Error::OutOfBounds) if the item's bound is
    /// not contained in [`outer_bound`](Container::outer_bound); the container is unchanged.
    fn insert(&mut self, item: T) -> Result<Handle>;

    /// Handles of items whose bound overlaps `region` (edges inclusive).
    fn query_overlap(&self, region: Bound) -> Vec<Handle>;

    /// Handles of items whose bound is fully contained in `region`.
    fn query_contain(&self, region: Bound) -> Vec<Handle>;

    /// Remove items whose bound overlaps `region`. Returns the number removed.
    fn remove_overlap(&mut self, region: Bound) -> usize;

    /// Remove items whose bound is fully contained in `region`. Returns the number removed.
    fn remove_contain(&mut self, region: Bound) -> usize;

    /// Bounds describing the internal partition, for debugging and drawing.
    fn bounds(&self) -> Vec<Bound>;

    /// Resolve a handle. `None` once the item has been removed.
    fn get(&self, handle: Handle) -> Option<&T>;

    /// Number of stored items.
    fn len(&self) -> usize;

    /// Whether no items are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
