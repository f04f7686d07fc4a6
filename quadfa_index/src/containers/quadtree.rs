// Copyright 2025 the Quadfa Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region quadtree container.

use alloc::vec::Vec;
use core::fmt::Debug;

use super::node::NodeArena;
use crate::container::Container;
use crate::error::{Error, Result};
use crate::store::{Handle, Store};
use crate::types::{Bound, Bounded};

/// Depth limit used when [`QuadTree`] is named without one.
pub const DEFAULT_MAX_DEPTH: usize = 6;

/// Region quadtree over integer bounds.
///
/// Items are kept in a generational store; the tree nodes only hold [`Handle`]s
/// into it. An item is owned by the deepest node whose bound fully contains the
/// item's bound, so items straddling a halving line stay at the level where the
/// line was drawn. Nodes are created lazily and at most `MAX_DEPTH` levels deep
/// (the root is level 0). Removing items never frees nodes.
///
/// `MAX_DEPTH` must be at least 1.
///
/// ```rust
/// use quadfa_index::{Bound, QuadTree, Vec2};
///
/// let outer = Bound::new(Vec2::new(0, 0), Vec2::new(100, 100)).unwrap();
/// let mut tree: QuadTree<(Bound, &str)> = QuadTree::new(outer);
/// let seam = Bound::new(Vec2::new(49, 49), Vec2::new(51, 51)).unwrap();
/// let h = tree.insert((seam, "center")).unwrap();
///
/// let hits = tree.query_overlap(Bound::new(Vec2::new(50, 50), Vec2::new(50, 50)).unwrap());
/// assert_eq!(hits, [h]);
/// assert_eq!(tree.get(h).map(|(_, name)| *name), Some("center"));
/// ```
#[derive(Clone)]
pub struct QuadTree<T, const MAX_DEPTH: usize = DEFAULT_MAX_DEPTH> {
    store: Store<T>,
    nodes: NodeArena<MAX_DEPTH>,
}

impl<T, const MAX_DEPTH: usize> Debug for QuadTree<T, MAX_DEPTH> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTree")
            .field("outer", &self.nodes.root().bound)
            .field("max_depth", &MAX_DEPTH)
            .field("nodes", &self.nodes.node_count())
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl<T, const MAX_DEPTH: usize> QuadTree<T, MAX_DEPTH> {
    /// Create an empty tree covering `outer`. The outer bound never changes.
    pub fn new(outer: Bound) -> Self {
        Self {
            store: Store::default(),
            nodes: NodeArena::new(outer),
        }
    }

    /// The bound of the root node.
    pub fn outer_bound(&self) -> Bound {
        self.nodes.root().bound
    }

    /// Reserve space for at least `n` more items.
    pub fn reserve(&mut self, n: usize) {
        self.store.reserve(n);
    }

    /// Resolve a handle. `None` once the item has been removed.
    pub fn get(&self, handle: Handle) -> Option<&T> {
        self.store.get(handle)
    }

    /// Whether `handle` still refers to a stored item.
    pub fn contains(&self, handle: Handle) -> bool {
        self.store.contains(handle)
    }

    /// Number of stored items.
    pub const fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether no items are stored.
    pub const fn is_empty(&self) -> bool {
        self.store.len() == 0
    }

    /// All stored items with their handles, in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (Handle, &T)> + '_ {
        self.store.iter()
    }

    /// Remove every item and every node except the root.
    ///
    /// All outstanding handles become stale.
    pub fn clear(&mut self) {
        self.store.clear();
        self.nodes.clear();
    }

    /// Number of allocated nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.nodes.node_count()
    }

    /// Deepest level that currently has a node; 0 when only the root exists.
    pub fn depth(&self) -> usize {
        self.nodes.depth()
    }

    /// Handles of items whose bound overlaps `region` (edges inclusive).
    ///
    /// Each handle appears once. The order is deterministic for a given tree
    /// state but otherwise unspecified.
    pub fn query_overlap(&self, region: Bound) -> Vec<Handle> {
        self.nodes.query(region, Bound::overlaps)
    }

    /// Handles of items whose bound lies entirely inside `region`.
    pub fn query_contain(&self, region: Bound) -> Vec<Handle> {
        self.nodes.query(region, Bound::contains)
    }

    /// Remove items whose bound overlaps `region`. Returns the number removed.
    pub fn remove_overlap(&mut self, region: Bound) -> usize {
        self.remove_with(region, Bound::overlaps)
    }

    /// Remove items whose bound lies entirely inside `region`. Returns the number removed.
    pub fn remove_contain(&mut self, region: Bound) -> usize {
        self.remove_with(region, Bound::contains)
    }

    /// Bounds of all nodes in breadth-first order, root first.
    pub fn bounds(&self) -> Vec<Bound> {
        self.nodes.bounds()
    }

    fn remove_with(&mut self, region: Bound, pred: fn(&Bound, &Bound) -> bool) -> usize {
        let store = &mut self.store;
        let removed = self.nodes.remove(region, pred, |handle| {
            let item = store.remove(handle);
            debug_assert!(item.is_some(), "node held a stale handle");
        });
        log::trace!("removed {removed} items in {region}");
        removed
    }
}

impl<T: Bounded, const MAX_DEPTH: usize> QuadTree<T, MAX_DEPTH> {
    /// Store an item and return its handle.
    ///
    /// Fails with [`Error::OutOfBounds`] if the item's bound is not contained in the
    /// outer bound; the tree is left unchanged and the item is dropped.
    pub fn insert(&mut self, item: T) -> Result<Handle> {
        let bound = item.bound();
        let outer = self.outer_bound();
        if !outer.contains(&bound) {
            log::debug!("rejecting item {bound} outside quadtree bound {outer}");
            return Err(Error::OutOfBounds { bound, outer });
        }
        let handle = self.store.insert(item);
        self.nodes.insert(handle, bound);
        Ok(handle)
    }

    /// Insert items in order, stopping at the first one that is rejected.
    ///
    /// Items inserted before the failure stay in the tree.
    pub fn try_extend<I>(&mut self, items: I) -> Result<Vec<Handle>>
    where
        I: IntoIterator<Item = T>,
    {
        let items = items.into_iter();
        let (lower, _) = items.size_hint();
        self.reserve(lower);
        items.map(|item| self.insert(item)).collect()
    }
}

impl<T: Bounded, const MAX_DEPTH: usize> Container<T> for QuadTree<T, MAX_DEPTH> {
    fn outer_bound(&self) -> Bound {
        self.outer_bound()
    }

    fn insert(&mut self, item: T) -> Result<Handle> {
        self.insert(item)
    }

    fn query_overlap(&self, region: Bound) -> Vec<Handle> {
        self.query_overlap(region)
    }

    fn query_contain(&self, region: Bound) -> Vec<Handle> {
        self.query_contain(region)
    }

    fn remove_overlap(&mut self, region: Bound) -> usize {
        self.remove_overlap(region)
    }

    fn remove_contain(&mut self, region: Bound) -> usize {
        self.remove_contain(region)
    }

    fn bounds(&self) -> Vec<Bound> {
        self.bounds()
    }

    fn get(&self, handle: Handle) -> Option<&T> {
        self.get(handle)
    }

    fn len(&self) -> usize {
        self.len()
    }
}
