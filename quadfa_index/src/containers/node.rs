// Copyright 2025 the Quadfa Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree nodes and the traversal algorithms over them.
//!
//! Nodes live in an arena owned by the tree and refer to their children by
//! [`NodeIdx`]. The root is always at index 0. Nodes are created lazily on insert
//! and never freed before the whole arena is dropped or cleared.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::store::Handle;
use crate::types::{Bound, Quadrant};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeIdx(usize);

impl NodeIdx {
    pub(crate) const ROOT: Self = Self(0);

    const fn new(i: usize) -> Self {
        Self(i)
    }

    pub(crate) const fn get(self) -> usize {
        self.0
    }
}

/// A handle together with the bound of its item, cached so traversals never
/// have to go back to the store.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Entry {
    pub(crate) handle: Handle,
    pub(crate) bound: Bound,
}

#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) bound: Bound,
    pub(crate) depth: usize,
    pub(crate) items: Vec<Entry>,
    pub(crate) children: [Option<NodeIdx>; 4],
    /// Quadrants of `bound`; `None` for leaves.
    pub(crate) child_bounds: Option<[Bound; 4]>,
}

impl Node {
    fn new(bound: Bound, depth: usize, max_depth: usize) -> Self {
        let leaf = !bound.quad_divisible() || depth + 1 == max_depth;
        Self {
            bound,
            depth,
            items: Vec::new(),
            children: [None; 4],
            child_bounds: (!leaf).then(|| bound.quad_division()),
        }
    }

    #[cfg(test)]
    pub(crate) const fn is_leaf(&self) -> bool {
        self.child_bounds.is_none()
    }

    fn existing_children(&self) -> impl Iterator<Item = NodeIdx> + '_ {
        self.children.iter().flatten().copied()
    }

    /// Existing children whose quadrant overlaps `region`, in quadrant order.
    fn overlapping_children(&self, region: Bound) -> impl Iterator<Item = NodeIdx> + '_ {
        self.children
            .iter()
            .zip(self.child_bounds.iter().flatten())
            .filter(move |(_, child_bound)| region.overlaps(child_bound))
            .filter_map(|(child, _)| *child)
    }
}

/// Node arena of a quadtree limited to `MAX_DEPTH` levels.
#[derive(Clone, Debug)]
pub(crate) struct NodeArena<const MAX_DEPTH: usize> {
    pub(crate) nodes: Vec<Node>,
}

impl<const MAX_DEPTH: usize> NodeArena<MAX_DEPTH> {
    pub(crate) fn new(bound: Bound) -> Self {
        const { assert!(MAX_DEPTH >= 1, "a quadtree needs at least one level") };
        let mut nodes = Vec::new();
        nodes.push(Node::new(bound, 0, MAX_DEPTH));
        Self { nodes }
    }

    pub(crate) fn root(&self) -> &Node {
        &self.nodes[NodeIdx::ROOT.get()]
    }

    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Deepest level that currently holds a node.
    pub(crate) fn depth(&self) -> usize {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }

    /// Drop every non-root node and empty the root.
    pub(crate) fn clear(&mut self) {
        self.nodes.truncate(1);
        let root = &mut self.nodes[NodeIdx::ROOT.get()];
        root.items.clear();
        root.children = [None; 4];
    }

    /// Place `handle` in the deepest node whose bound contains `bound`.
    ///
    /// The caller guarantees that the root bound contains `bound`.
    pub(crate) fn insert(&mut self, handle: Handle, bound: Bound) {
        let mut current = NodeIdx::ROOT;
        while let Some(next) = self.descend(current, &bound) {
            current = next;
        }
        self.nodes[current.get()]
            .items
            .push(Entry { handle, bound });
    }

    /// The child of `idx` that should own `bound`, created on demand.
    ///
    /// Quadrants are tried in [`Quadrant::ALL`] order, so an item lying on a seam
    /// goes to the first quadrant that contains it.
    fn descend(&mut self, idx: NodeIdx, bound: &Bound) -> Option<NodeIdx> {
        let node = &self.nodes[idx.get()];
        let child_bounds = node.child_bounds?;
        for quadrant in Quadrant::ALL {
            let child_bound = child_bounds[quadrant.index()];
            if !child_bound.contains(bound) {
                continue;
            }
            if let Some(child) = node.children[quadrant.index()] {
                return Some(child);
            }
            if node.depth < MAX_DEPTH - 1 {
                let depth = node.depth + 1;
                return Some(self.create_child(idx, quadrant, child_bound, depth));
            }
        }
        None
    }

    fn create_child(
        &mut self,
        parent: NodeIdx,
        quadrant: Quadrant,
        bound: Bound,
        depth: usize,
    ) -> NodeIdx {
        let idx = NodeIdx::new(self.nodes.len());
        self.nodes.push(Node::new(bound, depth, MAX_DEPTH));
        self.nodes[parent.get()].children[quadrant.index()] = Some(idx);
        log::trace!("created {quadrant:?} node {bound} at depth {depth}");
        idx
    }

    /// Handles of items accepted by `pred(region, item_bound)`.
    ///
    /// Nodes whose bound lies inside `region` are drained wholesale without
    /// consulting `pred` again, which is sound for both overlap and containment.
    pub(crate) fn query<P>(&self, region: Bound, pred: P) -> Vec<Handle>
    where
        P: Fn(&Bound, &Bound) -> bool,
    {
        let mut found = Vec::new();
        let mut search = VecDeque::from([NodeIdx::ROOT]);
        let mut drain = VecDeque::new();

        while let Some(idx) = search.pop_front() {
            let node = &self.nodes[idx.get()];
            if region.contains(&node.bound) {
                drain.push_back(idx);
                continue;
            }
            found.extend(
                node.items
                    .iter()
                    .filter(|e| pred(&region, &e.bound))
                    .map(|e| e.handle),
            );
            search.extend(node.overlapping_children(region));
        }

        while let Some(idx) = drain.pop_front() {
            let node = &self.nodes[idx.get()];
            found.extend(node.items.iter().map(|e| e.handle));
            drain.extend(node.existing_children());
        }
        found
    }

    /// Remove the entries `query` would report, calling `release` for each one
    /// before its entry leaves the node. Returns the number removed.
    pub(crate) fn remove<P, F>(&mut self, region: Bound, pred: P, mut release: F) -> usize
    where
        P: Fn(&Bound, &Bound) -> bool,
        F: FnMut(Handle),
    {
        let mut removed = 0;
        let mut search = VecDeque::from([NodeIdx::ROOT]);
        let mut drain = VecDeque::new();

        while let Some(idx) = search.pop_front() {
            let node = &mut self.nodes[idx.get()];
            if region.contains(&node.bound) {
                drain.push_back(idx);
                continue;
            }
            let before = node.items.len();
            node.items.retain(|e| {
                if pred(&region, &e.bound) {
                    release(e.handle);
                    false
                } else {
                    true
                }
            });
            removed += before - node.items.len();
            search.extend(node.overlapping_children(region));
        }

        while let Some(idx) = drain.pop_front() {
            let node = &mut self.nodes[idx.get()];
            removed += node.items.len();
            for e in node.items.drain(..) {
                release(e.handle);
            }
            drain.extend(node.existing_children());
        }
        removed
    }

    /// Bounds of all nodes in breadth-first order.
    pub(crate) fn bounds(&self) -> Vec<Bound> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut queue = VecDeque::from([NodeIdx::ROOT]);
        while let Some(idx) = queue.pop_front() {
            let node = &self.nodes[idx.get()];
            out.push(node.bound);
            queue.extend(node.existing_children());
        }
        out
    }

    /// The node that holds `handle`, if any. Linear in the number of nodes.
    #[cfg(test)]
    pub(crate) fn owner_of(&self, handle: Handle) -> Option<&Node> {
        self.nodes
            .iter()
            .find(|n| n.items.iter().any(|e| e.handle == handle))
    }
}
