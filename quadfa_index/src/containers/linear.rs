// Copyright 2025 the Quadfa Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear-scan container. Small and simple; the reference the quadtree is checked against.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::container::Container;
use crate::error::{Error, Result};
use crate::store::{Handle, Store};
use crate::types::{Bound, Bounded};

/// Container that answers every query by scanning all items.
pub struct Linear<T> {
    outer: Bound,
    store: Store<T>,
}

impl<T> Debug for Linear<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Linear")
            .field("outer", &self.outer)
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl<T: Bounded> Linear<T> {
    /// Create an empty container accepting items inside `outer`.
    pub fn new(outer: Bound) -> Self {
        Self {
            outer,
            store: Store::default(),
        }
    }

    fn scan<P>(&self, region: Bound, pred: P) -> Vec<Handle>
    where
        P: Fn(&Bound, &Bound) -> bool,
    {
        let mut out = Vec::new();
        for (handle, item) in self.store.iter() {
            if pred(&region, &item.bound()) {
                out.push(handle);
            }
        }
        out
    }
}

impl<T: Bounded> Container<T> for Linear<T> {
    fn outer_bound(&self) -> Bound {
        self.outer
    }

    fn insert(&mut self, item: T) -> Result<Handle> {
        let bound = item.bound();
        if !self.outer.contains(&bound) {
            log::debug!("rejecting item {bound} outside linear bound {}", self.outer);
            return Err(Error::OutOfBounds {
                bound,
                outer: self.outer,
            });
        }
        Ok(self.store.insert(item))
    }

    fn query_overlap(&self, region: Bound) -> Vec<Handle> {
        self.scan(region, Bound::overlaps)
    }

    fn query_contain(&self, region: Bound) -> Vec<Handle> {
        self.scan(region, Bound::contains)
    }

    fn remove_overlap(&mut self, region: Bound) -> usize {
        self.store.retain(|item| !region.overlaps(&item.bound()))
    }

    fn remove_contain(&mut self, region: Bound) -> usize {
        self.store.retain(|item| !region.contains(&item.bound()))
    }

    fn bounds(&self) -> Vec<Bound> {
        vec![self.outer]
    }

    fn get(&self, handle: Handle) -> Option<&T> {
        self.store.get(handle)
    }

    fn len(&self) -> usize {
        self.store.len()
    }
}
