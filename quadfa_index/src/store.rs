// Copyright 2025 the Quadfa Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generational item store backing every container.
//!
//! Items live in a slot vector. Freed slots are recycled through a free list and
//! every slot keeps a generation counter that is bumped whenever its item is
//! removed, so a [`Handle`] to a removed item never resolves again, even after
//! the slot has been reused.

use alloc::vec::Vec;
use core::fmt::Debug;

/// Stable handle to an item stored in a container.
///
/// Handles stay valid across insertions and removals of other items. Once the
/// referenced item is removed, lookups with the handle return `None`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(u32, u32);

impl Handle {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Handles are 32-bit; a store never grows past u32::MAX slots."
    )]
    const fn new(idx: usize, generation: u32) -> Self {
        Self(idx as u32, generation)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }

    const fn generation(self) -> u32 {
        self.1
    }
}

#[derive(Clone)]
struct Slot<T> {
    generation: u32,
    item: Option<T>,
}

/// Slot vector with a free list; the master sequence of a container.
#[derive(Clone)]
pub(crate) struct Store<T> {
    slots: Vec<Slot<T>>,
    free_list: Vec<usize>,
    len: usize,
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            len: 0,
        }
    }
}

impl<T> Debug for Store<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Store")
            .field("total_slots", &self.slots.len())
            .field("alive", &self.len)
            .field("free", &self.free_list.len())
            .finish_non_exhaustive()
    }
}

impl<T> Store<T> {
    pub(crate) fn reserve(&mut self, n: usize) {
        self.slots.reserve(n.saturating_sub(self.free_list.len()));
    }

    pub(crate) fn insert(&mut self, item: T) -> Handle {
        self.len += 1;
        if let Some(idx) = self.free_list.pop() {
            let slot = &mut self.slots[idx];
            debug_assert!(slot.item.is_none(), "free list points at a live slot");
            slot.item = Some(item);
            return Handle::new(idx, slot.generation);
        }
        let generation = 1_u32;
        self.slots.push(Slot {
            generation,
            item: Some(item),
        });
        Handle::new(self.slots.len() - 1, generation)
    }

    pub(crate) fn get(&self, handle: Handle) -> Option<&T> {
        let slot = self.slots.get(handle.idx())?;
        if slot.generation != handle.generation() {
            return None;
        }
        slot.item.as_ref()
    }

    pub(crate) fn contains(&self, handle: Handle) -> bool {
        self.get(handle).is_some()
    }

    /// Take the item out and retire the handle.
    pub(crate) fn remove(&mut self, handle: Handle) -> Option<T> {
        let slot = self.slots.get_mut(handle.idx())?;
        if slot.generation != handle.generation() {
            return None;
        }
        let item = slot.item.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_list.push(handle.idx());
        self.len -= 1;
        Some(item)
    }

    /// Remove every item for which `f` returns `false`. Returns how many were removed.
    pub(crate) fn retain<F>(&mut self, mut f: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut removed = 0;
        for (idx, slot) in self.slots.iter_mut().enumerate() {
            let Some(item) = slot.item.as_ref() else {
                continue;
            };
            if f(item) {
                continue;
            }
            slot.item = None;
            slot.generation = slot.generation.wrapping_add(1);
            self.free_list.push(idx);
            removed += 1;
        }
        self.len -= removed;
        removed
    }

    /// Drop every item. Outstanding handles are retired, slots are kept for reuse.
    pub(crate) fn clear(&mut self) {
        for (idx, slot) in self.slots.iter_mut().enumerate() {
            if slot.item.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free_list.push(idx);
            }
        }
        self.len = 0;
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (Handle, &T)> + '_ {
        self.slots.iter().enumerate().filter_map(|(idx, slot)| {
            slot.item
                .as_ref()
                .map(|item| (Handle::new(idx, slot.generation), item))
        })
    }
}
