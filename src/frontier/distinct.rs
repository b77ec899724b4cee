use std::cmp::Ordering::{Greater, Less};
use std::collections::hash_map::Entry::{Occupied, Vacant};

use compare::Compare;
use rustc_hash::FxHashMap;

use super::heap::parent_of;
use crate::{EmptyContainerError, Frontier, KeyOf};

use self::Action::{DoNothing, SiftUp};

/// What remains to be done once the bookkeeping of a push has settled.
#[derive(Debug, Copy, Clone)]
enum Action {
    DoNothing,
    SiftUp(usize),
}

/// An updatable binary min-heap which guarantees that at most one item per
/// projected key is ever live, always the lowest-ranked one seen so far.
///
/// A key-index map records the array slot of every stored key, and every
/// swap the sifts perform rewrites the map entries of both moved items, so
/// the map stays the exact inverse of the slot assignment at all times.
/// Pushing an item whose key is already present either overwrites the
/// incumbent in place and sifts upward from that very slot (when the new
/// item ranks strictly lower) or discards the new item silently (ties
/// favor the incumbent).
#[derive(Debug, Clone)]
pub struct DistinctHeap<T, K, C>
where
    K: KeyOf<T>,
{
    /// This is the comparator used to order the items of the heap.
    cmp: C,
    /// The projection items are deduplicated under.
    key: K,
    items: Vec<T>,
    /// A mapping that associates a projected key to the slot of the one
    /// item carrying it.
    index: FxHashMap<K::Key, usize>,
}

impl<T, K, C> DistinctHeap<T, K, C>
where
    K: KeyOf<T>,
    C: Compare<T>,
{
    /// Creates a new, empty heap deduplicating under `key` and ordered by
    /// `cmp`.
    pub fn new(key: K, cmp: C) -> Self {
        DistinctHeap {
            cmp,
            key,
            items: vec![],
            index: Default::default(),
        }
    }

    /// Internal method restoring the heap invariant upward from `from`,
    /// rewriting the key-index map at every swap.
    fn sift_up(&mut self, from: usize) {
        let mut me = from;
        let mut parent = parent_of(me);

        while me > 0 && self.cmp.compare(&self.items[me], &self.items[parent]) == Less {
            self.items.swap(me, parent);
            self.index.insert(self.key.key_of(&self.items[me]), me);
            self.index.insert(self.key.key_of(&self.items[parent]), parent);
            me = parent;
            parent = parent_of(me);
        }
    }

    /// Internal method sinking the item at `from` down, rewriting the
    /// key-index map at every swap.
    fn sift_down(&mut self, from: usize) {
        let mut me = from;
        let mut kid = self.min_child_of(me);

        while kid > 0 && self.cmp.compare(&self.items[kid], &self.items[me]) == Less {
            self.items.swap(me, kid);
            self.index.insert(self.key.key_of(&self.items[me]), me);
            self.index.insert(self.key.key_of(&self.items[kid]), kid);
            me = kid;
            kid = self.min_child_of(me);
        }
    }

    /// Internal helper returning the position of the lower-ranked child of
    /// the node at `pos`, or 0 when `pos` is a leaf (the root can never be
    /// anyone's child).
    fn min_child_of(&self, pos: usize) -> usize {
        let size = self.items.len();
        let left = pos * 2 + 1;
        let right = pos * 2 + 2;

        if left >= size {
            return 0;
        }
        if right >= size {
            return left;
        }

        match self.cmp.compare(&self.items[left], &self.items[right]) {
            Greater => right,
            _ => left,
        }
    }

    /// Verifies that the key-index map is exactly the inverse of the slot
    /// assignment. The tests call this after every operation.
    #[cfg(test)]
    fn assert_consistent(&self) {
        assert_eq!(self.index.len(), self.items.len());
        for (slot, item) in self.items.iter().enumerate() {
            assert_eq!(self.index.get(&self.key.key_of(item)), Some(&slot));
        }
    }
}

impl<T, K, C> Frontier for DistinctHeap<T, K, C>
where
    K: KeyOf<T>,
    C: Compare<T>,
{
    type Item = T;

    /// Pushes one item while ensuring that only one item per projected key
    /// is kept, the lowest-ranked one.
    fn push(&mut self, item: T) {
        let action = match self.index.entry(self.key.key_of(&item)) {
            Occupied(e) => {
                let at = *e.get();
                if self.cmp.compare(&item, &self.items[at]) == Less {
                    self.items[at] = item;
                    SiftUp(at)
                } else {
                    // not an improvement: the incumbent wins
                    DoNothing
                }
            }
            Vacant(e) => {
                let at = self.items.len();
                self.items.push(item);
                e.insert(at);
                SiftUp(at)
            }
        };

        match action {
            SiftUp(at) => self.sift_up(at),
            DoNothing => {}
        }
    }

    /// Pops the lowest-ranked item and forgets its key.
    fn pop(&mut self) -> Result<T, EmptyContainerError> {
        if self.items.is_empty() {
            return Err(EmptyContainerError);
        }

        let res = self.items.swap_remove(0);
        self.index.remove(&self.key.key_of(&res));
        if !self.items.is_empty() {
            self.index.insert(self.key.key_of(&self.items[0]), 0);
            self.sift_down(0);
        }
        Ok(res)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
