//! Handle-tracking priority queue
//!
//! [`KeyedHeap`] is the engine applied to a collection that remembers where
//! each element lives. Every element carries a [`KeyedHandle`], and the
//! collection's `swap` keeps a handle → index table current. Priority changes
//! become an in-place write followed by [`engine::fix`], and arbitrary
//! deletion becomes [`engine::remove`] at the tracked index.
//!
//! Handles are `slotmap` keys, so a handle to a removed element is detected
//! instead of silently aliasing a newer element.
//!
//! # Time Complexity
//!
//! | Operation          | Complexity |
//! |--------------------|------------|
//! | `push_with_handle` | O(log n)   |
//! | `pop`              | O(log n)   |
//! | `peek`             | O(1)       |
//! | `change_priority`  | O(log n)   |
//! | `decrease_key`     | O(log n)   |
//! | `remove`           | O(log n)   |
//! | `merge`            | O(n + m)   |
//!
//! # Example
//!
//! ```rust
//! use sift_heap::keyed::KeyedHeap;
//! use sift_heap::{DecreaseKeyHeap, Heap};
//!
//! let mut heap = KeyedHeap::new();
//! let banana = heap.push_with_handle(3, "banana");
//! let _apple = heap.push_with_handle(2, "apple");
//! let pear = heap.push_with_handle(4, "pear");
//!
//! heap.change_priority(&pear, 5).unwrap();
//! heap.decrease_key(&banana, 1).unwrap();
//!
//! assert_eq!(heap.pop(), Some((1, "banana")));
//! assert_eq!(heap.remove(&pear), Ok((5, "pear")));
//! assert_eq!(heap.pop(), Some((2, "apple")));
//! assert!(heap.is_empty());
//! ```

use slotmap::{new_key_type, SlotMap};
use tracing::debug;

use crate::engine;
use crate::traits::{DecreaseKeyHeap, Handle, Heap, HeapError, HeapInterface};

new_key_type! {
    /// Stable reference to an element of a [`KeyedHeap`]
    pub struct KeyedHandle;
}

impl Handle for KeyedHandle {}

#[derive(Debug, Clone)]
struct Slot<T, P> {
    priority: P,
    item: T,
    handle: KeyedHandle,
}

/// Heap array plus the index of every live handle
///
/// Invariant: `positions[slots[i].handle] == i` for every `i`.
#[derive(Debug, Clone)]
struct Tracked<T, P> {
    slots: Vec<Slot<T, P>>,
    positions: SlotMap<KeyedHandle, usize>,
}

impl<T, P> Tracked<T, P> {
    fn record(&mut self, i: usize) {
        let handle = self.slots[i].handle;
        if let Some(pos) = self.positions.get_mut(handle) {
            *pos = i;
        }
    }
}

impl<T, P: Ord> HeapInterface<Slot<T, P>> for Tracked<T, P> {
    fn len(&self) -> usize {
        self.slots.len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.slots[i].priority < self.slots[j].priority
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.slots.as_mut_slice().swap(i, j);
        self.record(i);
        self.record(j);
    }

    fn push(&mut self, x: Slot<T, P>) {
        self.slots.push(x);
        self.record(self.slots.len() - 1);
    }

    fn pop(&mut self) -> Option<Slot<T, P>> {
        self.slots.pop()
    }
}

/// A binary min-heap whose elements can be updated or removed by handle
#[derive(Debug, Clone)]
pub struct KeyedHeap<T, P: Ord> {
    tracked: Tracked<T, P>,
}

impl<T, P: Ord> KeyedHeap<T, P> {
    /// Returns the position of `handle` in the heap array
    fn position(&self, handle: &KeyedHandle) -> Result<usize, HeapError> {
        self.tracked.positions.get(*handle).copied().ok_or_else(|| {
            debug!(?handle, "stale handle");
            HeapError::InvalidHandle
        })
    }

    /// Returns true if `handle` refers to an element still in the heap
    pub fn contains(&self, handle: &KeyedHandle) -> bool {
        self.tracked.positions.contains_key(*handle)
    }

    /// Returns the priority and item for `handle`
    pub fn get(&self, handle: &KeyedHandle) -> Option<(&P, &T)> {
        let pos = *self.tracked.positions.get(*handle)?;
        self.tracked.slots.get(pos).map(|s| (&s.priority, &s.item))
    }

    /// Sets a new priority for `handle`, larger or smaller than the current one
    ///
    /// Returns the previous priority.
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidHandle`] if the element is no longer in the heap.
    pub fn change_priority(&mut self, handle: &KeyedHandle, priority: P) -> Result<P, HeapError> {
        let pos = self.position(handle)?;
        let old = std::mem::replace(&mut self.tracked.slots[pos].priority, priority);
        engine::fix(&mut self.tracked, pos)?;
        Ok(old)
    }

    /// Removes the element for `handle`, wherever it is in the heap
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidHandle`] if the element is no longer in the heap.
    pub fn remove(&mut self, handle: &KeyedHandle) -> Result<(P, T), HeapError> {
        let pos = self.position(handle)?;
        let slot = engine::remove(&mut self.tracked, pos)?;
        self.tracked.positions.remove(slot.handle);
        Ok((slot.priority, slot.item))
    }

    /// Iterates over handles, priorities and items in heap order
    pub fn iter(&self) -> impl Iterator<Item = (KeyedHandle, &P, &T)> {
        self.tracked
            .slots
            .iter()
            .map(|s| (s.handle, &s.priority, &s.item))
    }

    /// Removes all elements, invalidating every handle
    pub fn clear(&mut self) {
        self.tracked.slots.clear();
        self.tracked.positions.clear();
    }

    #[cfg(test)]
    fn positions_consistent(&self) -> bool {
        self.tracked.positions.len() == self.tracked.slots.len()
            && self
                .tracked
                .slots
                .iter()
                .enumerate()
                .all(|(i, s)| self.tracked.positions.get(s.handle) == Some(&i))
    }
}

impl<T, P: Ord> Heap<T, P> for KeyedHeap<T, P> {
    fn new() -> Self {
        Self {
            tracked: Tracked {
                slots: Vec::new(),
                positions: SlotMap::with_key(),
            },
        }
    }

    fn is_empty(&self) -> bool {
        self.tracked.slots.is_empty()
    }

    fn len(&self) -> usize {
        self.tracked.slots.len()
    }

    fn push(&mut self, priority: P, item: T) {
        self.push_with_handle(priority, item);
    }

    fn peek(&self) -> Option<(&P, &T)> {
        self.tracked.slots.first().map(|s| (&s.priority, &s.item))
    }

    fn pop(&mut self) -> Option<(P, T)> {
        let slot = engine::pop(&mut self.tracked).ok()?;
        self.tracked.positions.remove(slot.handle);
        Some((slot.priority, slot.item))
    }

    /// Handles issued by `other` are not valid in `self` after the merge
    fn merge(&mut self, other: Self) {
        if other.tracked.slots.is_empty() {
            return;
        }
        for slot in other.tracked.slots {
            let handle = self.tracked.positions.insert(self.tracked.slots.len());
            self.tracked.slots.push(Slot {
                priority: slot.priority,
                item: slot.item,
                handle,
            });
        }
        engine::init(&mut self.tracked);
    }
}

impl<T, P: Ord> DecreaseKeyHeap<T, P> for KeyedHeap<T, P> {
    type Handle = KeyedHandle;

    fn push_with_handle(&mut self, priority: P, item: T) -> KeyedHandle {
        let handle = self.tracked.positions.insert(self.tracked.slots.len());
        engine::push(
            &mut self.tracked,
            Slot {
                priority,
                item,
                handle,
            },
        );
        handle
    }

    fn decrease_key(&mut self, handle: &KeyedHandle, new_priority: P) -> Result<(), HeapError> {
        let pos = self.position(handle)?;
        if new_priority >= self.tracked.slots[pos].priority {
            return Err(HeapError::PriorityNotDecreased);
        }
        self.tracked.slots[pos].priority = new_priority;
        engine::fix(&mut self.tracked, pos)
    }
}

impl<T, P: Ord> Default for KeyedHeap<T, P> {
    fn default() -> Self {
        Self::new()
    }
}
