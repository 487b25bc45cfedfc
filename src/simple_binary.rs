//! Simple Binary Heap implementation
//!
//! An owned binary min-heap of (priority, item) pairs. It implements the
//! crate-level [`Heap`] trait and keeps its order entirely through the
//! [`engine`](crate::engine), so it behaves exactly like the engine running over
//! a caller-owned collection.
//!
//! Beyond the [`Heap`] trait, it exposes the index-based engine operations
//! directly: [`remove`](SimpleBinaryHeap::remove) and
//! [`update_priority`](SimpleBinaryHeap::update_priority). Indices refer to the
//! current heap layout (see [`as_slice`](SimpleBinaryHeap::as_slice)) and are
//! invalidated by any mutation. Use [`KeyedHeap`](crate::keyed::KeyedHeap) when
//! elements need stable handles.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity |
//! |-------------------|------------|
//! | `push`            | O(log n)   |
//! | `pop`             | O(log n)   |
//! | `peek`            | O(1)       |
//! | `remove`          | O(log n)   |
//! | `update_priority` | O(log n)   |
//! | `merge`           | O(n + m)   |
//! | `from_vec`        | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use sift_heap::Heap;
//! use sift_heap::simple_binary::SimpleBinaryHeap;
//!
//! let mut heap = SimpleBinaryHeap::new();
//! heap.push(3, "three");
//! heap.push(1, "one");
//! heap.push(2, "two");
//!
//! assert_eq!(heap.peek(), Some((&1, &"one")));
//! assert_eq!(heap.pop(), Some((1, "one")));
//! assert_eq!(heap.pop(), Some((2, "two")));
//! assert_eq!(heap.pop(), Some((3, "three")));
//! assert_eq!(heap.pop(), None);
//! ```

use tracing::{debug, trace};

use crate::engine;
use crate::traits::{Heap, HeapError, HeapInterface};

/// The backing array, ordered by priority only
#[derive(Debug, Clone)]
struct Entries<T, P> {
    data: Vec<(P, T)>,
}

impl<T, P: Ord> HeapInterface<(P, T)> for Entries<T, P> {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.data[i].0 < self.data[j].0
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.data.as_mut_slice().swap(i, j)
    }

    fn push(&mut self, x: (P, T)) {
        self.data.push(x)
    }

    fn pop(&mut self) -> Option<(P, T)> {
        self.data.pop()
    }
}

/// A simple binary min-heap
///
/// This heap stores (priority, item) pairs and always returns the element
/// with the minimum priority first. Items never take part in comparisons.
#[derive(Debug, Clone)]
pub struct SimpleBinaryHeap<T, P: Ord> {
    entries: Entries<T, P>,
}

impl<T, P: Ord> Heap<T, P> for SimpleBinaryHeap<T, P> {
    fn new() -> Self {
        Self {
            entries: Entries { data: Vec::new() },
        }
    }

    fn is_empty(&self) -> bool {
        self.entries.data.is_empty()
    }

    fn len(&self) -> usize {
        self.entries.data.len()
    }

    fn push(&mut self, priority: P, item: T) {
        engine::push(&mut self.entries, (priority, item));
    }

    fn peek(&self) -> Option<(&P, &T)> {
        self.entries.data.first().map(|(p, t)| (p, t))
    }

    fn pop(&mut self) -> Option<(P, T)> {
        engine::pop(&mut self.entries).ok()
    }

    fn merge(&mut self, other: Self) {
        if other.entries.data.is_empty() {
            return;
        }
        self.entries.data.extend(other.entries.data);
        engine::init(&mut self.entries);
    }
}

impl<T, P: Ord> SimpleBinaryHeap<T, P> {
    /// Builds a heap from unordered pairs in linear time
    pub fn from_vec(data: Vec<(P, T)>) -> Self {
        trace!(len = data.len(), "building heap from vec");
        let mut entries = Entries { data };
        engine::init(&mut entries);
        Self { entries }
    }

    /// Returns the pairs in heap order (not sorted order)
    pub fn as_slice(&self) -> &[(P, T)] {
        &self.entries.data
    }

    /// Removes and returns the pair at index `i` of [`as_slice`](Self::as_slice)
    ///
    /// # Errors
    /// Returns [`HeapError::IndexOutOfRange`] if `i >= len()`.
    pub fn remove(&mut self, i: usize) -> Result<(P, T), HeapError> {
        engine::remove(&mut self.entries, i)
    }

    /// Replaces the priority at index `i`, returning the old one
    ///
    /// The new priority may be larger or smaller than the old one.
    ///
    /// # Errors
    /// Returns [`HeapError::IndexOutOfRange`] if `i >= len()`.
    pub fn update_priority(&mut self, i: usize, priority: P) -> Result<P, HeapError> {
        let len = self.entries.data.len();
        let Some(slot) = self.entries.data.get_mut(i) else {
            debug!(op = "update_priority", index = i, len, "index out of range");
            return Err(HeapError::IndexOutOfRange { index: i, len });
        };
        let old = std::mem::replace(&mut slot.0, priority);
        engine::fix(&mut self.entries, i)?;
        Ok(old)
    }

    /// Consumes the heap, returning its pairs in ascending priority order
    pub fn into_sorted_vec(mut self) -> Vec<(P, T)> {
        let mut out = Vec::with_capacity(self.entries.data.len());
        while let Ok(pair) = engine::pop(&mut self.entries) {
            out.push(pair);
        }
        out
    }

    /// Removes all elements
    pub fn clear(&mut self) {
        self.entries.data.clear();
    }
}

impl<T, P: Ord> Default for SimpleBinaryHeap<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Ord> Extend<(P, T)> for SimpleBinaryHeap<T, P> {
    fn extend<I: IntoIterator<Item = (P, T)>>(&mut self, iter: I) {
        for (priority, item) in iter {
            Heap::push(self, priority, item);
        }
    }
}

impl<T, P: Ord> FromIterator<(P, T)> for SimpleBinaryHeap<T, P> {
    fn from_iter<I: IntoIterator<Item = (P, T)>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let mut heap = SimpleBinaryHeap::new();

        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);

        heap.push(3, "three");
        heap.push(1, "one");
        heap.push(2, "two");

        assert!(!heap.is_empty());
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.peek(), Some((&1, &"one")));

        assert_eq!(heap.pop(), Some((1, "one")));
        assert_eq!(heap.pop(), Some((2, "two")));
        assert_eq!(heap.pop(), Some((3, "three")));
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn test_duplicate_priorities() {
        let mut heap = SimpleBinaryHeap::new();

        heap.push(1, "a");
        heap.push(1, "b");
        heap.push(1, "c");

        assert_eq!(heap.len(), 3);

        let mut items = Vec::new();
        while let Some((p, item)) = heap.pop() {
            assert_eq!(p, 1);
            items.push(item);
        }
        items.sort_unstable();
        assert_eq!(items, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_items_do_not_affect_order() {
        // Item types without Ord are fine
        struct Opaque(u8);
        let mut heap = SimpleBinaryHeap::new();
        heap.push(2, Opaque(2));
        heap.push(1, Opaque(1));
        assert_eq!(heap.pop().map(|(p, o)| (p, o.0)), Some((1, 1)));
    }

    #[test]
    fn test_merge() {
        let mut heap1 = SimpleBinaryHeap::new();
        let mut heap2 = SimpleBinaryHeap::new();

        heap1.push(3, "three");
        heap1.push(1, "one");

        heap2.push(4, "four");
        heap2.push(2, "two");

        heap1.merge(heap2);

        assert_eq!(heap1.len(), 4);
        assert_eq!(heap1.pop(), Some((1, "one")));
        assert_eq!(heap1.pop(), Some((2, "two")));
        assert_eq!(heap1.pop(), Some((3, "three")));
        assert_eq!(heap1.pop(), Some((4, "four")));
    }

    #[test]
    fn test_from_vec_and_sorted() {
        let heap = SimpleBinaryHeap::from_vec(vec![
            (5, 'e'),
            (2, 'b'),
            (8, 'h'),
            (1, 'a'),
            (9, 'i'),
            (3, 'c'),
        ]);
        assert!(engine::is_heap(&heap.entries));
        assert_eq!(
            heap.into_sorted_vec(),
            vec![(1, 'a'), (2, 'b'), (3, 'c'), (5, 'e'), (8, 'h'), (9, 'i')]
        );
    }

    #[test]
    fn test_remove_by_index() {
        let mut heap: SimpleBinaryHeap<char, i32> =
            [(4, 'd'), (1, 'a'), (3, 'c'), (2, 'b')].into_iter().collect();
        let pos = heap.as_slice().iter().position(|e| e.1 == 'c').unwrap();
        assert_eq!(heap.remove(pos), Ok((3, 'c')));
        assert_eq!(
            heap.remove(10),
            Err(HeapError::IndexOutOfRange { index: 10, len: 3 })
        );
        assert_eq!(heap.into_sorted_vec(), vec![(1, 'a'), (2, 'b'), (4, 'd')]);
    }

    #[test]
    fn test_update_priority() {
        let mut heap = SimpleBinaryHeap::new();
        heap.extend((0..10).map(|i| (i * 10, i)));

        let pos = heap.as_slice().iter().position(|e| e.1 == 7).unwrap();
        assert_eq!(heap.update_priority(pos, -1), Ok(70));
        assert_eq!(heap.peek(), Some((&-1, &7)));

        assert_eq!(heap.update_priority(0, 1000), Ok(-1));
        assert_eq!(heap.peek(), Some((&0, &0)));
        assert!(engine::is_heap(&heap.entries));

        assert_eq!(
            heap.update_priority(99, 0),
            Err(HeapError::IndexOutOfRange { index: 99, len: 10 })
        );
    }

    #[test]
    fn test_ascending_insertion() {
        let mut heap = SimpleBinaryHeap::new();

        for i in 0..100 {
            heap.push(i, i);
        }

        for i in 0..100 {
            assert_eq!(heap.pop(), Some((i, i)));
        }
    }

    #[test]
    fn test_descending_insertion() {
        let mut heap = SimpleBinaryHeap::new();

        for i in (0..100).rev() {
            heap.push(i, i);
        }

        for i in 0..100 {
            assert_eq!(heap.pop(), Some((i, i)));
        }
    }
}
