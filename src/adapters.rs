//! Ready-made [`HeapInterface`] implementations
//!
//! - `Vec<T: Ord>` orders elements by their natural order. Wrap them in
//!   [`std::cmp::Reverse`] for a max-heap.
//! - [`ByKey`] orders the elements of a `Vec` by a caller-supplied key function,
//!   for records that carry their priority in one field.
//!
//! # Example
//!
//! ```rust
//! use sift_heap::adapters::ByKey;
//! use sift_heap::engine;
//!
//! let jobs = vec![("index", 30), ("compact", 10), ("flush", 20)];
//! let mut queue = ByKey::from_vec(jobs, |job: &(&str, u32)| job.1);
//! engine::init(&mut queue);
//!
//! assert_eq!(engine::pop(&mut queue), Ok(("compact", 10)));
//!
//! // Bump a job in place, then repair its position
//! let slot = queue.as_slice().iter().position(|j| j.0 == "index").unwrap();
//! queue.as_mut_slice()[slot].1 = 5;
//! engine::fix(&mut queue, slot).unwrap();
//! assert_eq!(engine::pop(&mut queue), Ok(("index", 5)));
//! ```

use std::fmt;

use crate::traits::HeapInterface;

impl<T: Ord> HeapInterface<T> for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self[i] < self[j]
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j)
    }

    fn push(&mut self, x: T) {
        Vec::push(self, x)
    }

    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }
}

/// A `Vec` ordered by a key extracted from each element
///
/// Construction does not reorder anything. Run
/// [`engine::init`](crate::engine::init) before using the other engine
/// operations on a collection that is not already a heap.
pub struct ByKey<T, K, F>
where
    F: Fn(&T) -> K,
{
    data: Vec<T>,
    key: F,
}

impl<T, K: Ord, F: Fn(&T) -> K> ByKey<T, K, F> {
    /// Creates an empty collection ordered by `key`
    pub fn new(key: F) -> Self {
        Self {
            data: Vec::new(),
            key,
        }
    }

    /// Wraps an existing vector without reordering it
    pub fn from_vec(data: Vec<T>, key: F) -> Self {
        Self { data, key }
    }

    /// Returns the element at `i`, if any
    pub fn get(&self, i: usize) -> Option<&T> {
        self.data.get(i)
    }

    /// Returns the elements in their current (heap) order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the elements for in-place mutation
    ///
    /// Changing the key of an element breaks the invariant at that index until
    /// [`engine::fix`](crate::engine::fix) is called for it.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Unwraps the underlying vector
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T, K: Ord, F: Fn(&T) -> K> HeapInterface<T> for ByKey<T, K, F> {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        (self.key)(&self.data[i]) < (self.key)(&self.data[j])
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.data.as_mut_slice().swap(i, j)
    }

    fn push(&mut self, x: T) {
        self.data.push(x)
    }

    fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }
}

impl<T: fmt::Debug, K, F: Fn(&T) -> K> fmt::Debug for ByKey<T, K, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByKey").field("data", &self.data).finish()
    }
}
