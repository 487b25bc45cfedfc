//! Common traits for heap data structures
//!
//! This module provides the two seams the crate is built around:
//!
//! - [`HeapInterface`]: the capability contract a caller-owned collection
//!   implements so the [`engine`](crate::engine) can maintain heap order over it
//! - [`Heap`]: an owned priority-queue API, compatible with Rust's standard
//!   heap API patterns, implemented by the queues in this crate
//!
//! The engine never stores elements itself. It only reorders them through
//! [`HeapInterface::swap`] and asks the collection to grow or shrink at the end.

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// Pop was called on a collection with no elements
    #[error("cannot pop from an empty collection")]
    EmptyCollection,
    /// The index does not name an element of the collection
    #[error("index {index} is out of range for a collection of length {len}")]
    IndexOutOfRange {
        /// The offending index
        index: usize,
        /// Length of the collection at the time of the call
        len: usize,
    },
    /// The handle is no longer valid (element was removed)
    #[error("handle is no longer valid (element was removed)")]
    InvalidHandle,
    /// The new priority is not less than the current priority
    #[error("new priority is not less than current priority")]
    PriorityNotDecreased,
}

/// Capability contract for collections the heap engine can operate on
///
/// Implementors expose a zero-indexed sequence of `len()` elements. The
/// engine reads and writes the sequence only through these methods, so any
/// caller-owned structure can be adapted: a `Vec`, a `Vec` of records ordered
/// by one field, or a structure that tracks where each element currently lives.
///
/// # Contract
///
/// - `less` must be a strict weak ordering, stable across calls as long as the
///   collection is not mutated.
/// - `swap` must exchange the two elements and preserve both.
/// - `push` appends at index `len()`; `pop` removes and returns the element at
///   index `len() - 1`.
///
/// Violations are not detected. The heap invariant simply stops holding.
/// Mutating the collection from inside `less` or `swap` while an engine
/// operation is in progress is undefined at the contract level.
///
/// # Example
///
/// ```rust
/// use sift_heap::{engine, HeapInterface};
///
/// /// Orders tasks by deadline, latest first
/// struct Latest(Vec<(u32, &'static str)>);
///
/// impl HeapInterface<(u32, &'static str)> for Latest {
///     fn len(&self) -> usize { self.0.len() }
///     fn less(&self, i: usize, j: usize) -> bool { self.0[i].0 > self.0[j].0 }
///     fn swap(&mut self, i: usize, j: usize) { self.0.as_mut_slice().swap(i, j) }
///     fn push(&mut self, x: (u32, &'static str)) { self.0.push(x) }
///     fn pop(&mut self) -> Option<(u32, &'static str)> { self.0.pop() }
/// }
///
/// let mut tasks = Latest(vec![(3, "c"), (9, "z"), (5, "e")]);
/// engine::init(&mut tasks);
/// assert_eq!(engine::pop(&mut tasks), Ok((9, "z")));
/// ```
pub trait HeapInterface<T> {
    /// Returns the current number of elements
    fn len(&self) -> usize;

    /// Returns true if the collection has no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the element at `i` must sort before the element at `j`
    fn less(&self, i: usize, j: usize) -> bool;

    /// Exchanges the elements at `i` and `j`
    fn swap(&mut self, i: usize, j: usize);

    /// Appends `x` at index `len()`
    fn push(&mut self, x: T);

    /// Removes and returns the element at index `len() - 1`
    fn pop(&mut self) -> Option<T>;
}

/// Owned priority-queue API
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element (returns `()`)
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// Unlike `BinaryHeap` which stores values directly (using `Ord`), these heaps
/// store (priority, item) pairs to separate the ordering key from the data.
///
/// # Example
///
/// ```rust
/// use sift_heap::Heap;
/// use sift_heap::simple_binary::SimpleBinaryHeap;
///
/// let mut heap = SimpleBinaryHeap::new();
/// heap.push(3, "three");
/// heap.push(1, "one");
/// heap.push(2, "two");
///
/// assert_eq!(heap.peek(), Some((&1, &"one")));
/// assert_eq!(heap.pop(), Some((1, "one")));
/// ```
pub trait Heap<T, P: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element with the given priority
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, priority: P, item: T);

    /// Returns the minimum priority and associated item without removing it
    ///
    /// Note that `BinaryHeap` is a max-heap, while these heaps are min-heaps.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<(&P, &T)>;

    /// Removes and returns the minimum priority and associated item
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<(P, T)>;

    /// Merges another heap into this one, consuming the other heap
    ///
    /// # Time Complexity
    /// O(n + m) for the array-backed heaps in this crate.
    fn merge(&mut self, other: Self);
}

/// A handle to an element in the heap, used for decrease_key operations
///
/// This is an opaque type that identifies a specific element in the heap
/// regardless of where the element currently sits in the backing array.
pub trait Handle: Clone + PartialEq + Eq {}

/// Extended heap trait with `decrease_key` support
///
/// This trait extends [`Heap`] with operations that require tracking element handles:
/// - `push_with_handle` returns a handle that can be used with `decrease_key`
/// - `decrease_key` efficiently updates an element's priority
///
/// # Example
///
/// ```rust
/// use sift_heap::{DecreaseKeyHeap, Heap};
/// use sift_heap::keyed::KeyedHeap;
///
/// let mut heap = KeyedHeap::new();
/// let handle = heap.push_with_handle(10, "item");
/// heap.decrease_key(&handle, 5).unwrap();
/// assert_eq!(heap.peek(), Some((&5, &"item")));
/// ```
pub trait DecreaseKeyHeap<T, P: Ord>: Heap<T, P> {
    /// The handle type for this heap, used to reference elements for decrease_key
    type Handle: Handle;

    /// Inserts an element with the given priority, returning a handle
    ///
    /// # Time Complexity
    /// O(log n)
    fn push_with_handle(&mut self, priority: P, item: T) -> Self::Handle;

    /// Decreases the priority of an element identified by the handle
    ///
    /// # Errors
    /// Returns `HeapError::InvalidHandle` if the element was already removed, and
    /// `HeapError::PriorityNotDecreased` if the new priority is not less than
    /// the current priority.
    ///
    /// # Time Complexity
    /// O(log n)
    fn decrease_key(&mut self, handle: &Self::Handle, new_priority: P) -> Result<(), HeapError>;
}
