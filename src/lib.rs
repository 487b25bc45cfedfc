//! Binary Min-Heap Engine for Rust
//!
//! This crate maintains binary min-heap order over collections it does not own.
//! A caller implements the [`HeapInterface`] capability contract (size, compare,
//! swap, append, remove-last) for its own storage, and the [`engine`] functions
//! keep the heap invariant through every operation.
//!
//! # Features
//!
//! - **Engine**: `init` in O(n); `push`, `pop`, `remove` and `fix` in O(log n)
//! - **Adapters**: `Vec<T: Ord>` works out of the box; [`adapters::ByKey`] orders by a key function
//! - **Simple Binary Heap**: an owned (priority, item) queue built on the engine
//! - **Keyed Heap**: handle-based priority updates and removal (feature `keyed`, on by default)
//!
//! # Cargo features
//!
//! - `keyed` (default): enables [`keyed::KeyedHeap`] and its `slotmap` dependency
//! - `debug-invariants`: re-verifies the heap invariant after every engine call in debug builds
//!
//! # Example
//!
//! ```rust
//! use sift_heap::{engine, HeapError};
//!
//! let mut v = vec![5, 2, 8, 1, 9, 3];
//! engine::init(&mut v);
//!
//! assert_eq!(engine::pop(&mut v), Ok(1));
//! assert_eq!(engine::remove(&mut v, 99), Err(HeapError::IndexOutOfRange { index: 99, len: 5 }));
//!
//! v[0] = 10;
//! engine::fix(&mut v, 0).unwrap();
//! assert_eq!(engine::pop(&mut v), Ok(3));
//! ```

pub mod adapters;
pub mod engine;
#[cfg(feature = "keyed")]
pub mod keyed;
pub mod simple_binary;
pub mod traits;

// Re-export the main traits for convenience
pub use traits::{DecreaseKeyHeap, Handle, Heap, HeapError, HeapInterface};
