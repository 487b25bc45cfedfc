//! Binary min-heap maintenance over any [`HeapInterface`] collection
//!
//! The functions here keep the heap invariant over a caller-owned collection:
//! for every index `i` and each child `j ∈ {2i+1, 2i+2}` with `j < len()`,
//! `less(j, i)` is false. The minimum element is therefore always at index 0.
//!
//! The engine has no state of its own. Each call borrows the collection
//! exclusively for its duration, reorders elements in place through
//! [`HeapInterface::swap`], and asks the collection to grow or shrink at the
//! end. Callers sharing a collection across threads must serialize calls.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | [`init`]   | O(n)       |
//! | [`push`]   | O(log n)   |
//! | [`pop`]    | O(log n)   |
//! | [`remove`] | O(log n)   |
//! | [`fix`]    | O(log n)   |
//!
//! # Example
//!
//! ```rust
//! use sift_heap::engine;
//!
//! let mut v = vec![5, 2, 8, 1, 9, 3];
//! engine::init(&mut v);
//! engine::push(&mut v, 0);
//!
//! assert_eq!(engine::pop(&mut v), Ok(0));
//! assert_eq!(engine::pop(&mut v), Ok(1));
//! assert!(engine::is_heap(&v));
//! ```

use tracing::{debug, trace};

use crate::traits::{HeapError, HeapInterface};

/// Establishes the heap invariant over an arbitrary collection
///
/// Sifts down every parent from the last one (`len / 2 - 1`) back to the root.
/// Each sift costs at most the node's height, so the whole pass is linear.
/// Calling this on a valid heap, an empty collection, or a single element
/// leaves the order unchanged.
pub fn init<T, H: HeapInterface<T> + ?Sized>(h: &mut H) {
    let n = h.len();
    trace!(len = n, "heapify");
    for i in (0..n / 2).rev() {
        down(h, i, n);
    }
    check_invariant(h);
}

/// Appends `x` and restores the invariant
pub fn push<T, H: HeapInterface<T> + ?Sized>(h: &mut H, x: T) {
    h.push(x);
    if let Some(last) = h.len().checked_sub(1) {
        up(h, last);
    }
    check_invariant(h);
}

/// Removes and returns the minimum element
///
/// # Errors
/// Returns [`HeapError::EmptyCollection`] if the collection has no elements.
pub fn pop<T, H: HeapInterface<T> + ?Sized>(h: &mut H) -> Result<T, HeapError> {
    let Some(n) = h.len().checked_sub(1) else {
        debug!("pop on empty collection");
        return Err(HeapError::EmptyCollection);
    };
    if n != 0 {
        h.swap(0, n);
        down(h, 0, n);
    }
    let x = take_last(h)?;
    check_invariant(h);
    Ok(x)
}

/// Removes and returns the element at index `i`
///
/// The last element is moved into the hole and sifted whichever way it needs
/// to go. After a successful sift down no ancestor can be violated, so at most
/// one direction ever does work.
///
/// # Errors
/// Returns [`HeapError::IndexOutOfRange`] if `i >= len()`. The collection is
/// untouched in that case.
pub fn remove<T, H: HeapInterface<T> + ?Sized>(h: &mut H, i: usize) -> Result<T, HeapError> {
    let len = checked_index(h, i, "remove")?;
    let n = len - 1;
    if i != n {
        h.swap(i, n);
        if !down(h, i, n) {
            up(h, i);
        }
    }
    let x = take_last(h)?;
    check_invariant(h);
    Ok(x)
}

/// Re-establishes the invariant after the element at `i` changed in place
///
/// Equivalent to, but cheaper than, removing the element and pushing the new
/// value.
///
/// # Errors
/// Returns [`HeapError::IndexOutOfRange`] if `i >= len()`.
pub fn fix<T, H: HeapInterface<T> + ?Sized>(h: &mut H, i: usize) -> Result<(), HeapError> {
    let len = checked_index(h, i, "fix")?;
    if !down(h, i, len) {
        up(h, i);
    }
    check_invariant(h);
    Ok(())
}

/// Returns true if the collection satisfies the heap invariant
///
/// O(n). Intended for tests and assertions, the engine never needs it.
pub fn is_heap<T, H: HeapInterface<T> + ?Sized>(h: &H) -> bool {
    first_violation(h).is_none()
}

/// Returns the first `(parent, child)` pair where the child sorts before its parent
pub fn first_violation<T, H: HeapInterface<T> + ?Sized>(h: &H) -> Option<(usize, usize)> {
    (1..h.len())
        .map(|j| ((j - 1) / 2, j))
        .find(|&(i, j)| h.less(j, i))
}

/// Validates `i` against the current length, returning that length
fn checked_index<T, H: HeapInterface<T> + ?Sized>(
    h: &H,
    i: usize,
    op: &'static str,
) -> Result<usize, HeapError> {
    let len = h.len();
    if i >= len {
        debug!(op, index = i, len, "index out of range");
        return Err(HeapError::IndexOutOfRange { index: i, len });
    }
    Ok(len)
}

/// Shrinks the collection by one, surfacing a contract breach as an error
fn take_last<T, H: HeapInterface<T> + ?Sized>(h: &mut H) -> Result<T, HeapError> {
    h.pop().ok_or_else(|| {
        debug!("collection returned nothing from a non-empty pop");
        HeapError::EmptyCollection
    })
}

/// Moves the element at `j` toward the root until its parent is not larger
fn up<T, H: HeapInterface<T> + ?Sized>(h: &mut H, mut j: usize) {
    while j > 0 {
        let i = (j - 1) / 2;
        if !h.less(j, i) {
            break;
        }
        h.swap(i, j);
        j = i;
    }
}

/// Moves the element at `i0` toward the leaves, considering only indices below `limit`
///
/// Both subtrees of `i0` must already be heaps. Returns true if the element moved.
fn down<T, H: HeapInterface<T> + ?Sized>(h: &mut H, i0: usize, limit: usize) -> bool {
    let mut i = i0;
    loop {
        // overflow means there is no child
        let left = match i.checked_mul(2).and_then(|x| x.checked_add(1)) {
            Some(left) if left < limit => left,
            _ => break,
        };
        let mut j = left;
        if let Some(right) = left.checked_add(1) {
            if right < limit && h.less(right, left) {
                j = right;
            }
        }
        if !h.less(j, i) {
            break;
        }
        h.swap(i, j);
        i = j;
    }
    i > i0
}

#[inline]
fn check_invariant<T, H: HeapInterface<T> + ?Sized>(h: &H) {
    #[cfg(feature = "debug-invariants")]
    debug_assert!(
        is_heap(h),
        "heap invariant violated at {:?}",
        first_violation(h)
    );
    #[cfg(not(feature = "debug-invariants"))]
    let _ = h;
}
