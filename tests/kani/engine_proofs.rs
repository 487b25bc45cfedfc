//! Bounded proofs for the heap engine
//!
//! Each harness builds a symbolic array of up to four elements, so every
//! possible ordering of small inputs is covered, not just sampled.

#[cfg(kani)]
use sift_heap::engine;
#[cfg(kani)]
use sift_heap::HeapError;

#[cfg(kani)]
const N: usize = 4;

/// Builds a symbolic vector of length 0..=N
#[cfg(kani)]
fn any_vec() -> Vec<u8> {
    let len: usize = kani::any();
    kani::assume(len <= N);
    let values: [u8; N] = kani::any();
    values[..len].to_vec()
}

/// Builds a symbolic vector that already satisfies the invariant
#[cfg(kani)]
fn any_heap() -> Vec<u8> {
    let mut v = any_vec();
    engine::init(&mut v);
    v
}

/// Proof: init establishes the invariant for every input
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_init_establishes_invariant() {
    let mut v = any_vec();
    let len = v.len();
    engine::init(&mut v);
    assert!(v.len() == len);
    assert!(engine::is_heap(&v));
}

/// Proof: push preserves the invariant and grows by one
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_push_preserves_invariant() {
    let mut v = any_heap();
    let len = v.len();
    let x: u8 = kani::any();
    engine::push(&mut v, x);
    assert!(v.len() == len + 1);
    assert!(engine::is_heap(&v));
}

/// Proof: pop returns the minimum, or fails only on an empty collection
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_pop_returns_minimum() {
    let mut v = any_heap();
    let min = v.iter().copied().min();
    match engine::pop(&mut v) {
        Ok(x) => {
            assert!(Some(x) == min);
            assert!(engine::is_heap(&v));
        }
        Err(e) => {
            assert!(e == HeapError::EmptyCollection);
            assert!(min.is_none());
        }
    }
}

/// Proof: remove returns the element at the index and preserves the invariant
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_remove_at_index() {
    let mut v = any_heap();
    let len = v.len();
    let i: usize = kani::any();
    kani::assume(i <= N);
    let expected = v.get(i).copied();
    match engine::remove(&mut v, i) {
        Ok(x) => {
            assert!(Some(x) == expected);
            assert!(v.len() == len - 1);
            assert!(engine::is_heap(&v));
        }
        Err(e) => {
            assert!(e == HeapError::IndexOutOfRange { index: i, len });
            assert!(v.len() == len);
        }
    }
}

/// Proof: fix repairs an arbitrary in-place change
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_fix_repairs_change() {
    let mut v = any_heap();
    kani::assume(!v.is_empty());
    let i: usize = kani::any();
    kani::assume(i < v.len());
    v[i] = kani::any();
    assert!(engine::fix(&mut v, i).is_ok());
    assert!(engine::is_heap(&v));
}
