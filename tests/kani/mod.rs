//! Kani proof harnesses
//!
//! - `engine_proofs.rs`: bounded proofs of the engine operations over small `Vec`s

#[cfg(kani)]
#[path = "engine_proofs.rs"]
mod engine_proofs;
