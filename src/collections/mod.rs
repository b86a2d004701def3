//! General-purpose collection types.
//!
//! # Purpose
//! These types exist to explore the data structures themselves, along with the concepts around
//! them: pointers, allocations, iterators and ownership.

#[cfg(feature = "linked")]
pub mod linked;
