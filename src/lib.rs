//! This crate is a singly linked list, [`ForwardList`](collections::linked::ForwardList), written
//! from the ground up along with the cursors used to traverse and modify it.
//!
//! # Purpose
//! Linked lists are the classic example of a data structure that is awkward in Rust: every node
//! is owned by the one before it, and every useful operation wants to hold a pointer into the
//! middle of that chain while changing it. Writing one properly means deciding where ownership
//! lives, where the unsafe code goes and what the borrow checker is asked to enforce.
//!
//! # Method
//! The list keeps a sentinel at its front which never holds a value. Insertion and removal both
//! happen *after* a position, and because the sentinel is a position like any other, the front of
//! the list needs no special case. Positions are expressed as [`Cursor`] and [`CursorMut`] types
//! that borrow the list, so a cursor can't outlive the node it points at.
//!
//! # Error Handling
//! Allocating methods come in pairs. The plain version (e.g. `push_front`) treats running out of
//! memory the way the standard library does, via
//! [`handle_alloc_error`](std::alloc::handle_alloc_error). The `try_*` version returns an
//! [`AllocError`](collections::linked::forward::AllocError) instead, and guarantees that nothing is
//! leaked or left half built when it does. Misusing a cursor (like inserting after the end) is a
//! bug in the calling code rather than an error, so it panics.
//!
//! # Dependencies
//! The crate only uses `std` and some derive macros, because they're helpful and remove the need
//! for some very repetitive programming.
//!
//! [`Cursor`]: collections::linked::Cursor
//! [`CursorMut`]: collections::linked::CursorMut

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
