use std::alloc::Layout;

use derive_more::{Display, Error};

/// The global allocator failed to provide memory for a new node.
///
/// Returned by the `try_*` family of methods, which leave the collection in a valid state (and
/// usually unchanged) when this occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Memory allocation of {} bytes failed!", layout.size())]
pub struct AllocError {
    layout: Layout,
}

impl AllocError {
    pub(crate) const fn new(layout: Layout) -> AllocError {
        AllocError { layout }
    }

    /// Returns the [`Layout`] of the allocation that failed.
    pub const fn layout(&self) -> Layout {
        self.layout
    }
}
