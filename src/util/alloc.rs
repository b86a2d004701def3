use std::alloc::{self, Layout};
use std::ptr::NonNull;

use super::error::AllocError;

/// Allocates a block of memory for the provided `layout` from the global allocator, returning an
/// [`AllocError`] rather than aborting if the allocator comes back empty handed.
///
/// `layout` must have a non-zero size. Every caller in this crate allocates nodes, which always
/// contain at least a link.
pub(crate) fn allocate(layout: Layout) -> Result<NonNull<u8>, AllocError> {
    debug_assert!(layout.size() != 0, "zero-sized allocations aren't supported");
    faults::check(layout)?;

    // SAFETY: layout has a non-zero size.
    let ptr = NonNull::new(unsafe { alloc::alloc(layout) }).ok_or(AllocError::new(layout))?;
    faults::record_alloc();
    Ok(ptr)
}

/// Returns a block of memory obtained from [`allocate`] to the global allocator.
///
/// # Safety
/// `ptr` must have been returned by [`allocate`] with the same `layout`, and must not be used
/// again after this call.
pub(crate) unsafe fn deallocate(ptr: NonNull<u8>, layout: Layout) {
    // SAFETY: The caller guarantees that ptr is a live allocation made with layout.
    unsafe { alloc::dealloc(ptr.as_ptr(), layout) };
    faults::record_dealloc();
}

#[cfg(not(test))]
mod faults {
    use std::alloc::Layout;

    use crate::util::error::AllocError;

    #[inline(always)]
    pub fn check(_layout: Layout) -> Result<(), AllocError> {
        Ok(())
    }

    #[inline(always)]
    pub fn record_alloc() {}

    #[inline(always)]
    pub fn record_dealloc() {}
}

#[cfg(test)]
pub(crate) use faults::{fail_after, live_allocations};

#[cfg(test)]
mod faults {
    use std::alloc::Layout;
    use std::cell::Cell;

    use crate::util::error::AllocError;

    // Both are thread-local so that tests running in parallel can't interfere with each other.
    thread_local! {
        static BUDGET: Cell<Option<usize>> = const { Cell::new(None) };
        static LIVE: Cell<usize> = const { Cell::new(0) };
    }

    /// A guard that makes every allocation on this thread fail once its budget is spent. The
    /// budget is removed when the guard is dropped.
    #[derive(Debug)]
    pub struct FailAfter {
        previous: Option<usize>,
    }

    /// Allows `successes` more allocations on this thread, then fails every following one.
    pub fn fail_after(successes: usize) -> FailAfter {
        FailAfter {
            previous: BUDGET.replace(Some(successes)),
        }
    }

    impl Drop for FailAfter {
        fn drop(&mut self) {
            BUDGET.set(self.previous);
        }
    }

    /// The number of blocks allocated on this thread that haven't been deallocated yet.
    pub fn live_allocations() -> usize {
        LIVE.get()
    }

    pub fn check(layout: Layout) -> Result<(), AllocError> {
        match BUDGET.get() {
            None => Ok(()),
            Some(0) => Err(AllocError::new(layout)),
            Some(remaining) => {
                BUDGET.set(Some(remaining - 1));
                Ok(())
            },
        }
    }

    pub fn record_alloc() {
        LIVE.set(LIVE.get() + 1);
    }

    pub fn record_dealloc() {
        LIVE.set(LIVE.get() - 1);
    }
}

#[cfg(test)]
pub(crate) use helpers::*;
