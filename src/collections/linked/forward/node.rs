use std::alloc::Layout;
use std::fmt::{self, Debug, Formatter};
use std::ptr::NonNull;

use crate::util::alloc;
use crate::util::error::AllocError;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// NOTE: Nodes are allocated through util::alloc rather than Box, so that running out of memory can
// be reported to the caller as an AllocError instead of aborting the process.

pub(crate) struct NodePtr<T>(NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub fn value<'a>(&self) -> &'a T {
        // SAFETY: A NodePtr only exists for a node that is currently owned by a list.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn value_mut<'a>(&mut self) -> &'a mut T {
        // SAFETY: A NodePtr only exists for a node that is currently owned by a list.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: A NodePtr only exists for a node that is currently owned by a list.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: A NodePtr only exists for a node that is currently owned by a list.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    /// Moves `node` onto the heap. If the allocation fails, `node` (and the value it holds) is
    /// dropped and the error is returned.
    pub fn try_from_node(node: Node<T>) -> Result<NodePtr<T>, AllocError> {
        let ptr = alloc::allocate(Node::<T>::LAYOUT)?.cast::<Node<T>>();
        // SAFETY: ptr was just allocated with the layout of Node<T> and holds nothing yet.
        unsafe { ptr.write(node) };
        Ok(NodePtr(ptr))
    }

    /// Moves the node back off the heap and frees its allocation. The pointer must already be
    /// unlinked from its list, because it dangles once this returns.
    pub fn take_node(self) -> Node<T> {
        // SAFETY: The node is initialized and, being unlinked, is read exactly once.
        let node = unsafe { self.0.read() };
        // SAFETY: The allocation was made by try_from_node with the same layout.
        unsafe { alloc::deallocate(self.0.cast(), Node::<T>::LAYOUT) };
        node
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodePtr<T> {}

impl<T> Debug for NodePtr<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodePtr").field(&self.0).finish()
    }
}

pub(crate) struct Node<T> {
    pub next: Link<T>,
    pub value: T,
}

impl<T> Node<T> {
    pub const LAYOUT: Layout = Layout::new::<Node<T>>();
}

/// The sentinel at the front of every list. It never holds a value, so that inserting or removing
/// after it looks the same as doing so after any other node.
pub(crate) struct Head<T> {
    pub next: Link<T>,
}
