use std::fmt::{self, Debug, Formatter};
use std::ptr;

use derive_more::IsVariant;

use super::{ForwardList, Head, Link, Node, NodePtr};
use crate::util::error::AllocError;
use crate::util::result::AllocResultExtension;

#[derive(IsVariant)]
pub(crate) enum Position<T> {
    /// The sentinel, before the first element.
    BeforeBegin,
    Ptr(NodePtr<T>),
    /// No node at all, after the last element.
    End,
}

use Position::*;

impl<T> Position<T> {
    pub(crate) const fn from_link(link: Link<T>) -> Position<T> {
        match link {
            Some(ptr) => Ptr(ptr),
            None => End,
        }
    }

    pub(crate) fn following(self, head: &Head<T>) -> Position<T> {
        match self {
            BeforeBegin => Position::from_link(head.next),
            Ptr(ptr) => Position::from_link(*ptr.next()),
            End => End,
        }
    }
}

impl<T> Clone for Position<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<T> {}

/// A read-only position within a [`ForwardList`]. See [`ForwardList::before_begin`],
/// [`ForwardList::begin`] and [`ForwardList::end`] to create one.
///
/// A Cursor can point at the sentinel before the first element, at an element, or at the end of
/// the list (past the last element). Two Cursors are equal if they point at the same node, if both
/// are at the end, or if both are before the beginning of the same list.
pub struct Cursor<'a, T> {
    pub(crate) list: &'a ForwardList<T>,
    pub(crate) pos: Position<T>,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) const fn new(list: &'a ForwardList<T>, pos: Position<T>) -> Cursor<'a, T> {
        Cursor { list, pos }
    }

    /// Returns the list this Cursor points into.
    pub const fn list(&self) -> &'a ForwardList<T> {
        self.list
    }

    /// Returns a reference to the element under the Cursor, or [`None`] if it is before the
    /// beginning or at the end.
    pub fn read(&self) -> Option<&'a T> {
        match self.pos {
            Ptr(ptr) => Some(ptr.value()),
            BeforeBegin | End => None,
        }
    }

    /// Returns a reference to the element following the Cursor, if there is one.
    pub fn read_next(&self) -> Option<&'a T> {
        match self.pos.following(&self.list.head) {
            Ptr(ptr) => Some(ptr.value()),
            BeforeBegin | End => None,
        }
    }

    /// Moves the Cursor to the following position.
    ///
    /// # Panics
    /// Panics in debug builds if the Cursor is already at the end. Release builds leave it there.
    pub fn move_next(&mut self) -> &mut Self {
        debug_assert!(!self.pos.is_end(), "attempted to move a Cursor past the end of a ForwardList");
        self.pos = self.pos.following(&self.list.head);
        self
    }

    /// Returns true if the Cursor points at the sentinel before the first element.
    pub const fn is_before_begin(&self) -> bool {
        self.pos.is_before_begin()
    }

    /// Returns true if the Cursor has moved past the last element.
    pub const fn is_end(&self) -> bool {
        self.pos.is_end()
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.pos, other.pos) {
            // Each list has its own sentinel.
            (BeforeBegin, BeforeBegin) => ptr::eq(self.list, other.list),
            (Ptr(a), Ptr(b)) => a == b,
            (End, End) => true,
            _ => false,
        }
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T: Debug> Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        debug_position(f, "Cursor", self.pos)
    }
}

/// A position within a [`ForwardList`] that allows for mutation. See
/// [`ForwardList::before_begin_mut`] and [`ForwardList::begin_mut`] to create one.
///
/// All structural changes happen after the position of the Cursor. Starting from the sentinel,
/// this covers the front of the list without any special case:
/// ```
/// # use forward_list::collections::linked::ForwardList;
/// let mut list = ForwardList::from([3]);
/// list.before_begin_mut().insert_after(1).insert_after(2);
/// assert_eq!(list, ForwardList::from([1, 2, 3]));
/// ```
pub struct CursorMut<'a, T> {
    pub(crate) list: &'a mut ForwardList<T>,
    pub(crate) pos: Position<T>,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) const fn new(list: &'a mut ForwardList<T>, pos: Position<T>) -> CursorMut<'a, T> {
        CursorMut { list, pos }
    }

    /// Returns a read-only [`Cursor`] at the same position.
    pub const fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&*self.list, self.pos)
    }

    /// Returns a reference to the element under the Cursor, or [`None`] if it is before the
    /// beginning or at the end.
    pub fn read(&self) -> Option<&T> {
        match self.pos {
            Ptr(ptr) => Some(ptr.value()),
            BeforeBegin | End => None,
        }
    }

    /// Returns a mutable reference to the element under the Cursor, or [`None`] if it is before
    /// the beginning or at the end.
    pub fn read_mut(&mut self) -> Option<&mut T> {
        match self.pos {
            Ptr(mut ptr) => Some(ptr.value_mut()),
            BeforeBegin | End => None,
        }
    }

    /// Returns a reference to the element following the Cursor, if there is one.
    pub fn read_next(&self) -> Option<&T> {
        match self.pos.following(&self.list.head) {
            Ptr(ptr) => Some(ptr.value()),
            BeforeBegin | End => None,
        }
    }

    /// Moves the Cursor to the following position.
    ///
    /// # Panics
    /// Panics in debug builds if the Cursor is already at the end. Release builds leave it there.
    pub fn move_next(&mut self) -> &mut Self {
        debug_assert!(!self.pos.is_end(), "attempted to move a Cursor past the end of a ForwardList");
        self.pos = self.pos.following(&self.list.head);
        self
    }

    /// Returns true if the Cursor points at the sentinel before the first element.
    pub const fn is_before_begin(&self) -> bool {
        self.pos.is_before_begin()
    }

    /// Returns true if the Cursor has moved past the last element.
    pub const fn is_end(&self) -> bool {
        self.pos.is_end()
    }

    /// Inserts `value` immediately after the Cursor and moves the Cursor onto the new element.
    ///
    /// # Panics
    /// Panics if the Cursor is at the end, since nothing can follow the end.
    pub fn insert_after(&mut self, value: T) -> &mut Self {
        self.try_insert_after(value).or_handle_alloc()
    }

    /// Inserts `value` immediately after the Cursor and moves the Cursor onto the new element,
    /// returning an [`Err`] if the node can't be allocated. On failure, `value` is dropped and
    /// neither the list nor the Cursor change.
    ///
    /// # Panics
    /// Panics if the Cursor is at the end, since nothing can follow the end.
    pub fn try_insert_after(&mut self, value: T) -> Result<&mut Self, AllocError> {
        let link = self.link_after();
        let node = NodePtr::try_from_node(Node {
            next: *link,
            value,
        })?;
        *link = Some(node);

        self.list.len += 1;
        self.pos = Ptr(node);
        Ok(self)
    }

    /// Unlinks the element following the Cursor and returns it, or returns [`None`] without
    /// changing anything if no element follows. The Cursor stays where it is, so the element that
    /// came after the removed one is now next.
    pub fn remove_after(&mut self) -> Option<T> {
        if self.pos.is_end() {
            return None;
        }

        let link = self.link_after();
        let node = link.take()?.take_node();
        *link = node.next;

        self.list.len -= 1;
        Some(node.value)
    }

    /// Drops the element following the Cursor and returns a [`Cursor`] to the element that now
    /// follows this one. If nothing followed the Cursor, nothing changes and the returned Cursor is
    /// at the end.
    pub fn erase_after(&mut self) -> Cursor<'_, T> {
        drop(self.remove_after());
        Cursor::new(&*self.list, self.pos.following(&self.list.head))
    }

    /// The link that holds whatever follows the Cursor: the sentinel's for
    /// [`BeforeBegin`], otherwise the current node's.
    fn link_after(&mut self) -> &mut Link<T> {
        match self.pos {
            BeforeBegin => &mut self.list.head.next,
            Ptr(ptr) => ptr.next_mut(),
            End => panic!("there is no position after the end of a ForwardList"),
        }
    }
}

impl<T: Debug> Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        debug_position(f, "CursorMut", self.pos)
    }
}

fn debug_position<T: Debug>(f: &mut Formatter<'_>, name: &str, pos: Position<T>) -> fmt::Result {
    match pos {
        BeforeBegin => write!(f, "{name}(BeforeBegin)"),
        Ptr(ptr) => f.debug_tuple(name).field(ptr.value()).finish(),
        End => write!(f, "{name}(End)"),
    }
}
