use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::{mem, ptr};

use super::cursor::Position;
use super::{Cursor, CursorMut, Head, Iter, IterMut, Link};
#[doc(inline)]
pub use crate::util::error::AllocError;
use crate::util::result::AllocResultExtension;

/// A list with links in a single direction. See also: [`CursorMut`] for insertion and removal
/// anywhere within the list.
///
/// The list starts with a sentinel that holds no value. Every change to the structure of the list
/// is made after some position, and [`ForwardList::before_begin_mut`] makes the front of the list
/// one of those positions.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ForwardList.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `push_front` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `insert_after`* | `O(1)` |
/// | `erase_after`* | `O(1)` |
/// | `swap` | `O(1)` |
/// | `clear` | `O(n)` |
/// | `clone` | `O(n)` |
/// | `extend` | `O(n)` |
/// | `reverse` | `O(n)` |
/// | `contains` | `O(n)` |
///
/// \* Methods of [`CursorMut`], once it is in position.
///
/// # Allocation Failure
/// Each allocating method has a `try_*` counterpart which returns an [`AllocError`] rather than
/// calling [`handle_alloc_error`](std::alloc::handle_alloc_error). Copying methods build a
/// complete copy before touching the target, so a failure never leaves a partial copy behind.
pub struct ForwardList<T> {
    pub(crate) head: Head<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> ForwardList<T> {
    /// Creates a new ForwardList with no elements.
    pub const fn new() -> ForwardList<T> {
        ForwardList {
            head: Head { next: None },
            len: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a ForwardList from the elements of `iter`, in the same order, returning an [`Err`]
    /// if a node can't be allocated. Any elements already moved into the new list are dropped
    /// along with it before the error is returned.
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<ForwardList<T>, AllocError> {
        let mut list = ForwardList::new();
        list.try_extend(iter)?;
        Ok(list)
    }

    /// Returns the length of the ForwardList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the ForwardList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head.next.map(|node| node.value())
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.next.map(|mut node| node.value_mut())
    }

    /// Add the provided element to the front of the ForwardList.
    ///
    /// # Examples
    /// ```
    /// # use forward_list::collections::linked::ForwardList;
    /// let mut list = ForwardList::from([2, 3]);
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn push_front(&mut self, value: T) {
        self.try_push_front(value).or_handle_alloc()
    }

    /// Add the provided element to the front of the ForwardList, returning an [`Err`] if the node
    /// can't be allocated. The list is unchanged on failure.
    pub fn try_push_front(&mut self, value: T) -> Result<(), AllocError> {
        self.before_begin_mut().try_insert_after(value)?;
        Ok(())
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.before_begin_mut().remove_after()
    }

    /// Drops every element in the ForwardList, leaving it empty.
    pub fn clear(&mut self) {
        // Reset first, so that the list is already empty if dropping an element panics.
        self.len = 0;
        let mut curr = self.head.next.take();

        while let Some(ptr) = curr {
            let node = ptr.take_node();
            curr = node.next;
        }
    }

    /// Exchanges the contents of two lists without allocating or moving any elements.
    pub const fn swap(&mut self, other: &mut ForwardList<T>) {
        mem::swap(&mut self.head.next, &mut other.head.next);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Reverses the order of the elements in place, by relinking the existing nodes.
    pub fn reverse(&mut self) {
        let mut reversed: Link<T> = None;
        let mut curr = self.head.next.take();

        while let Some(ptr) = curr {
            curr = mem::replace(ptr.next_mut(), reversed);
            reversed = Some(ptr);
        }

        self.head.next = reversed;
    }

    /// Appends the elements of `iter` to the back of the list, returning an [`Err`] if a node
    /// can't be allocated. Elements appended before the failure remain in the list.
    pub fn try_extend<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), AllocError> {
        let mut cursor = self.last_mut();
        for value in iter {
            cursor.try_insert_after(value)?;
        }
        Ok(())
    }

    /// Replaces the contents of the list with the elements of `iter`. The replacement is built in
    /// full before being swapped in, so the list is unchanged if an allocation fails.
    pub fn try_assign<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), AllocError> {
        let mut replacement = ForwardList::try_from_iter(iter)?;
        self.swap(&mut replacement);
        Ok(())
    }

    /// Returns a [`Cursor`] at the sentinel before the first element.
    pub const fn before_begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, Position::BeforeBegin)
    }

    /// Returns a [`Cursor`] at the first element, or at the end if the list is empty.
    pub const fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, Position::from_link(self.head.next))
    }

    /// Returns a [`Cursor`] at the end of the list, past the last element.
    pub const fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self, Position::End)
    }

    /// Returns a [`CursorMut`] at the sentinel before the first element, from which elements can
    /// be inserted or removed at the front of the list.
    pub const fn before_begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, Position::BeforeBegin)
    }

    /// Returns a [`CursorMut`] at the first element, or at the end if the list is empty.
    pub const fn begin_mut(&mut self) -> CursorMut<'_, T> {
        let pos = Position::from_link(self.head.next);
        CursorMut::new(self, pos)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    /// Returns a [`CursorMut`] at the last element, or at the sentinel if the list is empty. In
    /// both cases, inserting after it appends to the list.
    pub(crate) fn last_mut(&mut self) -> CursorMut<'_, T> {
        let mut pos = Position::BeforeBegin;
        let mut next = self.head.next;

        while let Some(ptr) = next {
            pos = Position::Ptr(ptr);
            next = *ptr.next();
        }

        CursorMut::new(self, pos)
    }

    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        let mut count = 0;
        let mut curr = self.head.next;

        while let Some(ptr) = curr {
            count += 1;
            assert!(count <= self.len, "list holds more nodes than its length");
            curr = *ptr.next();
        }

        assert_eq!(count, self.len, "list holds fewer nodes than its length");
    }
}

impl<T: PartialEq> ForwardList<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|i| i == item)
    }
}

impl<T: Clone> ForwardList<T> {
    /// Creates a deep copy of the list, returning an [`Err`] if a node can't be allocated.
    pub fn try_clone(&self) -> Result<ForwardList<T>, AllocError> {
        ForwardList::try_from_iter(self.iter().cloned())
    }

    /// Replaces the contents of the list with a deep copy of `source`. The copy is made in full
    /// before being swapped in, so the list is unchanged if an allocation fails.
    pub fn try_clone_from(&mut self, source: &ForwardList<T>) -> Result<(), AllocError> {
        self.try_assign(source.iter().cloned())
    }
}

impl<T: Clone> Clone for ForwardList<T> {
    fn clone(&self) -> Self {
        self.try_clone().or_handle_alloc()
    }

    fn clone_from(&mut self, source: &Self) {
        self.try_clone_from(source).or_handle_alloc()
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ForwardList::try_from_iter(iter).or_handle_alloc()
    }
}

impl<T, const N: usize> From<[T; N]> for ForwardList<T> {
    fn from(value: [T; N]) -> Self {
        ForwardList::from_iter(value)
    }
}

impl<T> Extend<T> for ForwardList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.try_extend(iter).or_handle_alloc()
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

// SAFETY: The list owns its elements, so sending it sends them.
unsafe impl<T: Send> Send for ForwardList<T> {}
// SAFETY: Shared access to the list only provides shared access to its elements.
unsafe impl<T: Sync> Sync for ForwardList<T> {}

impl<T: PartialEq> PartialEq for ForwardList<T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other) || (self.len == other.len && self.iter().eq(other.iter()))
    }
}

impl<T: Eq> Eq for ForwardList<T> {}

impl<T: PartialOrd> PartialOrd for ForwardList<T> {
    /// Compares the lists lexicographically. A pair of elements that can't be ordered (such as two
    /// `NaN`s) counts as equivalent and the comparison continues with the following pair, so this
    /// never returns [`None`]. As a result, `Some(Equal)` doesn't imply `==` for such elements.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let mut lhs = self.iter();
        let mut rhs = other.iter();

        loop {
            match (lhs.next(), rhs.next()) {
                (Some(a), Some(b)) => {
                    if a < b {
                        return Some(Ordering::Less);
                    } else if b < a {
                        return Some(Ordering::Greater);
                    }
                },
                (None, Some(_)) => return Some(Ordering::Less),
                (Some(_), None) => return Some(Ordering::Greater),
                (None, None) => return Some(Ordering::Equal),
            }
        }
    }
}

impl<T: Ord> Ord for ForwardList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for ForwardList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Prefixing the length terminates the variable length sequence.
        self.len.hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for ForwardList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForwardList")
            .field("contents", &self.iter())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for ForwardList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ") -> (")?;
            }
            write!(f, "{value:?}")?;
        }
        write!(f, ")")
    }
}
