//! Linked collection types. Primarily revolves around [`ForwardList`] and its accompanying
//! [`Cursor`] and [`CursorMut`] types.

pub mod forward;

#[doc(inline)]
pub use forward::{Cursor, CursorMut, ForwardList};
