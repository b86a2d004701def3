use std::alloc;

use super::error::AllocError;

pub(crate) trait AllocResultExtension<T> {
    /// A method similar to [`Result::unwrap`], except that it applies only to allocation results
    /// and diverts to [`alloc::handle_alloc_error`] on an [`Err`], as recommended for allocation
    /// failures, rather than panicking.
    fn or_handle_alloc(self) -> T;
}

impl<T> AllocResultExtension<T> for Result<T, AllocError> {
    fn or_handle_alloc(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => alloc::handle_alloc_error(error.layout()),
        }
    }
}
