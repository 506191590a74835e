use derive_more::{Display, Error};

/// An index was outside of the range accepted by a positional collection operation.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl IndexOutOfBounds {
    /// Checks that `index` is a valid insertion point for a collection of length `len`, which
    /// includes `len` itself (appending).
    pub(crate) const fn check_insert(index: usize, len: usize) -> Result<(), IndexOutOfBounds> {
        if index > len {
            return Err(IndexOutOfBounds { index, len });
        }
        Ok(())
    }
}

pub(crate) trait ResultExtension<T> {
    /// Unwraps an [`Ok`], otherwise panics with the [`Display`](std::fmt::Display) message of the
    /// error itself rather than its debug representation.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: std::error::Error> ResultExtension<T> for Result<T, E> {
    fn throw(self) -> T {
        self.unwrap_or_else(|error| panic!("{error}"))
    }
}
