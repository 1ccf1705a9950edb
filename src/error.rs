use std::fmt;

/// The error type returned by fallible [`Sequence`](crate::Sequence) operations.
///
/// A failed operation never mutates the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// The index, after negative-index normalization, does not address an element
    /// (or a valid insertion point, for inserts).
    OutOfRange { index: isize, len: usize },
    /// The value looked up by `remove` or `index_of` is not in the container.
    NotFound,
    /// The index argument is of an unsupported kind, e.g. a range.
    InvalidArgument { reason: &'static str },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Error::NotFound => write!(f, "value not found"),
            Error::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
        }
    }
}

impl std::error::Error for Error {}
