//! Container-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during container operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SlabError {
    /// The underlying allocator could not satisfy a buffer request.
    AllocationFailed {
        /// Number of bytes requested.
        requested: usize,
    },
    /// Removal attempted on a container with no live elements.
    Empty,
    /// Access or removal by index at or past the live length.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The live length at the time of the call.
        length: usize,
    },
    /// A byte argument or peer container has a different element width.
    ElementSizeMismatch {
        /// This container's element width in bytes.
        expected: usize,
        /// The width that was supplied.
        actual: usize,
    },
    /// Construction input does not describe a whole number of elements.
    InvalidInput {
        /// Length of the supplied byte slice.
        byte_len: usize,
        /// Element width the slice was measured against.
        element_size: usize,
    },
    /// Construction attempted with a zero element width.
    ZeroElementSize,
}

impl fmt::Display for SlabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested } => {
                write!(f, "allocation failed: requested {requested} bytes")
            }
            Self::Empty => write!(f, "cannot pop an empty container"),
            Self::IndexOutOfRange { index, length } => {
                write!(f, "index {index} out of range for length {length}")
            }
            Self::ElementSizeMismatch { expected, actual } => {
                write!(
                    f,
                    "element size mismatch: expected {expected} bytes, got {actual}"
                )
            }
            Self::InvalidInput {
                byte_len,
                element_size,
            } => {
                write!(
                    f,
                    "invalid input: {byte_len} bytes is not a whole number of {element_size}-byte elements"
                )
            }
            Self::ZeroElementSize => write!(f, "element size must be at least 1 byte"),
        }
    }
}

impl Error for SlabError {}
