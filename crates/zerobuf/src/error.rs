//! Allocation error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur when requesting a zero-initialized buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// `count * size` overflows `usize`, or the total exceeds the
    /// allocator's `isize::MAX` layout limit.
    SizeOverflow {
        /// Number of elements requested.
        count: usize,
        /// Size of each element in bytes.
        size: usize,
    },
    /// The underlying allocator could not satisfy the request.
    OutOfMemory {
        /// Total number of bytes requested.
        bytes: usize,
    },
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeOverflow { count, size } => {
                write!(
                    f,
                    "allocation size overflow: {count} elements of {size} bytes"
                )
            }
            Self::OutOfMemory { bytes } => {
                write!(f, "out of memory: requested {bytes} bytes")
            }
        }
    }
}

impl Error for AllocError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_request_parameters() {
        let err = AllocError::SizeOverflow {
            count: usize::MAX,
            size: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("overflow"));
        assert!(msg.contains("2 bytes"));
    }

    #[test]
    fn display_out_of_memory_includes_bytes() {
        let err = AllocError::OutOfMemory { bytes: 1024 };
        assert_eq!(err.to_string(), "out of memory: requested 1024 bytes");
    }
}
