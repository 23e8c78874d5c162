//! Failure conditions reported by the arena.

use thiserror::Error;

/// Reasons an allocate or release request was declined.
///
/// Every variant is returned before any mutation, so the free list is left
/// exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AllocError {
    /// Zero-byte request.
    #[error("zero-sized request")]
    InvalidSize,

    /// No single free block can hold the rounded request.
    #[error("out of memory: requested {requested} bytes, {free} bytes free")]
    OutOfMemory {
        /// Granularity-rounded request size, saturated to `usize::MAX` when
        /// rounding overflows.
        requested: usize,
        /// Free bytes in the arena at the time of the request.
        free: usize,
    },

    /// Released address does not lie on a block boundary inside the arena.
    #[error("invalid pointer {address:#x}: not a block inside the arena")]
    InvalidPointer {
        /// The rejected address.
        address: usize,
    },

    /// Released range overlaps free memory or runs off the end of the arena.
    ///
    /// Usually a double free or a size that doesn't match the allocation.
    #[error("heap corruption detected releasing {size} bytes at {address:#x}")]
    CorruptionDetected {
        /// Start of the offending range.
        address: usize,
        /// Granularity-rounded size of the offending range.
        size: usize,
    },

    /// The arena was used before `init`.
    #[error("arena used before init")]
    Uninitialized,
}

pub type Result<T> = core::result::Result<T, AllocError>;
