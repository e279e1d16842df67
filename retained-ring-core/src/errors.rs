//! Error Types for Retained Regions
//!
//! ## Design Philosophy
//!
//! The ring buffer operations themselves never fail. A region that is too
//! small degrades to capacity 0, reads from an empty buffer return `None`,
//! and every cursor is wrapped before it addresses memory. Errors only exist
//! at the edges:
//!
//! 1. **Descriptor checks**: `RingBuffer::check()` lets a caller ask, on boot,
//!    whether the retained bytes look like a region this crate wrote.
//! 2. **Host-side regions**: `FileRegion` (std only) reads and writes an image
//!    file and can hit I/O failures.
//!
//! Errors are `Copy` and carry no heap data so they can be returned from
//! interrupt-free code on bare-metal targets.
//!
//! ```rust
//! use retained_ring_core::{RingBuffer, RetainedRegion, RegionError};
//!
//! let mut buffer: RingBuffer<u16, _> = RingBuffer::new(RetainedRegion::<32>::filled(0xAA));
//! match buffer.check() {
//!     Ok(()) => {} // retained data is usable
//!     Err(RegionError::InvalidEmptyFlag { .. }) | Err(RegionError::CursorOutOfRange { .. }) => {
//!         buffer.reset(); // never initialised, start over
//!     }
//!     Err(_) => buffer.reset(),
//! }
//! assert!(buffer.is_empty());
//! ```

use thiserror_no_std::Error;

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;

/// Region errors - kept small and `Copy` for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionError {
    /// A stored cursor does not address a slot
    #[error("Cursor {cursor} outside capacity {capacity}")]
    CursorOutOfRange {
        /// The offending cursor value as stored
        cursor: u16,
        /// Capacity derived from the region length
        capacity: usize,
    },

    /// The empty flag byte is neither of the two encoded values
    #[error("Empty flag byte {value:#04x} is not a valid flag")]
    InvalidEmptyFlag {
        /// Raw flag byte
        value: u8,
    },

    /// The empty flag is set while the cursors differ
    #[error("Empty flag set with read {read_index} != write {write_index}")]
    InconsistentFlag {
        /// Stored read cursor
        read_index: u16,
        /// Stored write cursor
        write_index: u16,
    },

    /// A persisted image does not match the expected region length
    #[error("Region image is {actual} bytes, expected {expected}")]
    LengthMismatch {
        /// Length the caller asked for
        expected: usize,
        /// Length found in the image
        actual: usize,
    },

    /// Reading or writing a host-side region image failed
    #[cfg(feature = "std")]
    #[error("Region I/O failed: {kind:?}")]
    Io {
        /// Kind of the underlying I/O error
        kind: std::io::ErrorKind,
    },
}

#[cfg(feature = "std")]
impl From<std::io::Error> for RegionError {
    fn from(err: std::io::Error) -> Self {
        Self::Io { kind: err.kind() }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for RegionError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::CursorOutOfRange { cursor, capacity } =>
                defmt::write!(fmt, "Cursor {} outside capacity {}", cursor, capacity),
            Self::InvalidEmptyFlag { value } =>
                defmt::write!(fmt, "Invalid empty flag {=u8:#x}", value),
            Self::InconsistentFlag { read_index, write_index } =>
                defmt::write!(fmt, "Empty flag with R{} != W{}", read_index, write_index),
            Self::LengthMismatch { expected, actual } =>
                defmt::write!(fmt, "Image {} bytes, expected {}", actual, expected),
            #[cfg(feature = "std")]
            Self::Io { .. } =>
                defmt::write!(fmt, "Region I/O failed"),
        }
    }
}
