//! Layout constants for the retained region
//!
//! The descriptor is stored at offset 0 of every region and has a fixed,
//! packed, little-endian layout:
//!
//! ```text
//! offset  0      2      4    5
//!         ┌──────┬──────┬────┐
//!         │ read │write │empt│  → slot 0 starts at DESCRIPTOR_SIZE
//!         │ u16  │ u16  │ u8 │
//!         └──────┴──────┴────┘
//! ```
//!
//! Changing any of these values breaks every region persisted by an older
//! build. Treat them as a storage format.

/// Byte offset of the read cursor inside the descriptor.
pub const READ_INDEX_OFFSET: usize = 0;

/// Byte offset of the write cursor inside the descriptor.
pub const WRITE_INDEX_OFFSET: usize = 2;

/// Byte offset of the empty flag inside the descriptor.
pub const EMPTY_FLAG_OFFSET: usize = 4;

/// Total descriptor size in bytes. Slot 0 begins here.
pub const DESCRIPTOR_SIZE: usize = 5;

/// Largest capacity a region can expose.
///
/// Cursors are stored as `u16`, so a region larger than
/// `DESCRIPTOR_SIZE + MAX_CAPACITY * size_of::<T>()` leaves its tail unused.
pub const MAX_CAPACITY: usize = u16::MAX as usize;

/// Encoded value of the empty flag when the buffer holds no elements.
pub const FLAG_EMPTY: u8 = 1;

/// Encoded value of the empty flag when the buffer holds elements.
pub const FLAG_OCCUPIED: u8 = 0;
