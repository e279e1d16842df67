//! Cursor descriptor stored at the start of the region
//!
//! The descriptor is the only bookkeeping the buffer has. It is encoded and
//! decoded field by field with explicit widths rather than by casting the
//! region bytes to a struct, so the on-memory format does not depend on the
//! compiler's struct layout or on the target's endianness.

use crate::constants::{
    DESCRIPTOR_SIZE, EMPTY_FLAG_OFFSET, FLAG_EMPTY, FLAG_OCCUPIED, READ_INDEX_OFFSET,
    WRITE_INDEX_OFFSET,
};
use crate::errors::{RegionError, RegionResult};

/// Snapshot of the buffer cursors
///
/// ## Cursor Scheme
///
/// `read_index` is the next slot to read, `write_index` the next slot to
/// write. Equal cursors are ambiguous (nothing stored, or every slot
/// stored) and `empty` resolves it:
///
/// ```text
/// read == write, empty = true   → 0 elements
/// read == write, empty = false  → capacity elements
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Descriptor {
    /// Next slot to read (oldest element)
    pub read_index: u16,
    /// Next slot to write
    pub write_index: u16,
    /// Resolves `read_index == write_index`
    pub empty: bool,
}

impl Descriptor {
    /// Descriptor written by `reset()`
    pub const EMPTY: Self = Self {
        read_index: 0,
        write_index: 0,
        empty: true,
    };

    /// Decode from the first `DESCRIPTOR_SIZE` bytes of a region.
    ///
    /// Any nonzero flag byte decodes as empty. Use [`Descriptor::validate_raw`]
    /// to detect flag bytes that were never written by this crate.
    pub fn decode(raw: &[u8; DESCRIPTOR_SIZE]) -> Self {
        Self {
            read_index: u16::from_le_bytes([raw[READ_INDEX_OFFSET], raw[READ_INDEX_OFFSET + 1]]),
            write_index: u16::from_le_bytes([raw[WRITE_INDEX_OFFSET], raw[WRITE_INDEX_OFFSET + 1]]),
            empty: raw[EMPTY_FLAG_OFFSET] != FLAG_OCCUPIED,
        }
    }

    /// Encode into the packed little-endian layout.
    pub fn encode(&self) -> [u8; DESCRIPTOR_SIZE] {
        let mut raw = [0u8; DESCRIPTOR_SIZE];
        raw[READ_INDEX_OFFSET..READ_INDEX_OFFSET + 2].copy_from_slice(&self.read_index.to_le_bytes());
        raw[WRITE_INDEX_OFFSET..WRITE_INDEX_OFFSET + 2].copy_from_slice(&self.write_index.to_le_bytes());
        raw[EMPTY_FLAG_OFFSET] = if self.empty { FLAG_EMPTY } else { FLAG_OCCUPIED };
        raw
    }

    /// Check raw descriptor bytes against a capacity.
    ///
    /// Catches regions that were never reset or were overwritten by
    /// something else. It says nothing about slot contents.
    pub fn validate_raw(raw: &[u8; DESCRIPTOR_SIZE], capacity: usize) -> RegionResult<()> {
        let flag = raw[EMPTY_FLAG_OFFSET];
        if flag != FLAG_EMPTY && flag != FLAG_OCCUPIED {
            return Err(RegionError::InvalidEmptyFlag { value: flag });
        }

        let descriptor = Self::decode(raw);
        if capacity == 0 {
            // Nothing is ever addressed; only the reset state makes sense.
            return if descriptor == Self::EMPTY {
                Ok(())
            } else {
                Err(RegionError::CursorOutOfRange {
                    cursor: descriptor.read_index.max(descriptor.write_index),
                    capacity,
                })
            };
        }

        for cursor in [descriptor.read_index, descriptor.write_index] {
            if usize::from(cursor) >= capacity {
                return Err(RegionError::CursorOutOfRange { cursor, capacity });
            }
        }

        if descriptor.empty && descriptor.read_index != descriptor.write_index {
            return Err(RegionError::InconsistentFlag {
                read_index: descriptor.read_index,
                write_index: descriptor.write_index,
            });
        }

        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Descriptor {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "R{} W{} empty={}",
            self.read_index,
            self.write_index,
            self.empty
        )
    }
}
