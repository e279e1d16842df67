//! Capacity derivation and slot addressing
//!
//! ## Region Layout
//!
//! ```text
//! ┌────────────┬────────┬────────┬─────┬──────────────┬───────┐
//! │ descriptor │ slot 0 │ slot 1 │ ... │ slot cap - 1 │ spare │
//! └────────────┴────────┴────────┴─────┴──────────────┴───────┘
//!  0            5        5 + e    ...                  unused tail
//! ```
//!
//! Each slot is exactly `size_of::<T>()` bytes with no padding between slots,
//! so slots are only byte-aligned. Capacity is
//! `floor((region_len - DESCRIPTOR_SIZE) / element_size)`, clamped to zero
//! for regions smaller than the descriptor and to `MAX_CAPACITY` for regions
//! larger than the cursors can address.
//!
//! ## Example: 200 byte region, 3 byte records
//!
//! ```rust
//! use retained_ring_core::Layout;
//!
//! let layout = Layout::new(200, 3);
//! assert_eq!(layout.capacity(), 65); // (200 - 5) / 3
//! assert_eq!(layout.slot_offset(0), 5);
//! assert_eq!(layout.slot_offset(64), 197);
//! ```

use core::ops::Range;

use crate::constants::{DESCRIPTOR_SIZE, MAX_CAPACITY};

/// Geometry of a region for one element size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    region_len: usize,
    element_size: usize,
    capacity: usize,
}

impl Layout {
    /// Derive the layout of a region of `region_len` bytes holding
    /// `element_size`-byte elements.
    ///
    /// Zero-sized elements get capacity 0; there is nothing to store.
    pub const fn new(region_len: usize, element_size: usize) -> Self {
        let capacity = if element_size == 0 {
            0
        } else {
            match region_len.checked_sub(DESCRIPTOR_SIZE) {
                Some(payload) => {
                    let slots = payload / element_size;
                    if slots > MAX_CAPACITY { MAX_CAPACITY } else { slots }
                }
                None => 0,
            }
        };

        Self {
            region_len,
            element_size,
            capacity,
        }
    }

    /// Layout for element type `T`
    pub const fn for_type<T>(region_len: usize) -> Self {
        Self::new(region_len, core::mem::size_of::<T>())
    }

    /// Number of slots
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes per slot
    pub const fn element_size(&self) -> usize {
        self.element_size
    }

    /// Total region length, including any unused tail
    pub const fn region_len(&self) -> usize {
        self.region_len
    }

    /// Smallest region that holds `capacity` elements of `element_size` bytes
    pub const fn region_len_for(capacity: usize, element_size: usize) -> usize {
        DESCRIPTOR_SIZE + capacity * element_size
    }

    /// Descriptor byte range
    pub const fn descriptor_range(&self) -> Range<usize> {
        0..DESCRIPTOR_SIZE
    }

    /// Byte offset of physical slot `slot`
    pub const fn slot_offset(&self, slot: usize) -> usize {
        DESCRIPTOR_SIZE + slot * self.element_size
    }

    /// Byte range of physical slot `slot`
    ///
    /// Callers pass cursors that are already wrapped into `[0, capacity)`.
    pub const fn slot_range(&self, slot: usize) -> Range<usize> {
        let start = self.slot_offset(slot);
        start..start + self.element_size
    }

    /// Byte range covering every slot
    pub const fn slots_range(&self) -> Range<usize> {
        DESCRIPTOR_SIZE..self.slot_offset(self.capacity)
    }

    /// Next cursor position, wrapping at capacity
    ///
    /// The addition happens in `usize` before the modulo so the result never
    /// depends on the width of the stored cursor.
    pub const fn advance(&self, index: usize) -> usize {
        (index + 1) % self.capacity
    }

    /// Previous cursor position, wrapping at capacity
    pub const fn retract(&self, index: usize) -> usize {
        (index + self.capacity - 1) % self.capacity
    }

    /// Cursor `offset` positions after `index`, wrapping at capacity
    pub const fn offset(&self, index: usize, offset: usize) -> usize {
        (index + offset) % self.capacity
    }
}
