//! Debug rendering of a buffer
//!
//! `DebugDump` implements `Display` so it works without an allocator
//! (write it to a UART through `core::fmt::Write`) and, with `alloc`,
//! through `to_string()`.
//!
//! ```text
//! region 27 bytes / element 4 bytes / capacity 5 / read 1 / write 3 / empty false / descriptor 5 bytes
//! raw:     00000000 01000000 02000000 00000000 00000000
//! logical: 01000000 02000000
//! ```
//!
//! Slot bytes are printed in memory order as lowercase hex, one group per
//! slot. `raw` lists physical slots 0 to capacity - 1; `logical` lists the
//! stored elements oldest first.

use core::fmt;

use bytemuck::Pod;

use crate::buffer::RingBuffer;
use crate::constants::DESCRIPTOR_SIZE;
use crate::region::Region;

/// Display adapter returned by `RingBuffer::debug_dump()`
pub struct DebugDump<'a, T, R> {
    buffer: &'a RingBuffer<T, R>,
}

impl<'a, T: Pod, R: Region> DebugDump<'a, T, R> {
    pub(crate) fn new(buffer: &'a RingBuffer<T, R>) -> Self {
        Self { buffer }
    }

    fn write_slot(&self, f: &mut fmt::Formatter<'_>, slot: usize) -> fmt::Result {
        f.write_str(" ")?;
        for byte in self.buffer.slot_bytes(slot) {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl<'a, T: Pod, R: Region> fmt::Display for DebugDump<'a, T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layout = self.buffer.layout();
        let descriptor = self.buffer.descriptor();

        writeln!(
            f,
            "region {} bytes / element {} bytes / capacity {} / read {} / write {} / empty {} / descriptor {} bytes",
            layout.region_len(),
            layout.element_size(),
            layout.capacity(),
            descriptor.read_index,
            descriptor.write_index,
            descriptor.empty,
            DESCRIPTOR_SIZE,
        )?;

        f.write_str("raw:    ")?;
        for slot in 0..layout.capacity() {
            self.write_slot(f, slot)?;
        }
        f.write_str("\n")?;

        f.write_str("logical:")?;
        let read = usize::from(descriptor.read_index);
        for i in 0..self.buffer.usage() {
            self.write_slot(f, layout.offset(read, i))?;
        }
        f.write_str("\n")
    }
}
