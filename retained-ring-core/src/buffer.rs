//! Ring Buffer Over a Caller-Owned Region
//!
//! ## Overview
//!
//! `RingBuffer<T, R>` keeps a FIFO of plain-data records inside a byte
//! region it does not own the lifetime of. All of its state, the cursors
//! included, lives in the region, so dropping the wrapper and building a new
//! one over the same bytes (after a deep sleep, a watchdog reset, a process
//! restart with a file image) continues exactly where the old one stopped.
//!
//! ## Cursor Scheme
//!
//! Two cursors and an empty flag:
//!
//! ```text
//!            read                 write
//!             ↓                     ↓
//! ┌─────┬─────┬─────┬─────┬─────┬─────┬─────┐
//! │     │  A  │  B  │  C  │  D  │     │     │   usage = write - read = 4
//! └─────┴─────┴─────┴─────┴─────┴─────┴─────┘
//!
//!                        read/write
//!                           ↓
//! ┌─────┬─────┬─────┬─────┬─────┬─────┬─────┐
//! │  F  │  G  │  H  │  I  │  C  │  D  │  E  │   empty = false → full
//! └─────┴─────┴─────┴─────┴─────┴─────┴─────┘
//! ```
//!
//! Every slot is usable. Equal cursors mean "empty" or "full" and the flag
//! tells which.
//!
//! ## Overflow
//!
//! `push` never fails. When the buffer is full the read cursor moves past
//! the oldest record before the write cursor advances, so the newest
//! `capacity` records are always kept.
//!
//! ## Power Loss
//!
//! There is no crash atomicity. `push` copies the element into its slot
//! first and stores the descriptor last, so an interrupted push leaves the
//! old cursors in place and the new record is simply not visible. On
//! overflow the oldest record is retired (descriptor stored) before its slot
//! is reused, so the worst case is losing that record one push early. The
//! descriptor store itself is five bytes and is not atomic either.
//!
//! ## Concurrency
//!
//! Not thread-safe and not interrupt-safe. Every mutation takes `&mut self`;
//! share a buffer between an ISR and a task only behind a critical section
//! or mutex that covers the whole operation.

use core::marker::PhantomData;

use bytemuck::Pod;

use crate::descriptor::Descriptor;
use crate::dump::DebugDump;
use crate::errors::RegionResult;
use crate::layout::Layout;
use crate::region::Region;
use crate::constants::DESCRIPTOR_SIZE;

/// Fixed-capacity FIFO stored inline in a region
///
/// ## Type Parameters
///
/// - `T`: record type. `Pod` guarantees it is plain bytes with no pointers,
///   padding, or invalid bit patterns, which is what makes a region safe to
///   reinterpret after a restart.
/// - `R`: the backing [`Region`]. Pass it by value to hand over ownership,
///   or as `&mut` to borrow it.
///
/// ## Internal Invariants
///
/// - `read_index < capacity` and `write_index < capacity` after every
///   operation (cursors loaded from untrusted bytes are wrapped first)
/// - Occupancy is derived from the cursors, never stored
/// - `empty` implies equal cursors
///
/// ## Example
///
/// ```rust
/// use retained_ring_core::RingBuffer;
///
/// let mut region = [0u8; 5 + 3 * 4];
/// let mut buffer: RingBuffer<u32, _> = RingBuffer::new(&mut region);
/// buffer.reset();
///
/// for value in 1..=4 {
///     buffer.push(value);
/// }
///
/// // Capacity 3: the first value was overwritten
/// assert_eq!(buffer.capacity(), 3);
/// assert_eq!(buffer.iter().collect::<Vec<_>>(), vec![2, 3, 4]);
/// ```
pub struct RingBuffer<T, R> {
    region: R,
    layout: Layout,
    _element: PhantomData<T>,
}

impl<T: Pod, R: Region> RingBuffer<T, R> {
    /// Bind a buffer to `region` without touching its contents
    ///
    /// Regions too small for the descriptor plus one element give a buffer
    /// of capacity 0 that ignores pushes and reads as empty.
    pub fn new(region: R) -> Self {
        let layout = Layout::for_type::<T>(region.len());
        if layout.capacity() == 0 {
            log_warn!(
                "Region of {} bytes holds no {} byte elements",
                layout.region_len(),
                layout.element_size()
            );
        }

        Self {
            region,
            layout,
            _element: PhantomData,
        }
    }

    /// Zero the whole region and mark the buffer empty
    ///
    /// Run this once per physical region, typically on the first cold boot.
    /// Running it again discards everything retained so far.
    pub fn reset(&mut self) {
        self.region.bytes_mut().fill(0);
        if self.region.len() >= DESCRIPTOR_SIZE {
            self.store_descriptor(Descriptor::EMPTY);
        }
        log_debug!(
            "Reset region: {} bytes, capacity {}",
            self.layout.region_len(),
            self.layout.capacity()
        );
    }

    /// Check that the retained descriptor looks like one this crate wrote
    ///
    /// Useful on boot to decide between resuming and `reset()`. A region
    /// shorter than the descriptor has nothing to check.
    pub fn check(&self) -> RegionResult<()> {
        match self.raw_descriptor() {
            Some(raw) => Descriptor::validate_raw(&raw, self.layout.capacity()),
            None => Ok(()),
        }
    }

    /// Append `element`, dropping the oldest element if the buffer is full
    pub fn push(&mut self, element: T) {
        self.push_overwriting(element);
    }

    /// Append `element` and report whether an older element was dropped
    ///
    /// Always false for capacity 0, where nothing is stored at all.
    pub fn push_overwriting(&mut self, element: T) -> bool {
        if self.layout.capacity() == 0 {
            return false;
        }

        let overwrote = self.retire_oldest_if_full();

        // Element bytes before cursors: the record becomes visible only when
        // the descriptor is stored.
        let mut descriptor = self.descriptor();
        let write = usize::from(descriptor.write_index);
        self.write_slot(write, &element);

        descriptor.write_index = self.cursor(self.layout.advance(write));
        descriptor.empty = false;
        self.store_descriptor(descriptor);

        overwrote
    }

    /// Move the read cursor past the oldest element if the buffer is full
    ///
    /// The descriptor is stored before the slot is reused, so a push cut
    /// short by power loss never exposes a half-written slot as the oldest
    /// record.
    pub(crate) fn retire_oldest_if_full(&mut self) -> bool {
        let mut descriptor = self.descriptor();
        if descriptor.empty || descriptor.read_index != descriptor.write_index {
            return false;
        }

        let read = usize::from(descriptor.read_index);
        descriptor.read_index = self.cursor(self.layout.advance(read));
        // Capacity 1 wraps straight back onto the write cursor
        descriptor.empty = descriptor.read_index == descriptor.write_index;
        self.store_descriptor(descriptor);
        log_trace!("Dropped oldest element at slot {}", read);

        true
    }

    /// Read the oldest element, consuming it if `advance` is true
    ///
    /// Returns `None` when the buffer is empty.
    pub fn pop_oldest(&mut self, advance: bool) -> Option<T> {
        let mut descriptor = self.occupied_descriptor()?;
        let read = usize::from(descriptor.read_index);
        let element = self.read_slot(read);

        if advance {
            descriptor.read_index = self.cursor(self.layout.advance(read));
            descriptor.empty = descriptor.read_index == descriptor.write_index;
            self.store_descriptor(descriptor);
        }

        Some(element)
    }

    /// Read the newest element, consuming it if `advance` is true
    ///
    /// Returns `None` when the buffer is empty.
    pub fn pop_newest(&mut self, advance: bool) -> Option<T> {
        let mut descriptor = self.occupied_descriptor()?;
        let newest = self.layout.retract(usize::from(descriptor.write_index));
        let element = self.read_slot(newest);

        if advance {
            descriptor.write_index = self.cursor(newest);
            descriptor.empty = descriptor.read_index == descriptor.write_index;
            self.store_descriptor(descriptor);
        }

        Some(element)
    }

    /// Oldest element without consuming it
    pub fn peek_oldest(&self) -> Option<T> {
        self.get(0)
    }

    /// Newest element without consuming it
    pub fn peek_newest(&self) -> Option<T> {
        let descriptor = self.occupied_descriptor()?;
        Some(self.read_slot(self.layout.retract(usize::from(descriptor.write_index))))
    }

    /// Element at logical position `index` (0 = oldest)
    ///
    /// ```text
    /// Physical:  [D, E, A, B, C]   read = 2
    /// Logical:   [A, B, C, D, E]
    ///
    /// logical[i] = physical[(read + i) % capacity]
    /// ```
    pub fn get(&self, index: usize) -> Option<T> {
        if index >= self.usage() {
            return None;
        }

        let read = usize::from(self.descriptor().read_index);
        Some(self.read_slot(self.layout.offset(read, index)))
    }

    /// Copy up to `out.len()` elements, oldest first, into `out`
    ///
    /// With `advance` the copied elements are consumed. Returns how many
    /// elements were copied.
    pub fn drain_into(&mut self, out: &mut [T], advance: bool) -> usize {
        let count = out.len().min(self.usage());
        if count == 0 {
            return 0;
        }

        let mut descriptor = self.descriptor();
        let read = usize::from(descriptor.read_index);
        for (i, slot) in out[..count].iter_mut().enumerate() {
            *slot = self.read_slot(self.layout.offset(read, i));
        }

        if advance {
            descriptor.read_index = self.cursor(self.layout.offset(read, count));
            descriptor.empty = descriptor.read_index == descriptor.write_index;
            self.store_descriptor(descriptor);
        }

        count
    }

    /// Number of stored elements, in O(1)
    pub fn usage(&self) -> usize {
        let capacity = self.layout.capacity();
        if capacity == 0 {
            return 0;
        }

        let descriptor = self.descriptor();
        if descriptor.empty {
            return 0;
        }

        let read = usize::from(descriptor.read_index);
        let write = usize::from(descriptor.write_index);
        if write > read {
            write - read
        } else {
            // Equal cursors with the flag clear: full
            capacity - read + write
        }
    }

    /// Maximum number of elements
    pub fn capacity(&self) -> usize {
        self.layout.capacity()
    }

    /// True when no elements are stored
    pub fn is_empty(&self) -> bool {
        self.usage() == 0
    }

    /// True when the next push will drop the oldest element
    pub fn is_full(&self) -> bool {
        self.layout.capacity() > 0 && self.usage() == self.layout.capacity()
    }

    /// Region geometry
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Current cursors, wrapped into `[0, capacity)`
    ///
    /// A region too small to hold the descriptor reports the reset state.
    pub fn descriptor(&self) -> Descriptor {
        let capacity = self.layout.capacity();
        match self.raw_descriptor() {
            Some(raw) if capacity > 0 => {
                let mut descriptor = Descriptor::decode(&raw);
                descriptor.read_index = self.cursor(usize::from(descriptor.read_index) % capacity);
                descriptor.write_index = self.cursor(usize::from(descriptor.write_index) % capacity);
                descriptor.empty = descriptor.empty && descriptor.read_index == descriptor.write_index;
                descriptor
            }
            _ => Descriptor::EMPTY,
        }
    }

    /// Iterate over copies of the stored elements, oldest first
    pub fn iter(&self) -> Iter<'_, T, R> {
        Iter {
            buffer: self,
            front: 0,
            back: self.usage(),
        }
    }

    /// Human-readable rendering of raw and logical slot contents
    pub fn debug_dump(&self) -> DebugDump<'_, T, R> {
        DebugDump::new(self)
    }

    /// Backing region
    pub fn region(&self) -> &R {
        &self.region
    }

    /// Give the region back to the caller
    ///
    /// The region keeps every byte the buffer wrote; a new buffer built over
    /// it resumes from the same state.
    pub fn into_inner(self) -> R {
        self.region
    }

    /// Raw bytes of physical slot `slot`
    pub(crate) fn slot_bytes(&self, slot: usize) -> &[u8] {
        &self.region.bytes()[self.layout.slot_range(slot)]
    }

    /// Copy `element` into physical slot `slot` without touching cursors
    pub(crate) fn write_slot(&mut self, slot: usize, element: &T) {
        let range = self.layout.slot_range(slot);
        self.region.bytes_mut()[range].copy_from_slice(bytemuck::bytes_of(element));
    }

    fn read_slot(&self, slot: usize) -> T {
        // Slots follow a 5 byte descriptor and are not aligned for T
        bytemuck::pod_read_unaligned(self.slot_bytes(slot))
    }

    fn raw_descriptor(&self) -> Option<[u8; DESCRIPTOR_SIZE]> {
        let bytes = self.region.bytes().get(self.layout.descriptor_range())?;
        let mut raw = [0u8; DESCRIPTOR_SIZE];
        raw.copy_from_slice(bytes);
        Some(raw)
    }

    fn store_descriptor(&mut self, descriptor: Descriptor) {
        let range = self.layout.descriptor_range();
        self.region.bytes_mut()[range].copy_from_slice(&descriptor.encode());
    }

    /// Descriptor of a non-empty buffer, or `None`
    fn occupied_descriptor(&self) -> Option<Descriptor> {
        if self.layout.capacity() == 0 {
            return None;
        }
        let descriptor = self.descriptor();
        (!descriptor.empty).then_some(descriptor)
    }

    /// Narrow a wrapped cursor to its stored width
    ///
    /// Cursors are always `< capacity <= MAX_CAPACITY`, so this never
    /// saturates in practice.
    fn cursor(&self, index: usize) -> u16 {
        u16::try_from(index).unwrap_or(u16::MAX)
    }
}

impl<T: Pod, R: Region> core::fmt::Debug for RingBuffer<T, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RingBuffer")
            .field("layout", &self.layout)
            .field("descriptor", &self.descriptor())
            .field("usage", &self.usage())
            .finish()
    }
}

/// Iterator over buffer contents, oldest to newest
pub struct Iter<'a, T, R> {
    buffer: &'a RingBuffer<T, R>,
    front: usize,
    back: usize,
}

impl<'a, T: Pod, R: Region> Iterator for Iter<'a, T, R> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        let item = self.buffer.get(self.front)?;
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a, T: Pod, R: Region> DoubleEndedIterator for Iter<'a, T, R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        self.back -= 1;
        self.buffer.get(self.back)
    }
}

impl<'a, T: Pod, R: Region> ExactSizeIterator for Iter<'a, T, R> {}

impl<T: Pod, R: Region> Extend<T> for RingBuffer<T, R> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push(element);
        }
    }
}

#[cfg(test)]
impl<T: Pod, R: Region> RingBuffer<T, R> {
    /// Count elements by stepping from the read cursor to the write cursor
    pub(crate) fn usage_by_walk(&self) -> usize {
        let capacity = self.layout.capacity();
        let descriptor = self.descriptor();
        if capacity == 0 || descriptor.empty {
            return 0;
        }

        let write = usize::from(descriptor.write_index);
        let mut index = usize::from(descriptor.read_index);
        let mut count = 0;
        loop {
            count += 1;
            index = self.layout.advance(index);
            if index == write {
                return count;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::RetainedRegion;

    type Record = [u8; 3];

    fn record(value: u32) -> Record {
        let [a, b, c, _] = value.to_le_bytes();
        [a, b, c]
    }

    fn value(record: Record) -> u32 {
        u32::from_le_bytes([record[0], record[1], record[2], 0])
    }

    fn fresh<const N: usize>() -> RingBuffer<u32, RetainedRegion<N>> {
        let mut buffer = RingBuffer::new(RetainedRegion::<N>::new());
        buffer.reset();
        buffer
    }

    #[test]
    fn construction_does_not_write() {
        let buffer: RingBuffer<u32, _> = RingBuffer::new(RetainedRegion::<32>::filled(0xEE));
        assert_eq!(buffer.into_inner().to_bytes(), [0xEE; 32]);
    }

    #[test]
    fn reset_zeroes_and_marks_empty() {
        let mut buffer: RingBuffer<u32, _> = RingBuffer::new(RetainedRegion::<32>::filled(0xEE));
        buffer.reset();

        assert!(buffer.is_empty());
        assert_eq!(buffer.check(), Ok(()));
        let bytes = buffer.into_inner().to_bytes();
        assert_eq!(bytes[..DESCRIPTOR_SIZE], Descriptor::EMPTY.encode());
        assert!(bytes[DESCRIPTOR_SIZE..].iter().all(|&b| b == 0));
    }

    #[test]
    fn fifo_order() {
        let mut buffer = fresh::<{ 5 + 4 * 8 }>();
        for value in 10..15 {
            buffer.push(value);
        }

        assert_eq!(buffer.usage(), 5);
        for expected in 10..15 {
            assert_eq!(buffer.pop_oldest(true), Some(expected));
        }
        assert!(buffer.is_empty());
    }

    #[test]
    fn overflow_drops_oldest() {
        let mut buffer = fresh::<{ 5 + 4 * 4 }>();
        assert_eq!(buffer.capacity(), 4);

        let dropped: Vec<bool> = (0..6).map(|v| buffer.push_overwriting(v)).collect();
        assert_eq!(dropped, vec![false, false, false, false, true, true]);
        assert!(buffer.is_full());
        assert_eq!(buffer.iter().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
    }

    #[test]
    fn region_of_200_bytes_with_3_byte_records() {
        let mut buffer: RingBuffer<Record, _> = RingBuffer::new(RetainedRegion::<200>::new());
        buffer.reset();
        assert_eq!(buffer.capacity(), 65);

        for v in 0..=70 {
            buffer.push(record(v));
        }
        assert_eq!(buffer.usage(), 65);

        let mut popped = Vec::new();
        while let Some(r) = buffer.pop_oldest(true) {
            popped.push(value(r));
        }
        assert_eq!(popped, (6..=70u32).collect::<Vec<_>>());
    }

    #[test]
    fn empty_reads_return_none() {
        let mut buffer = fresh::<32>();
        assert_eq!(buffer.pop_oldest(true), None);
        assert_eq!(buffer.pop_oldest(false), None);
        assert_eq!(buffer.pop_newest(true), None);
        assert_eq!(buffer.peek_oldest(), None);
        assert_eq!(buffer.peek_newest(), None);
        assert_eq!(buffer.get(0), None);

        // Draining to empty must not leave the last value readable
        buffer.push(7);
        assert_eq!(buffer.pop_oldest(true), Some(7));
        assert_eq!(buffer.pop_oldest(false), None);
    }

    #[test]
    fn non_advancing_pop_is_a_peek() {
        let mut buffer = fresh::<32>();
        buffer.push(1);
        buffer.push(2);

        assert_eq!(buffer.pop_oldest(false), Some(1));
        assert_eq!(buffer.pop_oldest(false), Some(1));
        assert_eq!(buffer.pop_newest(false), Some(2));
        assert_eq!(buffer.pop_newest(false), Some(2));
        assert_eq!(buffer.usage(), 2);
    }

    #[test]
    fn pop_newest_walks_backwards() {
        let mut buffer = fresh::<{ 5 + 4 * 3 }>();
        for v in 0..5 {
            buffer.push(v);
        }

        assert_eq!(buffer.pop_newest(true), Some(4));
        assert_eq!(buffer.pop_newest(true), Some(3));
        assert_eq!(buffer.pop_newest(true), Some(2));
        assert_eq!(buffer.pop_newest(true), None);
        assert!(buffer.descriptor().empty);
    }

    #[test]
    fn mixed_ends_meet_in_the_middle() {
        let mut buffer = fresh::<{ 5 + 4 * 5 }>();
        buffer.extend([1, 2, 3, 4]);

        assert_eq!(buffer.pop_oldest(true), Some(1));
        assert_eq!(buffer.pop_newest(true), Some(4));
        assert_eq!(buffer.iter().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(buffer.pop_newest(true), Some(3));
        assert_eq!(buffer.pop_oldest(true), Some(2));
        assert!(buffer.is_empty());
    }

    #[test]
    fn get_maps_logical_to_physical() {
        let mut buffer = fresh::<{ 5 + 4 * 5 }>();
        buffer.extend(0..7);

        assert_eq!(buffer.descriptor().read_index, 2);
        assert_eq!(buffer.get(0), Some(2));
        assert_eq!(buffer.get(4), Some(6));
        assert_eq!(buffer.get(5), None);
        assert_eq!(buffer.get(0), buffer.get(0));
    }

    #[test]
    fn drain_into_copies_oldest_first() {
        let mut buffer = fresh::<{ 5 + 4 * 4 }>();
        buffer.extend(0..6);

        let mut out = [0u32; 3];
        assert_eq!(buffer.drain_into(&mut out, false), 3);
        assert_eq!(out, [2, 3, 4]);
        assert_eq!(buffer.usage(), 4);

        assert_eq!(buffer.drain_into(&mut out, true), 3);
        assert_eq!(buffer.usage(), 1);

        let mut rest = [0u32; 8];
        assert_eq!(buffer.drain_into(&mut rest, true), 1);
        assert_eq!(rest[0], 5);
        assert!(buffer.is_empty());
        assert_eq!(buffer.drain_into(&mut rest, true), 0);
    }

    #[test]
    fn zero_capacity_ignores_everything() {
        let mut buffer: RingBuffer<u32, _> = RingBuffer::new([0u8; 8]);
        buffer.reset();
        assert_eq!(buffer.capacity(), 0);

        buffer.push(1);
        assert!(!buffer.push_overwriting(2));
        assert_eq!(buffer.usage(), 0);
        assert!(!buffer.is_full());
        assert_eq!(buffer.pop_oldest(true), None);
        assert_eq!(buffer.pop_newest(true), None);
        assert_eq!(buffer.iter().count(), 0);
    }

    #[test]
    fn region_smaller_than_descriptor() {
        let mut buffer: RingBuffer<u8, _> = RingBuffer::new([0xFFu8; 3]);
        assert_eq!(buffer.capacity(), 0);
        assert_eq!(buffer.check(), Ok(()));
        assert_eq!(buffer.descriptor(), Descriptor::EMPTY);

        buffer.reset();
        buffer.push(1);
        assert_eq!(buffer.into_inner(), [0u8; 3]);
    }

    #[test]
    fn usage_matches_walk_through_wraparound() {
        let mut buffer = fresh::<{ 5 + 4 * 7 }>();
        for round in 0..50u32 {
            for v in 0..(round % 5 + 1) {
                buffer.push(round * 10 + v);
            }
            for _ in 0..(round % 3) {
                buffer.pop_oldest(true);
            }
            assert_eq!(buffer.usage(), buffer.usage_by_walk(), "round {}", round);
            assert_eq!(buffer.iter().len(), buffer.usage());
        }
    }

    #[test]
    fn interrupted_push_is_invisible() {
        let mut buffer = fresh::<{ 5 + 4 * 4 }>();
        buffer.extend([1, 2]);

        // Power lost after the element copy, before the descriptor store
        let write = usize::from(buffer.descriptor().write_index);
        buffer.write_slot(write, &99);

        let restarted: RingBuffer<u32, _> = RingBuffer::new(buffer.into_inner());
        assert_eq!(restarted.usage(), 2);
        assert_eq!(restarted.iter().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(restarted.check(), Ok(()));
    }

    #[test]
    fn interrupted_overwrite_loses_only_the_oldest() {
        let mut buffer = fresh::<{ 5 + 4 * 3 }>();
        buffer.extend([1, 2, 3]);

        // Power lost after the oldest was retired and its slot rewritten,
        // before the write cursor moved.
        assert!(buffer.retire_oldest_if_full());
        let write = usize::from(buffer.descriptor().write_index);
        buffer.write_slot(write, &4);

        let restarted: RingBuffer<u32, _> = RingBuffer::new(buffer.into_inner());
        assert_eq!(restarted.usage(), 2);
        assert_eq!(restarted.iter().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(restarted.check(), Ok(()));
    }

    #[test]
    fn single_slot_buffer_keeps_newest() {
        let mut buffer = fresh::<{ 5 + 4 }>();
        assert_eq!(buffer.capacity(), 1);

        assert!(!buffer.push_overwriting(1));
        assert!(buffer.is_full());
        assert!(buffer.push_overwriting(2));
        assert_eq!(buffer.usage(), 1);
        assert_eq!(buffer.peek_oldest(), Some(2));
        assert_eq!(buffer.pop_newest(true), Some(2));
        assert!(buffer.is_empty());
    }

    #[test]
    fn garbage_cursors_are_wrapped() {
        let mut region = RetainedRegion::<{ 5 + 4 * 4 }>::new();
        region.bytes_mut()[..DESCRIPTOR_SIZE].copy_from_slice(&[0x09, 0x00, 0x06, 0x00, 0x00]);

        let mut buffer: RingBuffer<u32, _> = RingBuffer::new(region);
        assert!(buffer.check().is_err());

        let descriptor = buffer.descriptor();
        assert_eq!((descriptor.read_index, descriptor.write_index), (1, 2));
        assert_eq!(buffer.usage(), 1);
        buffer.push(5);
        assert_eq!(buffer.usage(), 2);
        assert_eq!(buffer.check(), Ok(()));
    }

    #[test]
    fn iterator_runs_both_ways() {
        let mut buffer = fresh::<{ 5 + 4 * 4 }>();
        buffer.extend(0..6);

        assert_eq!(buffer.iter().rev().collect::<Vec<_>>(), vec![5, 4, 3, 2]);
        let mut iter = buffer.iter();
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.next_back(), Some(5));
        assert_eq!(iter.len(), 2);
    }
}
