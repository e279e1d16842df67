//! Common test utilities for integration tests
//!
//! This module provides:
//! - A plain-data record type like the ones stored in RTC memory
//! - A boot simulator that keeps a region alive across "restarts"

#![allow(dead_code)]

use bytemuck::{Pod, Zeroable};

use retained_ring_core::{Region, RingBuffer};

/// Three-field sample record, 6 bytes, no padding
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct Sample {
    pub first: u16,
    pub second: u16,
    pub third: u16,
}

impl Sample {
    /// Record derived from a single counter, like a boot-count stamp
    pub fn stamped(n: u16) -> Self {
        Self {
            first: n,
            second: n.wrapping_add(1),
            third: n.wrapping_add(2),
        }
    }
}

/// Region that outlives every buffer built over it
///
/// Each `boot()` builds a fresh buffer over the same bytes, runs `body`,
/// then drops the buffer, which is what a deep-sleep cycle looks like
/// from the region's point of view. `reset()` runs on the first boot only.
pub struct BootSimulator<R> {
    region: Option<R>,
    boot_count: u32,
}

impl<R: Region> BootSimulator<R> {
    pub fn new(region: R) -> Self {
        Self {
            region: Some(region),
            boot_count: 0,
        }
    }

    pub fn boot<T, F, O>(&mut self, body: F) -> O
    where
        T: Pod,
        F: FnOnce(u32, &mut RingBuffer<T, R>) -> O,
    {
        self.boot_count += 1;
        let region = self.region.take().expect("region lost between boots");

        let mut buffer = RingBuffer::new(region);
        if self.boot_count == 1 {
            buffer.reset();
        }

        let out = body(self.boot_count, &mut buffer);
        self.region = Some(buffer.into_inner());
        out
    }

    pub fn boot_count(&self) -> u32 {
        self.boot_count
    }

    pub fn into_region(mut self) -> R {
        self.region.take().expect("region lost between boots")
    }
}

/// Pop every element oldest first
pub fn drain_all<T: Pod, R: Region>(buffer: &mut RingBuffer<T, R>) -> Vec<T> {
    let mut out = Vec::with_capacity(buffer.usage());
    while let Some(element) = buffer.pop_oldest(true) {
        out.push(element);
    }
    out
}
