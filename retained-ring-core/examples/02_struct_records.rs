//! Struct Records Example
//!
//! Stores a small `#[repr(C)]` record in a static-style retained region,
//! overflows it on purpose, and inspects the result with the debug dump.
//!
//! ## What You'll Learn
//!
//! - Deriving `Pod` for a record type
//! - How capacity follows from region size and record size
//! - Overwrite-oldest behaviour on overflow
//! - Bulk reads with `drain_into`
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_struct_records
//! ```

use bytemuck::{Pod, Zeroable};

use retained_ring_core::{RetainedRegion, RingBuffer};

/// Three readings taken on one wake-up
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
struct Reading {
    first: u8,
    second: u8,
    third: u8,
}

impl Reading {
    fn stamped(n: u8) -> Self {
        Self {
            first: n,
            second: n.wrapping_add(1),
            third: n.wrapping_add(2),
        }
    }
}

fn main() {
    println!("Struct Records Example");
    println!("======================\n");

    // 5 byte descriptor + 12 records of 3 bytes
    let mut records: RingBuffer<Reading, _> = RingBuffer::new(RetainedRegion::<41>::new());
    records.reset();
    println!("Capacity: {} records\n", records.capacity());

    println!("Pushing 15 records:");
    for n in 0..15 {
        if records.push_overwriting(Reading::stamped(n)) {
            println!("  push {:2} dropped the oldest record", n);
        }
    }
    println!();
    print!("{}", records.debug_dump());
    println!();

    println!("Newest: {:?}", records.peek_newest());
    println!("Oldest: {:?}\n", records.peek_oldest());

    let mut batch = [Reading::default(); 5];
    while !records.is_empty() {
        let count = records.drain_into(&mut batch, true);
        println!("Batch of {}: {:?}", count, &batch[..count]);
    }

    println!("\nAfter draining: usage {}", records.usage());
}
