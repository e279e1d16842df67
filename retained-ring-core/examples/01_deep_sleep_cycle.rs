//! Deep Sleep Cycle Example
//!
//! Simulates firmware that wakes from deep sleep, appends a record to a ring
//! buffer kept in retained memory, and goes back to sleep. A file stands in
//! for the RTC memory so the state survives between runs of this program.
//!
//! ## What You'll Learn
//!
//! - Calling `reset()` only on the first cold boot
//! - Resuming from retained bytes on every later boot
//! - Detecting a region that was never initialised
//! - Reading the buffer back after a batch of wake-ups
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_deep_sleep_cycle
//! cargo run --example 01_deep_sleep_cycle   # state carries over
//! ```

use retained_ring_core::{FileRegion, RegionResult, RingBuffer};

/// Same size as the RTC array on the target board
const RTC_REGION_SIZE: usize = 2000;

/// Wake-ups simulated per run
const WAKEUPS_PER_RUN: u32 = 12;

/// Drain and report every this many wake-ups
const REPORT_EVERY: u32 = 5;

fn main() {
    println!("Deep Sleep Cycle Example");
    println!("========================\n");

    let path = std::env::temp_dir().join("retained-ring-deep-sleep.img");
    println!("Retained memory image: {}\n", path.display());

    for _ in 0..WAKEUPS_PER_RUN {
        if let Err(e) = wake(&path) {
            println!("Wake-up failed: {}", e);
            return;
        }
    }
}

/// One boot: load retained memory, log, sleep (flush)
fn wake(path: &std::path::Path) -> RegionResult<()> {
    let region = FileRegion::open(path, RTC_REGION_SIZE)?;
    let cold_boot = region.is_fresh();

    let mut records: RingBuffer<u32, _> = RingBuffer::new(region);
    if cold_boot || records.check().is_err() {
        println!("[Boot] Cold boot, initialising retained region");
        records.reset();
    }

    // The boot counter lives next to the records: newest record + 1
    let boot_count = records.peek_newest().map_or(1, |last| last + 1);
    println!("[Boot] Boot number: {}", boot_count);
    records.push(boot_count);

    if boot_count % REPORT_EVERY == 0 {
        print!("[Boot] Retrieved:");
        // Keep the newest record so the counter survives the drain
        while records.usage() > 1 {
            if let Some(record) = records.pop_oldest(true) {
                print!(" {}", record);
            }
        }
        println!();
    }

    println!("[Boot] {} of {} slots used, going to sleep\n", records.usage(), records.capacity());
    records.region().flush()
}
