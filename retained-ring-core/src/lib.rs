//! Ring buffer for retained memory regions
//!
//! Stores fixed-size records inside a single caller-owned byte region,
//! including memory that survives deep sleep or a warm reset (ESP32 RTC
//! slow memory, battery-backed SRAM, a `.noinit` section).
//!
//! Key constraints:
//! - Bookkeeping lives inline at the start of the region
//! - No heap allocation, no blocking, no unsafe code
//! - Construction never writes; `reset()` is explicit and runs once per
//!   physical region lifetime
//! - Overflow drops the oldest record instead of rejecting the new one
//!
//! ```rust
//! use retained_ring_core::{RingBuffer, RetainedRegion};
//!
//! let mut buffer: RingBuffer<u32, _> = RingBuffer::new(RetainedRegion::<64>::new());
//! buffer.reset(); // first cold boot only
//!
//! buffer.push(1);
//! buffer.push(2);
//! assert_eq!(buffer.pop_oldest(true), Some(1));
//! assert_eq!(buffer.usage(), 1);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

#[macro_use]
mod macros;

pub mod buffer;
pub mod constants;
pub mod descriptor;
pub mod dump;
pub mod errors;
pub mod layout;
pub mod region;

// Public API
pub use buffer::{Iter, RingBuffer};
pub use descriptor::Descriptor;
pub use dump::DebugDump;
pub use errors::{RegionError, RegionResult};
pub use layout::Layout;
pub use region::{Region, RetainedRegion};

#[cfg(feature = "std")]
pub use region::FileRegion;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
