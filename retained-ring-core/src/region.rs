//! Backing memory for a ring buffer
//!
//! A region is any byte range the caller owns and hands to exactly one
//! `RingBuffer`. The buffer never allocates or copies the region; the
//! descriptor and slots are offset views into it.
//!
//! ## Lifecycle
//!
//! 1. The memory exists before the buffer (a `static`, a stack array, a
//!    memory-mapped window, a file image).
//! 2. `RingBuffer::reset()` initialises it once per physical lifetime,
//!    usually on the first cold boot.
//! 3. Many buffers are constructed over it over time, one at a time, each
//!    seeing what the previous one left behind.
//! 4. The region outlives every wrapper; `RingBuffer::into_inner()` gives it
//!    back.
//!
//! ## Retained Memory on Hardware
//!
//! On an ESP32 the region is a `static` placed in RTC slow memory, which
//! survives deep sleep but not power loss:
//!
//! ```rust,ignore
//! #[link_section = ".rtc.data"]
//! static mut LOG_REGION: RetainedRegion<2000> = RetainedRegion::new();
//!
//! let region = unsafe { &mut *core::ptr::addr_of_mut!(LOG_REGION) };
//! let mut log: RingBuffer<Record, _> = RingBuffer::new(region);
//! if boot_count == 1 {
//!     log.reset();
//! }
//! ```
//!
//! On a host, [`FileRegion`] plays the same role with a file standing in for
//! the retained RAM.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// Byte range a ring buffer can live in
///
/// Implementors hand out the same bytes on every call; the buffer relies on
/// the length never changing while it is bound.
pub trait Region {
    /// Region contents
    fn bytes(&self) -> &[u8];

    /// Mutable region contents
    fn bytes_mut(&mut self) -> &mut [u8];

    /// Region length in bytes
    fn len(&self) -> usize {
        self.bytes().len()
    }

    /// True for a zero-length region
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Region for [u8] {
    fn bytes(&self) -> &[u8] {
        self
    }

    fn bytes_mut(&mut self) -> &mut [u8] {
        self
    }
}

impl<const N: usize> Region for [u8; N] {
    fn bytes(&self) -> &[u8] {
        self
    }

    fn bytes_mut(&mut self) -> &mut [u8] {
        self
    }
}

impl<R: Region + ?Sized> Region for &mut R {
    fn bytes(&self) -> &[u8] {
        (**self).bytes()
    }

    fn bytes_mut(&mut self) -> &mut [u8] {
        (**self).bytes_mut()
    }
}

#[cfg(feature = "alloc")]
impl Region for Vec<u8> {
    fn bytes(&self) -> &[u8] {
        self
    }

    fn bytes_mut(&mut self) -> &mut [u8] {
        self
    }
}

/// Fixed-size region suitable for a `static`
///
/// `new()` is `const`, so the region can be placed in a linker section that
/// the startup code does not zero (RTC memory, `.noinit`, `.uninit`).
/// Whatever the hardware left there is what the first buffer sees.
#[derive(Clone)]
#[repr(transparent)]
pub struct RetainedRegion<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> RetainedRegion<N> {
    /// Zero-filled region
    pub const fn new() -> Self {
        Self { bytes: [0; N] }
    }

    /// Region with every byte set to `byte`
    ///
    /// Handy for simulating uninitialised memory in tests.
    pub const fn filled(byte: u8) -> Self {
        Self { bytes: [byte; N] }
    }

    /// Region holding a copy of a previously captured image
    pub const fn from_bytes(bytes: [u8; N]) -> Self {
        Self { bytes }
    }

    /// Copy of the current contents
    pub const fn to_bytes(&self) -> [u8; N] {
        self.bytes
    }
}

impl<const N: usize> Default for RetainedRegion<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Region for RetainedRegion<N> {
    fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

#[cfg(feature = "std")]
pub use file::FileRegion;

#[cfg(feature = "std")]
mod file {
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use super::Region;
    use crate::errors::{RegionError, RegionResult};

    /// Host-side region backed by an image file
    ///
    /// Stands in for retained RAM when running the same code on a desktop:
    /// the image is read once on `open` and written back on `flush`, which is
    /// the host equivalent of entering deep sleep.
    ///
    /// ```rust,no_run
    /// use retained_ring_core::{FileRegion, RingBuffer};
    ///
    /// let region = FileRegion::open("ring.img", 2000)?;
    /// let fresh = region.is_fresh();
    /// let mut buffer: RingBuffer<u32, _> = RingBuffer::new(region);
    /// if fresh {
    ///     buffer.reset();
    /// }
    /// buffer.push(42);
    /// buffer.region().flush()?;
    /// # Ok::<(), retained_ring_core::RegionError>(())
    /// ```
    #[derive(Debug)]
    pub struct FileRegion {
        path: PathBuf,
        bytes: Vec<u8>,
        fresh: bool,
    }

    impl FileRegion {
        /// Load the image at `path`, or start from zeroed memory if the file
        /// does not exist yet.
        ///
        /// An existing image must be exactly `len` bytes.
        pub fn open(path: impl AsRef<Path>, len: usize) -> RegionResult<Self> {
            let path = path.as_ref().to_path_buf();
            match fs::read(&path) {
                Ok(bytes) if bytes.len() == len => {
                    log_debug!("Loaded {} byte region image from {}", len, path.display());
                    Ok(Self { path, bytes, fresh: false })
                }
                Ok(bytes) => Err(RegionError::LengthMismatch {
                    expected: len,
                    actual: bytes.len(),
                }),
                Err(err) if err.kind() == ErrorKind::NotFound => {
                    log_debug!("No region image at {}, starting zeroed", path.display());
                    Ok(Self { path, bytes: vec![0; len], fresh: true })
                }
                Err(err) => Err(err.into()),
            }
        }

        /// True when no image existed and the bytes were zero-filled
        pub fn is_fresh(&self) -> bool {
            self.fresh
        }

        /// Image location
        pub fn path(&self) -> &Path {
            &self.path
        }

        /// Write the current contents back to the image file
        pub fn flush(&self) -> RegionResult<()> {
            fs::write(&self.path, &self.bytes)?;
            Ok(())
        }
    }

    impl Region for FileRegion {
        fn bytes(&self) -> &[u8] {
            &self.bytes
        }

        fn bytes_mut(&mut self) -> &mut [u8] {
            &mut self.bytes
        }
    }
}
