//! Virtual and Physical Address types.
//!
//! This module defines strong types for the two address spaces to prevent
//! accidental mixing between them. It provides the following:
//! 1. **Type Safety:** Distinguishes logical (pre-translation) from physical
//!    (post-translation) addresses at compile time.
//! 2. **Field Extraction:** Page-number and page-offset decomposition of
//!    logical addresses.
//! 3. **Address Packing:** Construction of physical addresses from a frame
//!    number and an offset.

use super::constants::{PAGE_NUMBER_MASK, PAGE_OFFSET_MASK, PAGE_SHIFT};

/// A logical (virtual) address as issued by the simulated process.
///
/// The full 32-bit value is retained for reporting, but only the low 16 bits
/// are meaningful for translation: bits `[8:15]` are the page number and bits
/// `[0:7]` are the page offset. Higher bits are ignored by the extraction
/// methods.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct VirtAddr(pub u32);

/// A physical address in simulated memory.
///
/// Physical addresses identify a byte within an allocated frame and only
/// exist after translation has completed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct PhysAddr(pub u32);

impl VirtAddr {
    /// Creates a new virtual address from a raw 32-bit value.
    ///
    /// # Arguments
    ///
    /// * `addr` - The raw 32-bit address value.
    ///
    /// # Returns
    ///
    /// A new `VirtAddr` instance wrapping the provided address.
    #[inline(always)]
    pub fn new(addr: u32) -> Self {
        Self(addr)
    }

    /// Returns the raw 32-bit address value.
    #[inline(always)]
    pub fn val(&self) -> u32 {
        self.0
    }

    /// Extracts the page number from the virtual address.
    ///
    /// The page number is bits `[8:15]` of the address; bits above 15 are
    /// masked away.
    ///
    /// # Returns
    ///
    /// The page number in `0..=255`.
    pub fn page_number(&self) -> u32 {
        (self.0 >> PAGE_SHIFT) & PAGE_NUMBER_MASK
    }

    /// Extracts the page offset from the virtual address.
    ///
    /// The page offset is the lower 8 bits of the address, representing the
    /// byte offset within a 256-byte page.
    ///
    /// # Returns
    ///
    /// The page offset in `0..=255`.
    pub fn page_offset(&self) -> u32 {
        self.0 & PAGE_OFFSET_MASK
    }
}

impl PhysAddr {
    /// Creates a new physical address from a raw 32-bit value.
    ///
    /// # Arguments
    ///
    /// * `addr` - The raw 32-bit address value.
    ///
    /// # Returns
    ///
    /// A new `PhysAddr` instance wrapping the provided address.
    #[inline(always)]
    pub fn new(addr: u32) -> Self {
        Self(addr)
    }

    /// Packs a frame number and a page offset into a physical address.
    ///
    /// # Arguments
    ///
    /// * `frame` - The physical frame number.
    /// * `offset` - The byte offset within the frame (masked to 8 bits).
    ///
    /// # Returns
    ///
    /// The physical address `(frame << 8) | offset`.
    pub fn from_parts(frame: u32, offset: u32) -> Self {
        Self((frame << PAGE_SHIFT) | (offset & PAGE_OFFSET_MASK))
    }

    /// Returns the raw 32-bit address value.
    #[inline(always)]
    pub fn val(&self) -> u32 {
        self.0
    }

    /// Returns the frame number portion of the address.
    pub fn frame_number(&self) -> u32 {
        self.0 >> PAGE_SHIFT
    }

    /// Returns the byte offset within the frame.
    pub fn page_offset(&self) -> u32 {
        self.0 & PAGE_OFFSET_MASK
    }
}
