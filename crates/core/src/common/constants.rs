//! Global address-layout constants.
//!
//! This module defines the fixed bit layout of logical addresses and the
//! geometry that layout pins down. It includes:
//! 1. **Address Constants:** Meaningful bit count and mask for logical addresses.
//! 2. **Page Constants:** Page size, shift, and field-extraction masks.
//! 3. **Frame Constants:** Frame size (one frame holds exactly one page).
//!
//! Capacities (frame count, page-table entries, TLB slots) are configurable and
//! live in [`crate::config`]; the values here are structural and cannot change
//! without changing the address format itself.

/// Number of meaningful low bits in a logical address.
///
/// Addresses are carried as 32-bit values but only the low 16 bits
/// participate in translation; the rest are masked away.
pub const ADDR_BITS: u32 = 16;

/// Mask selecting the meaningful bits of a logical address.
pub const ADDR_MASK: u32 = (1 << ADDR_BITS) - 1;

/// Number of bits to shift to convert between bytes and pages.
pub const PAGE_SHIFT: u32 = 8;

/// Page size in bytes.
pub const PAGE_SIZE: usize = 1 << PAGE_SHIFT;

/// Mask for extracting the page offset from an address.
pub const PAGE_OFFSET_MASK: u32 = (PAGE_SIZE as u32) - 1;

/// Mask for extracting the page number after shifting right by [`PAGE_SHIFT`].
pub const PAGE_NUMBER_MASK: u32 = ADDR_MASK >> PAGE_SHIFT;

/// Frame size in bytes.
///
/// A frame holds exactly one page, so this always equals [`PAGE_SIZE`].
pub const FRAME_SIZE: usize = PAGE_SIZE;
