//! Translation result types.
//!
//! This module defines the record produced by a completed address translation.
//! These types are used for the following:
//! 1. **Reporting:** The per-address output line carries the original virtual
//!    address, the resolved physical address, and the byte value.
//! 2. **Statistics Tracking:** The resolving stage feeds the hit/fault counters.

use super::addr::{PhysAddr, VirtAddr};

/// The lookup stage that resolved a translation's frame number.
///
/// Every translation resolves through exactly one of these paths; the
/// statistics counters are keyed on this classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TranslationPath {
    /// The page's mapping was found in the TLB.
    TlbHit,

    /// The TLB missed but the page was resident in the page table.
    PageTableHit,

    /// Neither the TLB nor the page table held the mapping: a page fault.
    ///
    /// The page was fetched from the backing store into a newly allocated
    /// frame before the translation completed.
    PageFault,
}

/// Result of a completed virtual-to-physical address translation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Translation {
    /// The original virtual address, unmasked.
    pub vaddr: VirtAddr,
    /// The resolved physical address (`frame << 8 | offset`).
    pub paddr: PhysAddr,
    /// The signed byte stored at the physical address.
    pub value: i8,
    /// Which lookup stage resolved the frame number.
    pub path: TranslationPath,
}
