//! Memory Management Unit (MMU).
//!
//! This module implements the translation path from logical address to frame
//! and byte value. A translation consults the TLB, then the page table, and
//! on a full miss services a page fault by allocating a frame and fetching
//! the page from the backing store. The TLB is updated after every
//! translation regardless of which stage resolved the frame.

/// Page table: the append-only resident set.
pub mod page_table;

/// Translation Lookaside Buffer for caching page-to-frame mappings.
pub mod tlb;

use tracing::debug;

use crate::common::addr::{PhysAddr, VirtAddr};
use crate::common::data::{Translation, TranslationPath};
use crate::common::error::VmError;
use crate::mem::PhysicalMemory;
use crate::store::PageStore;

use self::page_table::PageTable;
use self::tlb::Tlb;

/// Memory Management Unit for virtual-to-physical address translation.
///
/// Owns the lookup structures (TLB and page table); physical memory and the
/// backing store are passed in per translation. Invariant: every mapping in
/// the TLB is also in the page table with the same frame, because the TLB is
/// only filled from completed translations.
#[derive(Debug)]
pub struct Mmu {
    /// Fast-path cache of recent page-to-frame mappings.
    pub tlb: Tlb,
    /// System of record for resident pages.
    pub page_table: PageTable,
}

impl Mmu {
    /// Creates a new MMU with the given lookup-structure capacities.
    ///
    /// # Arguments
    ///
    /// * `tlb_slots` - Number of TLB entries.
    /// * `page_table_entries` - Page table capacity.
    ///
    /// # Returns
    ///
    /// A new `Mmu` instance with empty lookup structures.
    pub fn new(tlb_slots: usize, page_table_entries: usize) -> Self {
        Self {
            tlb: Tlb::new(tlb_slots),
            page_table: PageTable::new(page_table_entries),
        }
    }

    /// Translates a logical address to a physical address and byte value.
    ///
    /// The address is decomposed into page number and offset; the frame is
    /// resolved through the TLB, the page table, or fault servicing, in that
    /// order. The TLB's recency state is then updated once for the access,
    /// and the byte at the resolved location is read.
    ///
    /// # Arguments
    ///
    /// * `vaddr` - Logical address to translate.
    /// * `memory` - Physical memory holding resident page data.
    /// * `store` - Backing store consulted on a page fault.
    ///
    /// # Returns
    ///
    /// A [`Translation`] carrying the physical address, the signed byte at
    /// that address, and the stage that resolved the frame.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::OutOfFrames`] or [`VmError::PageTableFull`] when a
    /// fault exceeds a capacity limit, and [`VmError::BackingStore`] when the
    /// page fetch fails.
    pub fn translate(
        &mut self,
        vaddr: VirtAddr,
        memory: &mut PhysicalMemory,
        store: &mut dyn PageStore,
    ) -> Result<Translation, VmError> {
        let page = vaddr.page_number();
        let offset = vaddr.page_offset();

        let (frame, path) = if let Some(frame) = self.tlb.lookup(page) {
            (frame, TranslationPath::TlbHit)
        } else if let Some(frame) = self.page_table.lookup(page) {
            (frame, TranslationPath::PageTableHit)
        } else {
            let frame = self.fault_in(page, memory, store)?;
            (frame, TranslationPath::PageFault)
        };

        self.tlb.note_access(page, frame);

        Ok(Translation {
            vaddr,
            paddr: PhysAddr::from_parts(frame, offset),
            value: memory.read(frame, offset),
            path,
        })
    }

    /// Services a page fault: allocates the next frame, fetches the page's
    /// block from the backing store into it, and records the mapping.
    fn fault_in(
        &mut self,
        page: u32,
        memory: &mut PhysicalMemory,
        store: &mut dyn PageStore,
    ) -> Result<u32, VmError> {
        let frame = memory.allocate()?;
        store.read_page(page, memory.frame_mut(frame).data_mut())?;
        self.page_table.insert(page, frame)?;
        debug!(page, frame, "page fault");
        Ok(frame)
    }
}
