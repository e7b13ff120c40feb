//! Page table: the system of record for resident pages.
//!
//! The table is append-only. An entry is created the first time a page
//! faults in and is never evicted or overwritten, so a page's frame
//! assignment is stable for the remainder of the run and the entry count
//! equals the number of distinct pages faulted so far.

use crate::common::error::VmError;

/// A single page table entry mapping a page to its resident frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageTableEntry {
    /// The page number.
    pub page: u32,
    /// The frame holding the page's data.
    pub frame: u32,
}

/// Fixed-capacity mapping from page number to frame number.
#[derive(Clone, Debug)]
pub struct PageTable {
    entries: Vec<PageTableEntry>,
    capacity: usize,
}

impl PageTable {
    /// Creates an empty page table with the given capacity.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of resident pages the table can record.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Looks up the frame holding `page`, if the page is resident.
    ///
    /// # Arguments
    ///
    /// * `page` - The page number to look up.
    ///
    /// # Returns
    ///
    /// `Some(frame)` if an entry for the page exists, otherwise `None`.
    pub fn lookup(&self, page: u32) -> Option<u32> {
        self.entries.iter().find(|e| e.page == page).map(|e| e.frame)
    }

    /// Records that `page` is now resident in `frame`.
    ///
    /// Callers only insert after a full miss, so at most one entry ever
    /// exists per page.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::PageTableFull`] if the table is at capacity.
    /// Entries are never evicted, so this ends the run.
    pub fn insert(&mut self, page: u32, frame: u32) -> Result<(), VmError> {
        debug_assert!(self.lookup(page).is_none(), "page {page} inserted twice");
        if self.entries.len() == self.capacity {
            return Err(VmError::PageTableFull(self.capacity));
        }
        self.entries.push(PageTableEntry { page, frame });
        Ok(())
    }

    /// Returns the number of resident pages.
    ///
    /// Since entries are append-only, this equals the number of page faults
    /// serviced so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no page has faulted in yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the table capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the resident entries in insertion (fault) order.
    pub fn entries(&self) -> &[PageTableEntry] {
        &self.entries
    }
}
