//! Simulation error definitions.
//!
//! This module defines the error type shared across the simulator. It covers:
//! 1. **Capacity Exhaustion:** Physical memory or page table full; both are
//!    hard limits with no reclamation, so exceeding them ends the run.
//! 2. **Backing Store Failures:** I/O errors while fetching a page.
//! 3. **Setup Failures:** Unreadable input files and malformed configuration.
//!
//! Page faults are ordinary events on the translation path, not errors, and
//! do not appear here.

use std::io;

use thiserror::Error;

/// Errors produced by the virtual memory simulator.
#[derive(Debug, Error)]
pub enum VmError {
    /// Physical memory is exhausted.
    ///
    /// Frames are allocated monotonically and never reclaimed, so once every
    /// frame has been handed out the next page fault cannot be serviced.
    #[error("out of physical memory: all {0} frames are in use")]
    OutOfFrames(usize),

    /// The page table is full.
    ///
    /// Entries are never evicted, so once the table holds an entry for its
    /// capacity in distinct pages the next fault cannot be recorded.
    #[error("page table full: all {0} entries are in use")]
    PageTableFull(usize),

    /// A page could not be read from the backing store.
    #[error("backing store read failed for page {page}: {source}")]
    BackingStore {
        /// The page whose fetch failed.
        page: u32,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// An input file could not be opened or read.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
