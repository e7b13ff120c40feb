//! Backing page storage.
//!
//! This module provides the source of page contents for fault servicing. It
//! includes:
//! 1. **PageStore:** The trait seam between the translation path and the
//!    storage medium.
//! 2. **BackingStore:** The file-backed implementation used by real runs.
//!
//! The store is read-only from the simulator's point of view; there is no
//! write-back path.

/// File-backed page store implementation.
pub mod backing;

use crate::common::error::VmError;

pub use backing::BackingStore;

/// Trait for page stores that supply page contents during fault servicing.
pub trait PageStore: Send + Sync {
    /// Reads one page's bytes into `dest`.
    ///
    /// `dest` is a whole frame, so implementations must fill exactly
    /// `dest.len()` bytes starting at the page's position in the store.
    ///
    /// # Arguments
    ///
    /// * `page` - The page number whose block to read.
    /// * `dest` - Destination buffer, one frame in size.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::BackingStore`] if the block cannot be read in full.
    fn read_page(&mut self, page: u32, dest: &mut [u8]) -> Result<(), VmError>;
}
