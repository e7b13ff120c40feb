//! File-backed page store.
//!
//! The backing store is a raw binary file partitioned into 256-byte blocks:
//! page `p` occupies byte offsets `p * 256` up to but not including
//! `(p + 1) * 256`. Blocks are fetched with a seek plus an exact-length read;
//! nothing is cached here, since every page is fetched at most once per run.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

use tracing::warn;

use crate::common::constants::FRAME_SIZE;
use crate::common::error::VmError;

use super::PageStore;

/// A page store reading blocks from a binary file on disk.
#[derive(Debug)]
pub struct BackingStore {
    file: File,
    page_count: usize,
}

impl BackingStore {
    /// Opens a backing store file.
    ///
    /// A store holding fewer pages than the page table can reference is
    /// accepted with a logged warning; reading a page beyond its end fails
    /// at fault time instead.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the store file.
    /// * `referenced_pages` - How many distinct pages the run may fault in
    ///   (the page-table capacity).
    ///
    /// # Errors
    ///
    /// Returns [`VmError::Io`] if the file cannot be opened or its length
    /// cannot be read.
    pub fn open(path: impl AsRef<Path>, referenced_pages: usize) -> Result<Self, VmError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let len = file.metadata()?.len();
        let page_count = (len / FRAME_SIZE as u64) as usize;

        if page_count < referenced_pages {
            warn!(
                store = %path.display(),
                pages = page_count,
                referenced = referenced_pages,
                "backing store holds fewer pages than the page table can reference"
            );
        }

        Ok(Self { file, page_count })
    }

    /// Returns the number of whole pages the store file holds.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    fn read_at(&mut self, offset: u64, dest: &mut [u8]) -> io::Result<()> {
        self.file.seek(SeekFrom::Start(offset))?;
        self.file.read_exact(dest)
    }
}

impl PageStore for BackingStore {
    fn read_page(&mut self, page: u32, dest: &mut [u8]) -> Result<(), VmError> {
        let offset = u64::from(page) * FRAME_SIZE as u64;
        self.read_at(offset, dest)
            .map_err(|source| VmError::BackingStore { page, source })
    }
}
