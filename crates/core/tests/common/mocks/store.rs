use std::io;
use std::sync::{Arc, Mutex};

use vmsim_core::VmError;
use vmsim_core::store::PageStore;

/// In-memory page store with a deterministic byte pattern.
///
/// Byte `o` of page `p` is `(p + o) mod 256`, so any test can predict the
/// value a translation should produce without carrying fixture data around.
/// Every serviced fetch is recorded; tests keep a handle to the record to
/// assert that each page is fetched exactly once.
pub struct MemStore {
    pages: usize,
    reads: Arc<Mutex<Vec<u32>>>,
}

impl MemStore {
    /// Creates a store holding `pages` readable pages.
    ///
    /// Reads beyond that count fail the way a too-short file would.
    pub fn new(pages: usize) -> Self {
        Self {
            pages,
            reads: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns a handle to the fetch record, for assertions after the store
    /// has been boxed into a simulator.
    pub fn reads_handle(&self) -> Arc<Mutex<Vec<u32>>> {
        Arc::clone(&self.reads)
    }

    /// The raw byte this store holds at `(page, offset)`.
    pub fn raw(page: u32, offset: u32) -> u8 {
        (page.wrapping_add(offset) & 0xFF) as u8
    }

    /// The signed value a translation of `(page, offset)` should produce.
    pub fn value(page: u32, offset: u32) -> i8 {
        Self::raw(page, offset) as i8
    }
}

impl PageStore for MemStore {
    fn read_page(&mut self, page: u32, dest: &mut [u8]) -> Result<(), VmError> {
        if page as usize >= self.pages {
            return Err(VmError::BackingStore {
                page,
                source: io::Error::new(io::ErrorKind::UnexpectedEof, "page beyond store end"),
            });
        }
        self.reads.lock().unwrap().push(page);
        for (i, byte) in dest.iter_mut().enumerate() {
            *byte = Self::raw(page, i as u32);
        }
        Ok(())
    }
}
