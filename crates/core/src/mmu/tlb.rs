//! Translation Lookaside Buffer (TLB).
//!
//! A small, fully associative cache of page-to-frame mappings with an
//! LRU-style replacement policy driven by per-entry recency counters. An
//! entry's counter is reset to zero when its page is translated and
//! incremented on every translation that resolves to a different page, so
//! the occupied slot with the largest counter is the least recently used.
//!
//! Slots are unordered: position in the buffer carries no meaning beyond
//! breaking recency ties (the lowest index among the oldest entries is
//! evicted first).

use tracing::trace;

/// A single TLB slot's contents.
#[derive(Clone, Copy, Debug)]
struct TlbEntry {
    /// Page number (tag).
    page: u32,
    /// Frame number (data).
    frame: u32,
    /// Translations since this entry was last the hit. Zero means "just
    /// accessed".
    recency: u64,
}

/// Translation Lookaside Buffer structure.
#[derive(Clone, Debug)]
pub struct Tlb {
    /// Fixed array of slots; `None` marks a slot that has never been filled.
    entries: Vec<Option<TlbEntry>>,
}

impl Tlb {
    /// Creates a new TLB with the specified number of slots.
    ///
    /// # Arguments
    ///
    /// * `slots` - Number of entries the buffer holds.
    pub fn new(slots: usize) -> Self {
        Self {
            entries: vec![None; slots],
        }
    }

    /// Looks up a page number in the TLB.
    ///
    /// Lookup does not mutate any recency state; counters change only in
    /// [`Tlb::note_access`] once the translation's frame is known.
    ///
    /// # Arguments
    ///
    /// * `page` - The page number to look up.
    ///
    /// # Returns
    ///
    /// `Some(frame)` if a slot holds the page, otherwise `None`.
    pub fn lookup(&self, page: u32) -> Option<u32> {
        self.entries
            .iter()
            .flatten()
            .find(|e| e.page == page)
            .map(|e| e.frame)
    }

    /// Records one completed translation of `page`, resolved to `frame`.
    ///
    /// Called exactly once per translated address regardless of which stage
    /// resolved the frame. In a single pass, the slot holding `page` (if any)
    /// is reset to recency zero while every other occupied slot ages by one.
    /// If no slot held the page, the mapping is installed: into the first
    /// never-filled slot while any remain, otherwise over the entry with the
    /// largest recency (ties broken toward the lowest index).
    ///
    /// # Arguments
    ///
    /// * `page` - The translated page number.
    /// * `frame` - The frame the translation resolved to.
    pub fn note_access(&mut self, page: u32, frame: u32) {
        let mut hit = false;
        for entry in self.entries.iter_mut().flatten() {
            if entry.page == page {
                entry.recency = 0;
                hit = true;
            } else {
                entry.recency += 1;
            }
        }
        if !hit {
            self.install(page, frame);
        }
    }

    /// Returns the number of slots in the buffer.
    pub fn slot_count(&self) -> usize {
        self.entries.len()
    }

    /// Installs a fresh mapping, evicting the least recently used entry if
    /// every slot is occupied.
    fn install(&mut self, page: u32, frame: u32) {
        if self.entries.is_empty() {
            // Zero-slot TLB: translation still works, nothing is cached.
            return;
        }
        let entry = TlbEntry {
            page,
            frame,
            recency: 0,
        };

        if let Some(slot) = self.entries.iter_mut().find(|s| s.is_none()) {
            trace!(page, frame, "tlb fill");
            *slot = Some(entry);
            return;
        }

        let victim = self.victim_index();
        if let Some(old) = self.entries[victim] {
            trace!(page, frame, evicted = old.page, slot = victim, "tlb evict");
        }
        self.entries[victim] = Some(entry);
    }

    /// Returns the index of the occupied slot with the largest recency.
    ///
    /// The strict comparison keeps the first maximum seen, so ties break
    /// toward the lowest index.
    fn victim_index(&self) -> usize {
        let mut victim = 0;
        let mut oldest = 0;
        for (idx, entry) in self.entries.iter().enumerate() {
            if let Some(e) = entry {
                if e.recency > oldest {
                    oldest = e.recency;
                    victim = idx;
                }
            }
        }
        victim
    }
}
