//! Simulator: owns the MMU, physical memory, backing store, and statistics.
//!
//! The simulator is the top-level value a run drives. Each call to
//! [`Simulator::translate`] fully resolves one address before the next is
//! read; there is no pipelining or concurrency in the model.

use tracing::debug;

use crate::common::addr::VirtAddr;
use crate::common::data::Translation;
use crate::common::error::VmError;
use crate::config::Config;
use crate::mem::PhysicalMemory;
use crate::mmu::Mmu;
use crate::stats::TranslationStats;
use crate::store::PageStore;

/// Top-level simulator state.
///
/// # Examples
///
/// ```no_run
/// use vmsim_core::config::Config;
/// use vmsim_core::sim::{Simulator, TraceReader};
/// use vmsim_core::store::BackingStore;
///
/// # fn main() -> Result<(), vmsim_core::VmError> {
/// let config = Config::default();
/// let store = BackingStore::open("BACKING_STORE.bin", config.page_table.entries)?;
/// let mut sim = Simulator::new(&config, Box::new(store));
///
/// for addr in TraceReader::open("addresses.txt")? {
///     let t = sim.translate(addr?)?;
///     println!(
///         "Virtual address: {} Physical address: {} Value: {}",
///         t.vaddr.val(),
///         t.paddr.val(),
///         t.value
///     );
/// }
/// sim.stats.print();
/// # Ok(())
/// # }
/// ```
pub struct Simulator {
    /// Translation structures (TLB and page table).
    pub mmu: Mmu,
    /// Frame storage and the allocation cursor.
    pub memory: PhysicalMemory,
    /// Run statistics, updated once per translation.
    pub stats: TranslationStats,
    store: Box<dyn PageStore>,
}

impl Simulator {
    /// Creates a new simulator with the given configuration and page store.
    ///
    /// # Arguments
    ///
    /// * `config` - Geometry for memory, page table, and TLB.
    /// * `store` - Source of page contents for fault servicing.
    pub fn new(config: &Config, store: Box<dyn PageStore>) -> Self {
        debug!(
            frames = config.memory.frame_count,
            page_table_entries = config.page_table.entries,
            tlb_slots = config.tlb.entries,
            "simulator created"
        );
        Self {
            mmu: Mmu::new(config.tlb.entries, config.page_table.entries),
            memory: PhysicalMemory::new(config.memory.frame_count),
            stats: TranslationStats::default(),
            store,
        }
    }

    /// Translates one logical address and records it in the statistics.
    ///
    /// # Arguments
    ///
    /// * `vaddr` - Logical address to translate.
    ///
    /// # Errors
    ///
    /// Propagates any capacity or backing-store error from the translation
    /// path; a failed translation is not counted in the statistics.
    pub fn translate(&mut self, vaddr: VirtAddr) -> Result<Translation, VmError> {
        let translation = self.mmu.translate(vaddr, &mut self.memory, self.store.as_mut())?;
        self.stats.record(translation.path);
        Ok(translation)
    }
}
