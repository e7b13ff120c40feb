//! Simulation statistics collection and reporting.
//!
//! This module tracks the outcome counters for a run. It provides:
//! 1. **Counters:** Total translations, TLB hits, and page faults.
//! 2. **Derived Metrics:** Page-table hits, hit rate, and fault rate as
//!    fractions of all addresses translated.
//! 3. **Reporting:** A summary block printed at the end of a run (or at the
//!    point of a fatal error, covering what completed).

use std::time::Instant;

use crate::common::data::TranslationPath;

/// Statistics for one simulation run.
///
/// Counters are updated once per completed translation; the three paths
/// partition the total, so page-table hits are derived rather than stored.
#[derive(Clone, Debug)]
pub struct TranslationStats {
    start_time: Instant,
    /// Total addresses translated.
    pub translations: u64,
    /// Translations resolved by the TLB.
    pub tlb_hits: u64,
    /// Translations that required a backing-store fetch.
    pub page_faults: u64,
}

impl Default for TranslationStats {
    /// Returns the default value.
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            translations: 0,
            tlb_hits: 0,
            page_faults: 0,
        }
    }
}

impl TranslationStats {
    /// Records one completed translation.
    ///
    /// # Arguments
    ///
    /// * `path` - The stage that resolved the translation's frame.
    pub fn record(&mut self, path: TranslationPath) {
        self.translations += 1;
        match path {
            TranslationPath::TlbHit => self.tlb_hits += 1,
            TranslationPath::PageFault => self.page_faults += 1,
            TranslationPath::PageTableHit => {}
        }
    }

    /// Returns the number of translations resolved by the page table alone.
    pub fn page_table_hits(&self) -> u64 {
        self.translations - self.tlb_hits - self.page_faults
    }

    /// Returns the TLB hit rate as a fraction of all translations.
    ///
    /// Zero when nothing has been translated yet.
    pub fn tlb_hit_rate(&self) -> f64 {
        self.tlb_hits as f64 / self.translations.max(1) as f64
    }

    /// Returns the page fault rate as a fraction of all translations.
    ///
    /// Zero when nothing has been translated yet.
    pub fn page_fault_rate(&self) -> f64 {
        self.page_faults as f64 / self.translations.max(1) as f64
    }

    /// Prints the summary block to stdout.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let rate = (self.translations as f64 / seconds) / 1_000_000.0;
        println!("\n==========================================================");
        println!("VIRTUAL MEMORY SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {:.4} s", seconds);
        println!("sim_addresses            {}", self.translations);
        println!("sim_rate                 {:.2} Maddr/s", rate);
        println!("tlb_hits                 {}", self.tlb_hits);
        println!("tlb_hit_rate             {:.4}", self.tlb_hit_rate());
        println!("page_table_hits          {}", self.page_table_hits());
        println!("page_faults              {}", self.page_faults);
        println!("page_fault_rate          {:.4}", self.page_fault_rate());
        println!("==========================================================");
    }
}
