//! Demand-paged virtual memory simulator library.
//!
//! This crate models the address-translation path of a demand-paged virtual
//! memory manager with the following:
//! 1. **Addressing:** 32-bit logical addresses with a 16-bit meaningful span
//!    split into an 8-bit page number and an 8-bit offset.
//! 2. **Translation:** TLB lookup, then page table lookup, then page-fault
//!    servicing from a backing store on a full miss.
//! 3. **Replacement:** Recency-counter LRU approximation in the TLB; frames
//!    and page-table entries are never reclaimed.
//! 4. **Simulation:** Trace-driven run loop, JSON-configurable geometry, and
//!    statistics collection.

/// Common types and constants (addresses, translation records, errors).
pub mod common;
/// Simulator configuration (defaults and hierarchical config structures).
pub mod config;
/// Simulated physical memory (frames and the allocation cursor).
pub mod mem;
/// Memory management unit (TLB, page table, translation path).
pub mod mmu;
/// Simulation plumbing (trace reader, top-level simulator).
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;
/// Backing page storage (trait seam and file-backed store).
pub mod store;

/// Strong address types; construct with `VirtAddr::new` / `PhysAddr::from_parts`.
pub use crate::common::addr::{PhysAddr, VirtAddr};
/// Per-translation result record and the stage that resolved it.
pub use crate::common::data::{Translation, TranslationPath};
/// Crate-wide error type.
pub use crate::common::error::VmError;
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Top-level simulator; construct with `Simulator::new`.
pub use crate::sim::{Simulator, TraceReader};
/// Backing storage seam and the file-backed implementation.
pub use crate::store::{BackingStore, PageStore};
