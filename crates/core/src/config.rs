//! Configuration system for the virtual memory simulator.
//!
//! This module defines the configuration structures used to parameterize the
//! simulator. It provides:
//! 1. **Defaults:** The canonical geometry (256 frames, 256 page-table
//!    entries, 16 TLB slots).
//! 2. **Structures:** Hierarchical config for physical memory, the page
//!    table, and the TLB.
//! 3. **Loading:** JSON deserialization from a string or a file.
//!
//! Only capacities are configurable. The address bit layout, and with it the
//! 256-byte page and frame size, is fixed by [`crate::common::constants`].

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::VmError;

/// Default configuration constants for the simulator.
///
/// These values define the canonical geometry when not explicitly overridden
/// in a JSON configuration file.
mod defaults {
    /// Number of frames in simulated physical memory.
    ///
    /// With 256-byte frames this gives a 64 KiB physical memory, enough to
    /// hold every page a 16-bit logical address can name.
    pub const FRAME_COUNT: usize = 256;

    /// Number of entries the page table can hold.
    ///
    /// An 8-bit page number can name 256 distinct pages, so the default
    /// table can map the entire logical address space.
    pub const PAGE_TABLE_ENTRIES: usize = 256;

    /// Number of slots in the translation lookaside buffer.
    pub const TLB_ENTRIES: usize = 16;
}

/// Root configuration structure containing all simulator settings.
///
/// Every section and every field is optional in the JSON representation;
/// omitted values fall back to the canonical geometry.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use vmsim_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.memory.frame_count, 256);
/// assert_eq!(config.page_table.entries, 256);
/// assert_eq!(config.tlb.entries, 16);
/// ```
///
/// Deserializing a partial override from JSON:
///
/// ```
/// use vmsim_core::config::Config;
///
/// let json = r#"{
///     "memory": { "frame_count": 128 },
///     "tlb": { "entries": 8 }
/// }"#;
///
/// let config = Config::from_json_str(json).unwrap();
/// assert_eq!(config.memory.frame_count, 128);
/// assert_eq!(config.page_table.entries, 256);
/// assert_eq!(config.tlb.entries, 8);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Physical memory configuration
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Page table configuration
    #[serde(default)]
    pub page_table: PageTableConfig,
    /// TLB configuration
    #[serde(default)]
    pub tlb: TlbConfig,
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// # Arguments
    ///
    /// * `json` - JSON text; sections and fields may be omitted.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::Config`] if the text is not valid JSON or contains
    /// fields of the wrong type.
    pub fn from_json_str(json: &str) -> Result<Self, VmError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a configuration from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::Io`] if the file cannot be read and
    /// [`VmError::Config`] if its contents do not parse.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, VmError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            memory: MemoryConfig::default(),
            page_table: PageTableConfig::default(),
            tlb: TlbConfig::default(),
        }
    }
}

/// Physical memory configuration.
///
/// Controls how many frames the simulated physical memory holds. Frames are
/// allocated monotonically and never reclaimed, so this is also the maximum
/// number of page faults a run can service.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Number of physical frames
    #[serde(default = "MemoryConfig::default_frame_count")]
    pub frame_count: usize,
}

impl MemoryConfig {
    /// Returns the default frame count.
    fn default_frame_count() -> usize {
        defaults::FRAME_COUNT
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            frame_count: defaults::FRAME_COUNT,
        }
    }
}

/// Page table configuration.
///
/// Controls how many resident pages the table can record. Entries are never
/// evicted, so this caps the number of distinct pages a run can touch.
#[derive(Debug, Clone, Deserialize)]
pub struct PageTableConfig {
    /// Number of page table entries
    #[serde(default = "PageTableConfig::default_entries")]
    pub entries: usize,
}

impl PageTableConfig {
    /// Returns the default page table capacity.
    fn default_entries() -> usize {
        defaults::PAGE_TABLE_ENTRIES
    }
}

impl Default for PageTableConfig {
    fn default() -> Self {
        Self {
            entries: defaults::PAGE_TABLE_ENTRIES,
        }
    }
}

/// Translation lookaside buffer configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TlbConfig {
    /// Number of TLB slots
    #[serde(default = "TlbConfig::default_entries")]
    pub entries: usize,
}

impl TlbConfig {
    /// Returns the default TLB slot count.
    fn default_entries() -> usize {
        defaults::TLB_ENTRIES
    }
}

impl Default for TlbConfig {
    fn default() -> Self {
        Self {
            entries: defaults::TLB_ENTRIES,
        }
    }
}
