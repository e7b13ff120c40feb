//! Shared fixtures for the simulator test suite.


use vmsim_core::config::{Config, MemoryConfig, PageTableConfig, TlbConfig};

/// Builds a configuration with explicit capacities.
///
/// Small geometries make capacity edges reachable without large fixtures.
pub fn geometry(frames: usize, page_table_entries: usize, tlb_slots: usize) -> Config {
    Config {
        memory: MemoryConfig {
            frame_count: frames,
        },
        page_table: PageTableConfig {
            entries: page_table_entries,
        },
        tlb: TlbConfig { entries: tlb_slots },
    }
}

/// Installs a test-captured `tracing` subscriber honoring `RUST_LOG`.
///
/// Safe to call from every test; repeat installations are ignored.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}
