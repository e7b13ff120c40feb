//! Virtual memory simulator CLI.
//!
//! This binary drives a full trace-to-report run. It performs:
//! 1. **Setup:** Parses arguments, loads the optional JSON config, and opens
//!    the trace and backing-store files.
//! 2. **Run loop:** Translates every address in the trace, printing one
//!    `Virtual address / Physical address / Value` line per translation.
//! 3. **Reporting:** Prints the statistics block at the end of the run, or at
//!    the point of a fatal error for whatever completed before it.

use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;

use vmsim_core::VmError;
use vmsim_core::config::Config;
use vmsim_core::sim::{Simulator, TraceReader};
use vmsim_core::stats::TranslationStats;
use vmsim_core::store::BackingStore;

#[derive(Parser, Debug)]
#[command(
    name = "vmsim",
    version,
    about = "Demand-paged virtual memory address-translation simulator",
    long_about = "Translate a trace of logical addresses against a binary backing store.\n\nThe trace holds one decimal address per line; the first non-numeric line ends it. The backing store is a raw binary image holding one 256-byte block per page.\n\nExamples:\n  vmsim addresses.txt BACKING_STORE.bin\n  vmsim addresses.txt BACKING_STORE.bin --quiet\n  vmsim addresses.txt BACKING_STORE.bin --config geometry.json\n  RUST_LOG=vmsim_core=debug vmsim addresses.txt BACKING_STORE.bin"
)]
struct Cli {
    /// Address trace: one decimal logical address per line.
    #[arg(value_name = "TRACE")]
    trace: PathBuf,

    /// Backing store: raw binary image, one 256-byte block per page.
    #[arg(value_name = "BACKING_STORE")]
    store: PathBuf,

    /// JSON configuration file overriding the default geometry.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Suppress per-address output; print only the final statistics.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: {e}");
        process::exit(1);
    });

    let store = BackingStore::open(&cli.store, config.page_table.entries).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: could not open '{}': {e}", cli.store.display());
        process::exit(1);
    });

    let reader = TraceReader::open(&cli.trace).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: could not open '{}': {e}", cli.trace.display());
        process::exit(1);
    });

    let mut sim = Simulator::new(&config, Box::new(store));

    for item in reader {
        let vaddr = match item {
            Ok(v) => v,
            Err(e) => die(&e, &sim.stats),
        };
        let translation = match sim.translate(vaddr) {
            Ok(t) => t,
            Err(e) => die(&e, &sim.stats),
        };
        if !cli.quiet {
            println!(
                "Virtual address: {} Physical address: {} Value: {}",
                translation.vaddr.val(),
                translation.paddr.val(),
                translation.value
            );
        }
    }

    sim.stats.print();
    std::io::stdout().flush().ok();
}

/// Reports a fatal error along with the statistics gathered so far, then
/// exits with a failure code.
fn die(err: &VmError, stats: &TranslationStats) -> ! {
    eprintln!("\n[!] FATAL: {err}");
    stats.print();
    process::exit(1);
}

/// Loads the configuration file if one was given, else the defaults.
fn load_config(path: Option<&Path>) -> Result<Config, VmError> {
    match path {
        Some(p) => Config::from_json_file(p),
        None => Ok(Config::default()),
    }
}

/// Initializes stderr logging from `RUST_LOG`, defaulting to warnings only.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
