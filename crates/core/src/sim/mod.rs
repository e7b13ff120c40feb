//! Simulation plumbing.
//!
//! Provides the trace reader that feeds addresses into the simulator and the
//! top-level simulator value that owns all mutable state for a run.

pub mod simulator;
pub mod trace;

pub use simulator::Simulator;
pub use trace::TraceReader;
