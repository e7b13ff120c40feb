//! Common utilities and types used throughout the virtual memory simulator.
//!
//! This module provides fundamental building blocks shared across all
//! components of the simulator. It includes:
//! 1. **Address Types:** Strong types for virtual and physical addresses.
//! 2. **Constants:** The fixed bit layout of logical addresses.
//! 3. **Translation Records:** The result of a translation and the stage that
//!    resolved it.
//! 4. **Error Handling:** The crate-wide error type.

/// Address type definitions (virtual and physical addresses).
pub mod addr;

/// Address-layout constants used throughout the simulator.
pub mod constants;

/// Translation result definitions.
pub mod data;

/// Error type definitions.
pub mod error;

pub use addr::{PhysAddr, VirtAddr};
pub use constants::{ADDR_MASK, FRAME_SIZE, PAGE_SHIFT, PAGE_SIZE};
pub use data::{Translation, TranslationPath};
pub use error::VmError;
