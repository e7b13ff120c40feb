//! Address trace reading.
//!
//! A trace is a text stream with one decimal logical address per line. The
//! reader is fused: the first line that does not parse as an unsigned 32-bit
//! integer ends the stream permanently, mirroring how the reference traces
//! are consumed. Genuine I/O failures are surfaced as errors rather than
//! treated as end of input.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Read};
use std::path::Path;

use tracing::debug;

use crate::common::addr::VirtAddr;
use crate::common::error::VmError;

/// Iterator over the logical addresses in a trace.
#[derive(Debug)]
pub struct TraceReader<R> {
    lines: Lines<BufReader<R>>,
    done: bool,
}

impl TraceReader<File> {
    /// Opens a trace file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the address list.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::Io`] if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, VmError> {
        Ok(Self::new(File::open(path)?))
    }
}

impl<R: Read> TraceReader<R> {
    /// Wraps any byte source as a trace reader.
    pub fn new(reader: R) -> Self {
        Self {
            lines: BufReader::new(reader).lines(),
            done: false,
        }
    }
}

impl<R: Read> Iterator for TraceReader<R> {
    type Item = Result<VirtAddr, VmError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.lines.next() {
            None => {
                self.done = true;
                None
            }
            Some(Err(e)) => {
                self.done = true;
                Some(Err(e.into()))
            }
            Some(Ok(line)) => match line.trim().parse::<u32>() {
                Ok(raw) => Some(Ok(VirtAddr::new(raw))),
                Err(_) => {
                    // Non-numeric line: silent end of stream, not an error.
                    debug!(line = %line.trim(), "trace ended at non-numeric line");
                    self.done = true;
                    None
                }
            },
        }
    }
}
