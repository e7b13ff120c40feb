//! Simulated physical memory.
//!
//! This module implements the frame store that holds resident page data. It
//! provides:
//! 1. **Frames:** Fixed 256-byte blocks, each holding exactly one page.
//! 2. **Allocation:** A monotonic cursor that hands out frames in order and
//!    never reuses them; exhaustion is a hard error.
//! 3. **Access:** Signed byte reads and whole-frame fills for page fetches.

use crate::common::constants::FRAME_SIZE;
use crate::common::error::VmError;

/// A single physical frame holding one page of data.
#[derive(Clone, Debug)]
pub struct Frame {
    data: [u8; FRAME_SIZE],
}

impl Frame {
    /// Creates a zero-filled frame.
    fn zeroed() -> Self {
        Self {
            data: [0; FRAME_SIZE],
        }
    }

    /// Returns the frame contents.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the frame contents mutably, for filling on a page fetch.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Reads the signed byte at `offset` within the frame.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is not below [`FRAME_SIZE`]. Offsets produced by
    /// address decomposition are always in range.
    pub fn read(&self, offset: u32) -> i8 {
        self.data[offset as usize] as i8
    }
}

/// Fixed-capacity physical memory: an array of frames plus the allocation
/// cursor.
///
/// All frames are created up front; the cursor tracks how many have been
/// handed out. A frame number, once assigned to a page, is never reassigned.
#[derive(Clone, Debug)]
pub struct PhysicalMemory {
    /// The frame array; contents before allocation are zero.
    frames: Vec<Frame>,
    /// Index of the next unused frame. Only ever increases.
    next_free: usize,
}

impl PhysicalMemory {
    /// Creates a physical memory with the given number of frames.
    ///
    /// # Arguments
    ///
    /// * `frame_count` - Total number of frames available to the run.
    pub fn new(frame_count: usize) -> Self {
        Self {
            frames: vec![Frame::zeroed(); frame_count],
            next_free: 0,
        }
    }

    /// Hands out the next unused frame number.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::OutOfFrames`] once every frame is in use. There is
    /// no reclamation, so this ends the run.
    pub fn allocate(&mut self) -> Result<u32, VmError> {
        if self.next_free == self.frames.len() {
            return Err(VmError::OutOfFrames(self.frames.len()));
        }
        let frame = self.next_free;
        self.next_free += 1;
        Ok(frame as u32)
    }

    /// Returns the frame with the given number.
    ///
    /// # Panics
    ///
    /// Panics if `frame` was never allocated. Frame numbers only originate
    /// from [`PhysicalMemory::allocate`], so in-range access is an invariant.
    pub fn frame(&self, frame: u32) -> &Frame {
        &self.frames[frame as usize]
    }

    /// Returns the frame with the given number mutably.
    ///
    /// # Panics
    ///
    /// Panics if `frame` was never allocated.
    pub fn frame_mut(&mut self, frame: u32) -> &mut Frame {
        &mut self.frames[frame as usize]
    }

    /// Reads the signed byte at `offset` within the given frame.
    pub fn read(&self, frame: u32, offset: u32) -> i8 {
        self.frame(frame).read(offset)
    }

    /// Returns the total number of frames.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Returns the number of frames handed out so far.
    pub fn allocated(&self) -> usize {
        self.next_free
    }
}
