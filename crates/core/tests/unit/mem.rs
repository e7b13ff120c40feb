//! # Physical Memory Tests
//!
//! Tests for the frame store: monotonic allocation, capacity exhaustion,
//! and signed byte reads.

use vmsim_core::VmError;
use vmsim_core::mem::PhysicalMemory;

#[test]
fn allocation_is_monotonic_from_zero() {
    let mut memory = PhysicalMemory::new(4);
    for expected in 0..4 {
        assert_eq!(memory.allocate().unwrap(), expected);
    }
    assert_eq!(memory.allocated(), 4);
}

#[test]
fn exhaustion_is_an_explicit_error() {
    let mut memory = PhysicalMemory::new(2);
    memory.allocate().unwrap();
    memory.allocate().unwrap();

    match memory.allocate() {
        Err(VmError::OutOfFrames(frames)) => assert_eq!(frames, 2),
        other => panic!("expected OutOfFrames, got {other:?}"),
    }
}

#[test]
fn exhaustion_does_not_disturb_existing_frames() {
    let mut memory = PhysicalMemory::new(1);
    let frame = memory.allocate().unwrap();
    memory.frame_mut(frame).data_mut()[7] = 42;

    assert!(memory.allocate().is_err());
    assert_eq!(memory.read(frame, 7), 42);
}

#[test]
fn frames_start_zeroed() {
    let mut memory = PhysicalMemory::new(1);
    let frame = memory.allocate().unwrap();
    assert!(memory.frame(frame).data().iter().all(|&b| b == 0));
}

#[test]
fn reads_are_signed() {
    let mut memory = PhysicalMemory::new(1);
    let frame = memory.allocate().unwrap();

    let data = memory.frame_mut(frame).data_mut();
    data[0] = 0x7F;
    data[1] = 0x80;
    data[2] = 0xFF;

    assert_eq!(memory.read(frame, 0), 127);
    assert_eq!(memory.read(frame, 1), -128);
    assert_eq!(memory.read(frame, 2), -1);
}

#[test]
fn frame_count_is_fixed_at_construction() {
    let memory = PhysicalMemory::new(64);
    assert_eq!(memory.frame_count(), 64);
    assert_eq!(memory.allocated(), 0);
}
