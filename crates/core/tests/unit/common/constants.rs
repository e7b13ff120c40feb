//! Constants Sanity Tests.
//!
//! The address layout is fixed: these tests pin the relationships between
//! the shift, the masks, and the page/frame sizes so an accidental edit
//! cannot slip through.

use vmsim_core::common::constants::{
    ADDR_BITS, ADDR_MASK, FRAME_SIZE, PAGE_NUMBER_MASK, PAGE_OFFSET_MASK, PAGE_SHIFT, PAGE_SIZE,
};

#[test]
fn sixteen_meaningful_bits() {
    assert_eq!(ADDR_BITS, 16);
    assert_eq!(ADDR_MASK, 0xFFFF);
}

#[test]
fn page_geometry() {
    assert_eq!(PAGE_SHIFT, 8);
    assert_eq!(PAGE_SIZE, 256);
    assert_eq!(PAGE_OFFSET_MASK, 0xFF);
    assert_eq!(PAGE_NUMBER_MASK, 0xFF);
}

#[test]
fn frame_holds_exactly_one_page() {
    assert_eq!(FRAME_SIZE, PAGE_SIZE);
}

#[test]
fn masks_derive_from_shift() {
    assert_eq!(PAGE_SIZE, 1 << PAGE_SHIFT);
    assert_eq!(PAGE_OFFSET_MASK, (PAGE_SIZE as u32) - 1);
    assert_eq!(PAGE_NUMBER_MASK, ADDR_MASK >> PAGE_SHIFT);
}
