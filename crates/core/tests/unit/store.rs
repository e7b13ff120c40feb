//! # Backing Store Tests
//!
//! File fixtures are built with a byte pattern over the *global* file
//! offset, so a read that lands one block off produces visibly wrong data.

use std::io::Write;

use tempfile::NamedTempFile;
use vmsim_core::VmError;
use vmsim_core::common::FRAME_SIZE;
use vmsim_core::store::{BackingStore, PageStore};

/// Writes a store file of `len` bytes where byte `i` is `i % 251`.
fn store_file(len: usize) -> (NamedTempFile, Vec<u8>) {
    let bytes: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&bytes).unwrap();
    (file, bytes)
}

#[test]
fn open_counts_whole_pages() {
    let (file, _) = store_file(3 * FRAME_SIZE);
    let store = BackingStore::open(file.path(), 3).unwrap();
    assert_eq!(store.page_count(), 3);
}

#[test]
fn partial_trailing_page_is_not_counted() {
    let (file, _) = store_file(2 * FRAME_SIZE + 100);
    let store = BackingStore::open(file.path(), 2).unwrap();
    assert_eq!(store.page_count(), 2);
}

#[test]
fn read_page_returns_the_block_at_page_times_page_size() {
    let (file, bytes) = store_file(3 * FRAME_SIZE);
    let mut store = BackingStore::open(file.path(), 3).unwrap();

    let mut dest = [0u8; FRAME_SIZE];
    store.read_page(1, &mut dest).unwrap();
    assert_eq!(&dest[..], &bytes[FRAME_SIZE..2 * FRAME_SIZE]);

    store.read_page(0, &mut dest).unwrap();
    assert_eq!(&dest[..], &bytes[..FRAME_SIZE]);
}

#[test]
fn reading_past_the_end_names_the_page() {
    let (file, _) = store_file(2 * FRAME_SIZE);
    let mut store = BackingStore::open(file.path(), 2).unwrap();

    let mut dest = [0u8; FRAME_SIZE];
    let err = store.read_page(5, &mut dest).unwrap_err();
    assert!(matches!(err, VmError::BackingStore { page: 5, .. }));
}

#[test]
fn reading_a_partial_trailing_page_fails() {
    let (file, _) = store_file(FRAME_SIZE + 100);
    let mut store = BackingStore::open(file.path(), 2).unwrap();

    let mut dest = [0u8; FRAME_SIZE];
    let err = store.read_page(1, &mut dest).unwrap_err();
    assert!(matches!(err, VmError::BackingStore { page: 1, .. }));
}

#[test]
fn short_store_still_opens() {
    crate::common::init_tracing();

    let (file, _) = store_file(FRAME_SIZE);
    // One page on disk against a 256-entry page table: accepted, warned.
    let store = BackingStore::open(file.path(), 256).unwrap();
    assert_eq!(store.page_count(), 1);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = BackingStore::open("/no/such/backing/store.bin", 256).unwrap_err();
    assert!(matches!(err, VmError::Io(_)));
}
