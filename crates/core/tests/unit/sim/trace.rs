//! # Trace Reader Tests
//!
//! A trace is one decimal address per line; the first line that fails to
//! parse ends the run silently, mirroring a reference stream that simply
//! stops producing addresses.

use std::io::{Cursor, Write};
use tempfile::NamedTempFile;
use vmsim_core::TraceReader;

fn read_all(input: &str) -> Vec<u32> {
    TraceReader::new(Cursor::new(input.to_owned()))
        .map(|r| r.unwrap().val())
        .collect()
}

#[test]
fn reads_decimal_addresses_in_order() {
    assert_eq!(read_all("16916\n62493\n30198\n"), vec![16916, 62493, 30198]);
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(read_all("  256 \n\t512\n"), vec![256, 512]);
}

#[test]
fn non_numeric_line_ends_the_stream() {
    // Everything after the offending line is ignored, valid or not.
    assert_eq!(read_all("1\n2\nstop\n3\n"), vec![1, 2]);
}

#[test]
fn blank_line_ends_the_stream() {
    assert_eq!(read_all("7\n\n8\n"), vec![7]);
}

#[test]
fn negative_value_ends_the_stream() {
    assert_eq!(read_all("7\n-3\n8\n"), vec![7]);
}

#[test]
fn out_of_range_value_ends_the_stream() {
    // One past u32::MAX.
    assert_eq!(read_all("7\n4294967296\n8\n"), vec![7]);
}

#[test]
fn empty_input_yields_nothing() {
    assert_eq!(read_all(""), Vec::<u32>::new());
}

#[test]
fn reader_is_fused_after_the_end() {
    let mut reader = TraceReader::new(Cursor::new("1\nend\n".to_owned()));
    assert_eq!(reader.next().unwrap().unwrap().val(), 1);
    assert!(reader.next().is_none());
    assert!(reader.next().is_none());
}

#[test]
fn open_reads_from_a_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "100\n200\n300\n").unwrap();

    let addrs: Vec<u32> = TraceReader::open(file.path())
        .unwrap()
        .map(|r| r.unwrap().val())
        .collect();
    assert_eq!(addrs, vec![100, 200, 300]);
}
