//! Integration tests for batch files on disk.

use std::io::Write;
use tempfile::NamedTempFile;
use wff_parser::wff::loader::{BatchEntry, ExpressionLoader, LoaderError};

fn batch_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write batch");
    file
}

#[test]
fn test_load_batch_from_file() {
    let file = batch_file("4\r\ntrue\r\n(\\neg p0)\r\n(\\wedge p0)\r\np\r\n");
    let batch = ExpressionLoader::from_path(file.path())
        .expect("file to load")
        .batch()
        .expect("batch to parse");

    assert_eq!(batch.declared, 4);
    assert_eq!(batch.line_count, 5);
    assert_eq!(batch.results(), vec![true, true, false, false]);
}

#[test]
fn test_short_file_reports_missing_entries() {
    let file = batch_file("3\n(\\vee 0 1)\n");
    let batch = ExpressionLoader::from_path(file.path())
        .expect("file to load")
        .batch()
        .expect("batch to parse");

    assert_eq!(batch.entries.len(), 3);
    assert!(matches!(batch.entries[2], BatchEntry::Missing { index: 3 }));
    assert_eq!(batch.results(), vec![true, false, false]);
}

#[test]
fn test_invalid_header_in_file() {
    let file = batch_file("two\ntrue\nfalse\n");
    let error = ExpressionLoader::from_path(file.path())
        .expect("file to load")
        .batch()
        .expect_err("header should be rejected");

    assert!(matches!(error, LoaderError::InvalidHeader { .. }));
    assert!(error.to_string().contains("\"two\""));
}
