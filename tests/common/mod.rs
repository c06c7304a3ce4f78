#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;

pub use launchseq_test_utils::{init_tracing, with_timeout};

/// Write `contents` to a temporary `.toml` file and keep it alive for the
/// duration of the test.
pub fn write_plan(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    write!(file, "{contents}").unwrap();
    file
}
