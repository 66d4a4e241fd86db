#![allow(dead_code)]

use std::path::PathBuf;

use apicov::logs::{relevant_record, FileLogSource, LogSource};

/// Path to a file under `tests/fixtures`.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// The filtered resource records of the sample build log.
pub fn sample_records() -> Vec<String> {
    FileLogSource::new(fixture("build-log.txt"))
        .read_log(0, &relevant_record)
        .unwrap()
}
