//! Log sources and the filter that extracts resource records from build logs.
//!
//! A record line looks like
//!
//! ```text
//! I0727 16:23:30.055] 2018-10-12T18:18:06.835-0700 info TestRouteCreation test/route.go:34 resource {"Route":{...}}
//! ```
//!
//! i.e. exactly eight whitespace-delimited fields, with `info` as the fourth
//! and `resource` as the seventh. The eighth is the JSON payload.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;
use tracing::info;

use crate::error::Result;

static RECORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\S+\s+\S+\s+\S+\s+info\s+\S+\s+\S+\s+resource\s+(\S+)$").unwrap()
});

/// Return the JSON payload of a resource record line, or `None` for any
/// other line.
#[must_use]
pub fn relevant_record(line: &str) -> Option<String> {
    RECORD_RE
        .captures(line.trim())
        .map(|caps| caps[1].to_string())
}

/// Run `filter` over every line of `reader`, keeping what it returns.
/// Invalid UTF-8 is replaced rather than rejected.
pub fn filter_lines(
    reader: &mut dyn BufRead,
    filter: &dyn Fn(&str) -> Option<String>,
) -> Result<Vec<String>> {
    let mut records = Vec::new();
    let mut buf = Vec::new();
    let mut lines = 0usize;
    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf)?;
        if n == 0 {
            break; // EOF
        }
        lines += 1;
        let line = String::from_utf8_lossy(&buf);
        if let Some(record) = filter(&line) {
            records.push(record);
        }
    }
    info!(lines, records = records.len(), "filtered build log");
    Ok(records)
}

/// Somewhere build logs can be read from.
pub trait LogSource {
    /// Number of the most recent build.
    fn latest_build(&self) -> Result<u64>;

    /// Read the log of `build`, keeping the lines `filter` accepts.
    fn read_log(&self, build: u64, filter: &dyn Fn(&str) -> Option<String>)
        -> Result<Vec<String>>;

    /// Human-readable location, for log messages.
    fn describe(&self) -> String;
}

/// A build log already on local disk.
pub struct FileLogSource {
    pub path: PathBuf,
    /// Reported as the latest build; the file holds a single build's log.
    pub build: u64,
}

impl FileLogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            build: 0,
        }
    }
}

impl LogSource for FileLogSource {
    fn latest_build(&self) -> Result<u64> {
        Ok(self.build)
    }

    fn read_log(
        &self,
        _build: u64,
        filter: &dyn Fn(&str) -> Option<String>,
    ) -> Result<Vec<String>> {
        let mut reader = BufReader::new(File::open(&self.path)?);
        filter_lines(&mut reader, filter)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
