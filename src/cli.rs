//! Wiring between the binary's flags and the library.
//!
//! [`log_source`] turns a [`SourceConfig`] into a boxed [`LogSource`];
//! [`cmd_run`] drives one build log through filtering, tallying, report
//! building and XML output, and hands back the summary text for stdout.

use std::fmt::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::gcs::GcsLogSource;
use crate::logs::{self, FileLogSource, LogSource};
use crate::report::{self, EmptyCategoryPolicy};
use crate::tally::CoverageTally;
use crate::{dispatch, testgrid};

/// Where build logs come from.
#[derive(Debug, Clone)]
pub enum SourceConfig {
    Gcs {
        bucket: String,
        log_dir: String,
        credentials: Option<PathBuf>,
    },
    File(PathBuf),
}

/// Settings for a single coverage run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub artifacts_dir: PathBuf,
    /// Build to read; the latest build when unset.
    pub build: Option<u64>,
    pub empty_category: EmptyCategoryPolicy,
}

/// Construct the log source described by `config`.
pub fn log_source(config: &SourceConfig) -> Result<Box<dyn LogSource>> {
    match config {
        SourceConfig::Gcs {
            bucket,
            log_dir,
            credentials,
        } => {
            let mut source = GcsLogSource::new(bucket, log_dir);
            if let Some(path) = credentials {
                source = source
                    .with_credentials(path)
                    .with_context(|| format!("Cannot load credentials from {}", path.display()))?;
            }
            Ok(Box::new(source))
        }
        SourceConfig::File(path) => Ok(Box::new(FileLogSource::new(path.clone()))),
    }
}

/// Fetch one build log, compute coverage and write the XML report.
pub fn cmd_run(source: &dyn LogSource, config: &RunConfig) -> Result<String> {
    let build = match config.build {
        Some(build) => build,
        None => source
            .latest_build()
            .context("Cannot get latest build number")?,
    };
    info!(build, source = %source.describe(), "calculating coverage");

    let records = source
        .read_log(build, &logs::relevant_record)
        .with_context(|| format!("Cannot read log for build {}", build))?;

    let mut tally = CoverageTally::new();
    let stats = dispatch::calculate_coverage(&records, &mut tally)
        .context("Cannot calculate coverage")?;

    let suite = report::build_report(&tally, config.empty_category)
        .context("Cannot build coverage report")?;
    let path = testgrid::write_xml(&suite, &config.artifacts_dir)
        .context("Cannot create the xml output file")?;

    let mut out = String::new();
    writeln!(
        out,
        "Build {} from {}: {} records ({} without a resource)",
        build,
        source.describe(),
        stats.total(),
        stats.skipped
    )
    .unwrap();
    out.push('\n');
    out.push_str(&report::format_summary(&tally));
    out.push('\n');
    writeln!(
        out,
        "Wrote {} cases ({} failing) to {}",
        suite.cases.len(),
        suite.failures(),
        path.display()
    )
    .unwrap();
    Ok(out)
}
