//! Conversion of the coverage tally into dashboard test cases.
//!
//! Each category yields a summary case carrying the percentage of distinct
//! field paths covered, followed by one case per field path: passing with
//! its occurrence count when covered, failing with zero when not.

use std::fmt::Write;

use clap::ValueEnum;
use tracing::warn;

use crate::error::{ApiCovError, Result};
use crate::model::{percent, Category, API_COVERAGE};
use crate::tally::{CategoryTally, CoverageTally};

/// What to do with a category no record was observed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum EmptyCategoryPolicy {
    /// Report the category as 0% covered.
    #[default]
    Zero,
    /// Leave the summary case out.
    Omit,
    /// Abort the run.
    Fail,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestProperty {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    pub name: String,
    pub property: TestProperty,
    pub fail: bool,
}

impl TestCase {
    fn new(name: String, value: f64, fail: bool) -> Self {
        Self {
            name,
            property: TestProperty {
                name: API_COVERAGE.to_string(),
                value,
            },
            fail,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestSuite {
    pub cases: Vec<TestCase>,
}

impl TestSuite {
    #[must_use]
    pub fn failures(&self) -> usize {
        self.cases.iter().filter(|c| c.fail).count()
    }

    /// Find a case by exact name.
    #[must_use]
    pub fn case(&self, name: &str) -> Option<&TestCase> {
        self.cases.iter().find(|c| c.name == name)
    }
}

/// Build the cases for one category.
pub fn build_cases(
    category: Category,
    tally: &CategoryTally,
    policy: EmptyCategoryPolicy,
) -> Result<Vec<TestCase>> {
    let case_name = category.case_name();
    let mut cases = Vec::with_capacity(tally.total() + 1);

    match percent(tally.covered.len(), tally.total()) {
        Some(pct) => cases.push(TestCase::new(case_name.to_string(), pct as f64, false)),
        None => match policy {
            EmptyCategoryPolicy::Zero => {
                warn!(category = category.as_str(), "no records observed, reporting 0%");
                cases.push(TestCase::new(case_name.to_string(), 0.0, false));
            }
            EmptyCategoryPolicy::Omit => {
                warn!(category = category.as_str(), "no records observed, omitting summary");
            }
            EmptyCategoryPolicy::Fail => {
                return Err(ApiCovError::EmptyCategory(category.as_str().to_string()));
            }
        },
    }

    for (path, count) in &tally.covered {
        cases.push(TestCase::new(
            format!("{}/{}", case_name, path),
            *count as f64,
            false,
        ));
    }

    for (path, count) in &tally.not_covered {
        cases.push(TestCase::new(
            format!("{}/{}", case_name, path),
            *count as f64,
            true,
        ));
    }

    Ok(cases)
}

/// Build the full suite, categories in `Route`, `Configuration`, `Service`
/// order.
pub fn build_report(tally: &CoverageTally, policy: EmptyCategoryPolicy) -> Result<TestSuite> {
    let mut suite = TestSuite::default();
    for category in Category::ALL {
        suite
            .cases
            .extend(build_cases(category, tally.category(category), policy)?);
    }
    Ok(suite)
}

/// One line per category: covered paths, total paths and percentage.
#[must_use]
pub fn format_summary(tally: &CoverageTally) -> String {
    let mut out = String::new();
    writeln!(
        out,
        "{:<16} {:>8} {:>8} {:>8}",
        "CATEGORY", "FIELDS", "COVERED", "RATE"
    )
    .unwrap();
    writeln!(out, "{}", "-".repeat(43)).unwrap();
    for category in Category::ALL {
        let t = tally.category(category);
        let rate = match percent(t.covered.len(), t.total()) {
            Some(pct) => format!("{}%", pct),
            None => "-".to_string(),
        };
        writeln!(
            out,
            "{:<16} {:>8} {:>8} {:>8}",
            category.as_str(),
            t.total(),
            t.covered.len(),
            rate
        )
        .unwrap();
    }
    out
}
