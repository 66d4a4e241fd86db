//! Shared vocabulary: the three resource categories a record can belong to,
//! and the integer percentage used by the summary cases.

use crate::error::ApiCovError;

/// Name of the single numeric property carried by every report case.
pub const API_COVERAGE: &str = "api_coverage";

/// Resource kinds tracked by the coverage tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Route,
    Configuration,
    Service,
}

impl Category {
    /// All categories, in report order.
    pub const ALL: [Category; 3] = [Category::Route, Category::Configuration, Category::Service];

    /// Lowercase name, used as the first segment of every field path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Route => "route",
            Category::Configuration => "configuration",
            Category::Service => "service",
        }
    }

    /// Name of the summary case for this category.
    pub fn case_name(&self) -> &'static str {
        match self {
            Category::Route => "OverallRoute",
            Category::Configuration => "OverallConfiguration",
            Category::Service => "OverallService",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Category::Route => 0,
            Category::Configuration => 1,
            Category::Service => 2,
        }
    }
}

impl std::str::FromStr for Category {
    type Err = ApiCovError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "route" => Ok(Category::Route),
            "configuration" => Ok(Category::Configuration),
            "service" => Ok(Category::Service),
            _ => Err(ApiCovError::UnknownCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Truncating integer percentage, `None` when there is nothing to divide by.
#[must_use]
pub fn percent(covered: usize, total: usize) -> Option<u64> {
    if total == 0 {
        None
    } else {
        Some((100 * covered / total) as u64)
    }
}
