//! Decoding of logged records and routing into the walker.

use tracing::{debug, warn};

use crate::error::Result;
use crate::model::Category;
use crate::resources::ResourceObjects;
use crate::tally::CoverageTally;
use crate::walk::walk;

/// Counts for one batch of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Records walked, per category in `Category::ALL` order.
    pub dispatched: [usize; 3],
    /// Records with no resource kind populated.
    pub skipped: usize,
}

impl BatchStats {
    #[must_use]
    pub fn dispatched_for(&self, category: Category) -> usize {
        self.dispatched[category.index()]
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.dispatched.iter().sum::<usize>() + self.skipped
    }
}

/// Decode one record from its JSON text. Failure is fatal for the run.
pub fn decode_record(text: &str) -> Result<ResourceObjects> {
    Ok(serde_json::from_str(text)?)
}

/// Walk the populated resource kind of `record` into `tally`.
///
/// Returns the category walked, or `None` when the record carries no
/// resource. If several kinds are populated only the first, in
/// `Route`, `Configuration`, `Service` order, is walked.
pub fn dispatch(record: &ResourceObjects, tally: &mut CoverageTally) -> Result<Option<Category>> {
    let populated = record.populated();
    let Some(&(category, value)) = populated.first() else {
        debug!("record carries no resource object, skipping");
        return Ok(None);
    };

    if populated.len() > 1 {
        let ignored: Vec<_> = populated[1..].iter().map(|(c, _)| c.as_str()).collect();
        warn!(
            walked = category.as_str(),
            ?ignored,
            "record populates more than one resource kind"
        );
    }

    walk(value, category.as_str(), &mut |path, classification| {
        tally.record(category, &path, classification);
    })?;

    Ok(Some(category))
}

/// Decode and dispatch every record in order, stopping at the first record
/// that fails to decode.
pub fn calculate_coverage<I, S>(records: I, tally: &mut CoverageTally) -> Result<BatchStats>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut stats = BatchStats::default();

    for (index, text) in records.into_iter().enumerate() {
        let record = decode_record(text.as_ref())?;
        match dispatch(&record, tally)? {
            Some(category) => {
                debug!(index, category = category.as_str(), "record dispatched");
                stats.dispatched[category.index()] += 1;
            }
            None => stats.skipped += 1,
        }
    }

    Ok(stats)
}
