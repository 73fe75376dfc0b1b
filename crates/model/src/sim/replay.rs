//! Replay driver.
//!
//! Folds a stream of validated trace records into a cache engine,
//! synchronously and strictly in stream order. Each record is fully
//! processed (state mutation plus statistics update) before the next one
//! starts; the engine is exclusively owned for the duration of the call.

use crate::cache::{AccessOutcome, CacheSim};
use crate::common::error::SimError;
use crate::sim::trace::AccessRecord;

/// Replays `records` through `cache`, reporting each outcome to `observer`.
///
/// The observer is invoked after every access with the record and its
/// classification (the CLI's verbose mode; pass a no-op closure otherwise).
/// Returns the number of records processed.
///
/// # Errors
///
/// Stops at the first reader error: a malformed line or a failed read
/// abandons the replay, and no partial statistics should be reported.
pub fn replay<I, F>(cache: &mut CacheSim, records: I, mut observer: F) -> Result<u64, SimError>
where
    I: IntoIterator<Item = Result<AccessRecord, SimError>>,
    F: FnMut(&AccessRecord, AccessOutcome),
{
    let mut processed: u64 = 0;
    for record in records {
        let record = record?;
        let outcome = cache.access(record.op, record.addr);
        observer(&record, outcome);
        processed += 1;
    }
    tracing::debug!(records = processed, "replay complete");
    Ok(processed)
}
