//! Replay statistics accumulation and reporting.
//!
//! This module tracks the aggregate outcome of a trace replay:
//! 1. **Access classification:** Hit, miss, and eviction counts.
//! 2. **Write-back accounting:** Bytes currently resident and dirty, and bytes evicted while dirty.
//! 3. **Reporting:** A human-readable summary and a serializable snapshot for JSON output.
//!
//! Counters are accumulated incrementally by the engine; there is no
//! aggregation pass at the end of a replay. All counts are monotone except
//! `dirty_bytes`, which decreases when a dirty line is evicted (its bytes
//! move to `dirty_evictions`, never double-counted).

use serde::Serialize;

/// Aggregate counters for one replay.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Accesses whose tag was resident in its set.
    pub hits: u64,
    /// Accesses whose tag was absent (cold or capacity misses alike).
    pub misses: u64,
    /// Lines removed from a full set to make room for a new block.
    pub evictions: u64,
    /// Bytes currently resident and marked dirty.
    pub dirty_bytes: u64,
    /// Cumulative bytes evicted while dirty.
    pub dirty_evictions: u64,
}

impl CacheStats {
    /// Total accesses processed.
    pub fn accesses(&self) -> u64 {
        self.hits + self.misses
    }

    /// Miss rate as a percentage, `0.0` when nothing was accessed.
    pub fn miss_rate(&self) -> f64 {
        let total = self.accesses();
        if total == 0 {
            0.0
        } else {
            (self.misses as f64 / total as f64) * 100.0
        }
    }

    /// Prints the final report to stdout.
    pub fn print(&self) {
        println!("\n==========================================================");
        println!("CACHE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("accesses                 {}", self.accesses());
        println!("hits                     {}", self.hits);
        println!("misses                   {}", self.misses);
        println!("miss_rate                {:.2}%", self.miss_rate());
        println!("evictions                {}", self.evictions);
        println!("dirty_bytes_resident     {}", self.dirty_bytes);
        println!("dirty_bytes_evicted      {}", self.dirty_evictions);
        println!("==========================================================");
    }
}
