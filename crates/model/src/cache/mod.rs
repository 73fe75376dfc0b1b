//! Set-Associative Cache Engine.
//!
//! This module implements the simulated cache: an array of associative sets,
//! each holding up to `associativity` resident lines under strict LRU
//! replacement with dirty-bit tracking. Every access is classified (hit,
//! cold miss, capacity miss, miss with eviction) and folded into the
//! statistics accumulator, including the dirty-byte accounting needed for
//! write-back analysis.

mod set;

use std::fmt;

use self::set::{CacheLine, CacheSet};
use crate::common::MemAddr;
use crate::common::error::GeometryError;
use crate::config::CacheGeometry;
use crate::sim::trace::Operation;
use crate::stats::CacheStats;

/// Classification of a single access.
///
/// Consumed by verbose reporting only; statistics are accumulated inside the
/// engine regardless of whether the caller inspects the outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessOutcome {
    /// The tag was resident in its set.
    Hit,
    /// Miss into a currently empty set.
    ColdMiss,
    /// Miss into a non-empty set that still had a free way.
    Miss,
    /// Miss into a full set; the least-recently-used line was evicted.
    MissEviction,
}

impl AccessOutcome {
    /// True for [`AccessOutcome::Hit`].
    #[inline]
    pub fn is_hit(self) -> bool {
        self == Self::Hit
    }
}

impl fmt::Display for AccessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hit => write!(f, "hit"),
            Self::ColdMiss => write!(f, "miss (cold)"),
            Self::Miss => write!(f, "miss"),
            Self::MissEviction => write!(f, "miss eviction"),
        }
    }
}

/// The simulated cache: `2^index_bits` LRU sets plus the statistics they feed.
///
/// The engine exclusively owns its sets and lines for the duration of a
/// replay; eviction is removal from the owning container. One instance per
/// replay; independent engines never share state, so tests can run many
/// side by side.
#[derive(Debug)]
pub struct CacheSim {
    sets: Vec<CacheSet>,
    geometry: CacheGeometry,
    stats: CacheStats,
}

impl CacheSim {
    /// Builds an empty cache from `geometry`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] when the geometry invariant does not hold;
    /// no cache structure is built in that case.
    pub fn new(geometry: CacheGeometry) -> Result<Self, GeometryError> {
        geometry.validate()?;
        let sets = (0..geometry.set_count())
            .map(|_| CacheSet::with_capacity(geometry.associativity))
            .collect();
        Ok(Self {
            sets,
            geometry,
            stats: CacheStats::default(),
        })
    }

    /// The geometry this cache was built from.
    pub fn geometry(&self) -> &CacheGeometry {
        &self.geometry
    }

    /// Read-only snapshot of the accumulated statistics.
    ///
    /// Retrieval has no side effects: reading twice with no intervening
    /// [`CacheSim::access`] yields identical results.
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// True when the block containing `addr` is resident. Does not disturb
    /// recency or statistics.
    pub fn contains(&self, addr: MemAddr) -> bool {
        let tag = addr.tag(&self.geometry);
        self.sets[addr.set_index(&self.geometry)].contains(tag)
    }

    /// Number of resident lines in set `set_index`, or `None` when the index
    /// is out of range.
    pub fn occupancy(&self, set_index: usize) -> Option<usize> {
        self.sets.get(set_index).map(CacheSet::len)
    }

    /// Replays one access against the cache.
    ///
    /// Decodes the tag and set index, classifies the access, updates the
    /// addressed set's recency order and dirty state, and accumulates
    /// statistics. Executes atomically per call; the engine cannot fail at
    /// runtime on a validated geometry.
    pub fn access(&mut self, op: Operation, addr: MemAddr) -> AccessOutcome {
        let tag = addr.tag(&self.geometry);
        let index = addr.set_index(&self.geometry);
        let block_bytes = self.geometry.block_bytes();
        let set = &mut self.sets[index];

        if let Some(line) = set.touch(tag) {
            if op == Operation::Store && !line.dirty {
                line.dirty = true;
                self.stats.dirty_bytes += block_bytes;
            }
            self.stats.hits += 1;
            tracing::trace!(addr = addr.val(), set = index, tag, "hit");
            return AccessOutcome::Hit;
        }

        self.stats.misses += 1;
        let outcome = if set.is_empty() {
            AccessOutcome::ColdMiss
        } else if set.len() < self.geometry.associativity {
            AccessOutcome::Miss
        } else {
            self.stats.evictions += 1;
            if let Some(victim) = set.evict_lru() {
                if victim.dirty {
                    // The block's bytes move from "resident dirty" to
                    // "evicted dirty"; they are never counted in both.
                    self.stats.dirty_bytes -= block_bytes;
                    self.stats.dirty_evictions += block_bytes;
                }
            }
            AccessOutcome::MissEviction
        };

        let dirty = op == Operation::Store;
        if dirty {
            self.stats.dirty_bytes += block_bytes;
        }
        set.insert(CacheLine { tag, dirty });
        tracing::trace!(addr = addr.val(), set = index, tag, %outcome, "miss");
        outcome
    }
}
