//! Trace-driven set-associative cache simulator library.
//!
//! This crate implements the cache model behind the `csim` binary:
//! 1. **Geometry:** Validated cache shape (set index bits, block offset bits, associativity).
//! 2. **Decoder:** Pure tag and set-index extraction from 64-bit addresses.
//! 3. **Engine:** Set-indexed LRU sets with dirty-bit tracking and per-access classification.
//! 4. **Statistics:** Hit/miss/eviction counters with dirty-byte accounting.
//! 5. **Replay:** Trace-file reader and the driver that folds records into the engine.

/// Set-associative cache engine and access classification.
pub mod cache;
/// Common types (addresses, errors).
pub mod common;
/// Cache geometry configuration.
pub mod config;
/// Trace reading and replay.
pub mod sim;
/// Replay statistics accumulation and reporting.
pub mod stats;

/// Cache engine; construct with [`CacheSim::new`] from a validated geometry.
pub use crate::cache::{AccessOutcome, CacheSim};
/// Memory address newtype with tag/set-index decoding.
pub use crate::common::MemAddr;
/// Fatal error types (configuration, trace format, I/O).
pub use crate::common::error::{GeometryError, SimError};
/// Cache shape; construct with [`CacheGeometry::new`] or deserialize from JSON.
pub use crate::config::CacheGeometry;
/// Trace record types and the streaming trace reader.
pub use crate::sim::trace::{AccessRecord, Operation, TraceReader};
/// Replay statistics snapshot.
pub use crate::stats::CacheStats;
