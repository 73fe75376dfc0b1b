//! Fatal error definitions.
//!
//! Every error the simulator can surface is unrecoverable at the point of
//! detection: it propagates to the top-level caller, which reports a single
//! diagnostic and exits non-zero. There is no retry or partial-success mode.
//! Allocation failure is not modeled here; Rust's allocator aborts the
//! process, which satisfies the same fatal contract.

use std::io;

use thiserror::Error;

/// A rejected cache geometry.
///
/// Detected before any cache structure is built, so an invalid configuration
/// never produces a partial run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// The set-index and offset fields consume the whole address, leaving no
    /// tag bits to identify a block.
    #[error(
        "set index bits ({index_bits}) plus block offset bits ({offset_bits}) must be less than 64"
    )]
    NoTagField {
        /// Requested set index bit count.
        index_bits: u32,
        /// Requested block offset bit count.
        offset_bits: u32,
    },

    /// An associativity of zero would make every set permanently empty.
    #[error("associativity must be at least 1")]
    ZeroAssociativity,
}

/// Top-level fatal errors for a simulation run.
#[derive(Debug, Error)]
pub enum SimError {
    /// Invalid cache geometry supplied by the caller.
    #[error("configuration: {0}")]
    Geometry(#[from] GeometryError),

    /// A trace line failed to parse. The whole replay is abandoned; partial
    /// statistics are never reported.
    #[error("trace line {line}: {reason}")]
    TraceFormat {
        /// 1-based line number of the offending line.
        line: u64,
        /// What was wrong with it.
        reason: String,
    },

    /// The trace file was missing or unreadable.
    #[error("trace file '{path}': {source}")]
    Io {
        /// Path as given by the caller.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}
