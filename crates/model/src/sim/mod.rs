//! Trace replay utilities.
//!
//! Provides the streaming trace-file reader and the driver that folds
//! validated records into a cache engine, in file order.

pub mod replay;
pub mod trace;
