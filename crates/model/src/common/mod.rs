//! Common types shared across the simulator.
//!
//! This module provides the building blocks the rest of the crate leans on:
//! 1. **Address Type:** A strong newtype for trace addresses with tag/set-index decoding.
//! 2. **Error Handling:** Fatal error kinds for configuration, trace input, and I/O.

/// Address type and bit-field decoding.
pub mod addr;

/// Error type definitions.
pub mod error;

pub use addr::MemAddr;
pub use error::{GeometryError, SimError};
