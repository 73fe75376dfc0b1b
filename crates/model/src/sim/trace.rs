//! Memory-trace reading and parsing.
//!
//! A trace is a text file with one access per line:
//!
//! ```text
//! L 7ff0005c8,8
//! S 7ff0005c8,8
//! ```
//!
//! i.e. `<op> <hex-address>,<decimal-size>` with `op ∈ {L, S}`. Surrounding
//! whitespace is ignored and blank lines are skipped; anything else is a
//! fatal format error carrying the 1-based line number: a malformed line
//! abandons the whole replay rather than producing partial statistics.
//! The access size is validated and recorded but never influences
//! hit/miss classification.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::common::MemAddr;
use crate::common::error::SimError;

/// Kind of memory operation in a trace record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Data read (`L`).
    Load,
    /// Data write (`S`).
    Store,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Load => write!(f, "L"),
            Self::Store => write!(f, "S"),
        }
    }
}

/// One validated trace record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccessRecord {
    /// Load or store.
    pub op: Operation,
    /// 64-bit byte address of the access.
    pub addr: MemAddr,
    /// Access size in bytes.
    pub size: u64,
}

/// Streaming reader yielding one validated [`AccessRecord`] per trace line.
///
/// Iteration stops at end of input; the first malformed line or read failure
/// yields an `Err` and the caller is expected to abandon the replay.
#[derive(Debug)]
pub struct TraceReader<R> {
    input: R,
    source: String,
    line: u64,
}

impl TraceReader<BufReader<File>> {
    /// Opens a trace file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] when the file is missing or unreadable, so
    /// the failure is reported before any record is processed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let source = path.as_ref().display().to_string();
        let file = File::open(path.as_ref()).map_err(|e| SimError::Io {
            path: source.clone(),
            source: e,
        })?;
        Ok(Self::from_source(BufReader::new(file), source))
    }
}

impl<R: BufRead> TraceReader<R> {
    /// Wraps an arbitrary buffered source (in-memory traces, pipes).
    pub fn new(input: R) -> Self {
        Self::from_source(input, "<memory>".to_string())
    }

    fn from_source(input: R, source: String) -> Self {
        Self {
            input,
            source,
            line: 0,
        }
    }
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = Result<AccessRecord, SimError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut buf = String::new();
            match self.input.read_line(&mut buf) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line += 1;
                    let text = buf.trim();
                    if text.is_empty() {
                        continue;
                    }
                    return Some(parse_record(text).map_err(|reason| SimError::TraceFormat {
                        line: self.line,
                        reason,
                    }));
                }
                Err(e) => {
                    return Some(Err(SimError::Io {
                        path: self.source.clone(),
                        source: e,
                    }));
                }
            }
        }
    }
}

/// Parses one non-blank, whitespace-trimmed trace line.
fn parse_record(text: &str) -> Result<AccessRecord, String> {
    let (op_text, rest) = text
        .split_once(' ')
        .ok_or_else(|| "expected '<op> <hex-address>,<size>'".to_string())?;

    let op = match op_text {
        "L" => Operation::Load,
        "S" => Operation::Store,
        other => return Err(format!("unknown operation '{other}' (expected L or S)")),
    };

    let (addr_text, size_text) = rest
        .trim_start()
        .split_once(',')
        .ok_or_else(|| "missing ',' between address and size".to_string())?;

    let addr_text = addr_text.trim();
    let addr_digits = addr_text.strip_prefix("0x").unwrap_or(addr_text);
    let addr = u64::from_str_radix(addr_digits, 16)
        .map_err(|_| format!("invalid hexadecimal address '{addr_text}'"))?;

    let size_text = size_text.trim();
    let size: u64 = size_text
        .parse()
        .map_err(|_| format!("invalid access size '{size_text}'"))?;

    Ok(AccessRecord {
        op,
        addr: MemAddr::new(addr),
        size,
    })
}
