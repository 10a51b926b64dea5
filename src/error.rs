//! Library error types.
//!
//! The simulation core is infallible. Errors only arise at the edges:
//! parsing patterns and validating configuration.

use thiserror::Error;

/// Errors produced while reading or looking up a pattern.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("unknown pattern: {0}")]
    Unknown(String),
    #[error("invalid cell {found:?} at line {line}, column {column}")]
    InvalidCell {
        line: usize,
        column: usize,
        found: char,
    },
    #[error("pattern has no live cells")]
    Empty,
}

/// Errors produced while validating configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("wrap boundary needs non-zero dimensions, got {width}x{height}")]
    ZeroWrap { width: u32, height: u32 },
    #[error("load factor must be at least 1")]
    ZeroLoadFactor,
    #[error("invalid size {0:?}; expected WIDTHxHEIGHT")]
    InvalidSize(String),
}
