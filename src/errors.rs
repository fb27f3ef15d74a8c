use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Enumerates the reasons an evaluation input is rejected by strict
/// validation.
#[derive(Debug, Error, PartialEq)]
pub enum InvalidInputError {
    /// A numeric field is NaN or infinite.
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    /// A field that measures a size or a length is below zero.
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    /// A field that counts something is not a whole number.
    #[error("{field} must be a whole number, got {value}")]
    NotACount { field: &'static str, value: f64 },

    /// A bounded field lies outside its range.
    #[error("{field} must lie within [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Enumerates errors returned while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Represents a weights file that could not be read.
    #[error("could not read weights from {path:?}")]
    ReadWeights { path: PathBuf, source: io::Error },

    /// Represents a weights file that is not a valid weights record.
    #[error("could not parse weights from {path:?}")]
    ParseWeights {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Represents a weight that is negative or not finite.
    #[error("weight {field} must be a finite non-negative number, got {value}")]
    InvalidWeight { field: &'static str, value: f64 },

    /// Represents weights that do not add up to one.
    #[error("weights must sum to 1, got {0}")]
    WeightsDoNotSumToOne(f64),

    /// Represents a boolean variable holding something other than `0` or `1`.
    #[error("{name} must be 0 or 1, got {value:?}")]
    InvalidFlag { name: &'static str, value: String },
}

/// Enumerates errors returned by the batch scorer.
#[derive(Debug, Error)]
pub enum BatchError {
    /// Represents a failure to read a line.
    #[error("could not read line {line}")]
    Read { line: usize, source: io::Error },

    /// Represents a line that is not a valid submission record, including
    /// one that is not UTF-8.
    #[error("line {line} is not a valid submission")]
    Decode {
        line: usize,
        source: serde_json::Error,
    },

    /// Represents a failure to serialize a scored submission.
    #[error("could not encode scored submission")]
    Encode(#[source] serde_json::Error),

    /// Represents a failure to write output.
    #[error("could not write output")]
    Write(#[source] io::Error),
}
