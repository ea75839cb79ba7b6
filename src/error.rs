//! Error types.

use crate::Cell;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A live cell sits on the edge of the `i64` plane, so its neighborhood
    /// cannot be represented.
    #[error("cell {0} is outside the supported coordinate range")]
    OutOfRange(Cell),

    /// A command-line option had a value that could not be used.
    #[error("invalid value for --{option}: {value:?}")]
    InvalidArgument { option: &'static str, value: String },

    #[error("unknown pattern {0:?}")]
    UnknownPattern(String),

    /// Malformed run-length-encoded input.
    #[error("malformed RLE on line {line}: {reason}")]
    Decode { line: usize, reason: String },

    #[error("{0}")]
    Options(#[from] getopts::Fail),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
