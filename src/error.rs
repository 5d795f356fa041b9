//! v8-symbolize error module.

use std::io;
use std::path::PathBuf;

/// Represents errors of the symbolizer.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A file could not be opened.
    #[error("Cannot open file '{1}': {0}")]
    OpenFile(#[source] io::Error, PathBuf),
    /// A line could not be read from the input.
    #[error("Cannot read line '{1}': {0}")]
    ReadLine(#[source] io::Error, String),
    /// Any other input/output error.
    #[error("Input/output error: {0}")]
    Io(#[from] io::Error),

    /// An address field of a log record could not be decoded.
    #[error("Cannot parse address '{0}' at line {1}")]
    AddressParsing(String, usize),
    /// A recognized log record is missing fields or carries unparsable ones.
    #[error("Cannot parse log record '{0}' at line {1}")]
    LogParsing(String, usize),
}

/// Represents results.
pub type Result<T> = std::result::Result<T, Error>;
