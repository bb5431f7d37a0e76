/*

    Errors raised while reading arguments or scanning OBJ files.

    - UsageError: command line did not name exactly one file
    - ParseError: a vertex line could not be turned into x y z
    - ScanError: everything the scanner and the binary can return

    @date: 10 Nov, 2025
    @author: bartu
*/

use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("expected exactly one OBJ path, got {0}")]
    WrongArgCount(usize),
    #[error("unknown option '{0}'")]
    UnknownFlag(String),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseErrorKind {
    #[error("expected 3 coordinates, found {found}")]
    MissingField { found: usize },
    #[error("'{field}' is not a number: {source}")]
    InvalidFloat {
        field: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("'{field}' is not a finite number")]
    NonFinite { field: String },
    #[error("vertex record is not valid UTF-8")]
    InvalidUtf8,
}

/// A malformed vertex record, with the 1-based line it was found on.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("line {line}: {kind} (in '{text}')")]
pub struct ParseError {
    pub line: usize,
    pub text: String,
    #[source]
    pub kind: ParseErrorKind,
}

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to read {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read input: {0}")]
    Read(#[source] std::io::Error),
    #[error("Failed to parse vertex, {0}")]
    Parse(#[from] ParseError),
    #[error("No vertex records found in {}", .0.display())]
    NoVertices(PathBuf),
    #[error("All {skipped} vertex records in {} were malformed and skipped", path.display())]
    AllSkipped { path: PathBuf, skipped: usize },
}
