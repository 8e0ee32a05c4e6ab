//! Scan errors and their classification.

use std::fmt;
use std::num::ParseIntError;
use thiserror::Error;

/// Broad classification of a [`ScanError`], independent of any context
/// wrapping applied on the way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadArgument,
    NoMatch,
    MultipleMatches,
    EmptyCapture,
    Conversion,
    Bug,
}

/// The step of a scan that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ParseFormat,
    Capture,
    Assign,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::ParseFormat => write!(f, "parsing format"),
            Operation::Capture => write!(f, "capturing from input"),
            Operation::Assign => write!(f, "assigning values to targets"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("bad argument: {0}")]
    BadArgument(String),

    #[error("input does not match format")]
    NoMatch,

    #[error("input does not match format: could not find substring '{segment}' in '{input}'")]
    SegmentNotFound { segment: String, input: String },

    #[error("input matches format more than once: found {count}; need 1")]
    MultipleMatches { count: usize },

    #[error("empty capture: {0}")]
    EmptyCapture(String),

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error("bug: {0}")]
    Bug(String),

    #[error("at index {index}: {error}")]
    AtIndex { index: usize, error: Box<ScanError> },

    #[error("{operation}: {error}")]
    Context {
        operation: Operation,
        error: Box<ScanError>,
    },
}

impl ScanError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScanError::BadArgument(_) => ErrorKind::BadArgument,
            ScanError::NoMatch | ScanError::SegmentNotFound { .. } => ErrorKind::NoMatch,
            ScanError::MultipleMatches { .. } => ErrorKind::MultipleMatches,
            ScanError::EmptyCapture(_) => ErrorKind::EmptyCapture,
            ScanError::Convert(_) => ErrorKind::Conversion,
            ScanError::Bug(_) => ErrorKind::Bug,
            ScanError::AtIndex { error, .. } | ScanError::Context { error, .. } => error.kind(),
        }
    }

    /// Index of the target being assigned when the error occurred, if any.
    pub fn target_index(&self) -> Option<usize> {
        match self {
            ScanError::AtIndex { index, .. } => Some(*index),
            ScanError::Context { error, .. } => error.target_index(),
            _ => None,
        }
    }

    pub(crate) fn context(self, operation: Operation) -> Self {
        ScanError::Context {
            operation,
            error: Box::new(self),
        }
    }

    pub(crate) fn at_index(self, index: usize) -> Self {
        ScanError::AtIndex {
            index,
            error: Box::new(self),
        }
    }
}

/// Failure converting captured text into a target.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    #[error("expected {expected} target, got {got}")]
    WrongTarget {
        expected: &'static str,
        got: &'static str,
    },
    #[error("requested {requested} value, but value holds {held}")]
    WrongValue {
        requested: &'static str,
        held: &'static str,
    },
    #[error("expected one or more leading {what} characters, got '{text}'")]
    NoLeadingChars { what: &'static str, text: String },
    #[error("error converting '{text}' to bool")]
    InvalidBool { text: String },
    #[error("error converting '{text}' to integer: {error}")]
    InvalidInt { text: String, error: ParseIntError },
}

pub type Result<T> = std::result::Result<T, ScanError>;
