//! Reverse printf: extract typed values from text with a format string.
//!
//! A format such as `%d + %d = %d` is split into verbs (`%d`) and the
//! literal segments between them (` + `, ` = `). Scanning an input finds the
//! one place where those segments line up in order, then converts the text
//! between them into the caller's targets.
//!
//! Supported verbs are `%s` (string), `%d` (integer, any width or
//! signedness) and `%t` (boolean). A decimal width flag such as `%5s` caps
//! how many characters a verb takes, which lets two verbs share one capture.
//! `%%` matches a literal `%`.
//!
//! # Example
//!
//! ```
//! use gimmef_scan::{scan, targets, ErrorKind};
//!
//! let (mut used, mut total, mut free) = (0u32, 0u64, 0i64);
//! scan("50% of 100 is 50", "%d%% of %d is %d", targets![used, total, free]).unwrap();
//! assert_eq!((used, total, free), (50, 100, 50));
//!
//! // The literal parts must line up exactly once
//! let mut n = 0i32;
//! let err = scan("<1> <2>", "<%d>", targets![n]).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::MultipleMatches);
//! ```

mod assign;
mod error;
mod format;
mod matcher;
mod value;
mod verb;

pub use assign::Target;
pub use error::{ConvertError, ErrorKind, Operation, Result, ScanError};
pub use format::Segment;
pub use matcher::{compile, scan, CaptureGroup, Pattern};
pub use value::Value;
pub use verb::{Verb, VerbKind, FLAG_CHARS};
