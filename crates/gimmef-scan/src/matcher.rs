//! Matching a compiled format against input text.

use crate::assign::{assign, Target};
use crate::error::{ErrorKind, Operation, Result, ScanError};
use crate::format::{compile as compile_format, Segment};
use crate::value::Value;
use crate::verb::Verb;
use std::str::FromStr;
use tracing::{debug, trace};

/// A slice of the input together with the verbs that must be read from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureGroup<'i, 'p> {
    pub text: &'i str,
    pub verbs: &'p [Verb],
}

/// A compiled format, reusable across any number of inputs.
///
/// A `Pattern` holds only what was learned from the format. Everything a
/// scan works out about a particular input lives on that scan's stack, so
/// one pattern can be shared between threads and scanned concurrently.
///
/// # Example
///
/// ```
/// use gimmef_scan::{targets, Pattern};
///
/// let pattern = Pattern::compile("%d + %d = %d").unwrap();
/// let (mut a, mut b, mut c) = (0i32, 0i32, 0i32);
/// pattern.scan("1000 + -2000 = -1000", targets![a, b, c]).unwrap();
/// assert_eq!((a, b, c), (1000, -2000, -1000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    format: String,
    verbs: Vec<Verb>,
    segments: Vec<Segment>,
}

impl Pattern {
    pub fn compile(format: &str) -> Result<Self> {
        if format.is_empty() {
            return Err(ScanError::BadArgument(
                "format must not be empty".to_string(),
            ));
        }

        let (verbs, segments) = compile_format(format)?;
        debug!(
            format,
            verbs = verbs.len(),
            segments = segments.len(),
            "compiled format"
        );

        Ok(Self {
            format: format.to_string(),
            verbs,
            segments,
        })
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn verb_count(&self) -> usize {
        self.verbs.len()
    }

    pub fn begins_with_verb(&self) -> bool {
        self.verbs.first().is_some_and(|v| v.offset() == 0)
    }

    pub fn ends_with_verb(&self) -> bool {
        self.verbs
            .last()
            .is_some_and(|v| v.end() == self.format.len())
    }

    /// Captures values from `input` and assigns them to `targets`, one per
    /// verb in format order.
    ///
    /// On failure some targets may already have been written.
    pub fn scan(&self, input: &str, targets: &mut [Target<'_>]) -> Result<()> {
        if input.is_empty() {
            return Err(ScanError::BadArgument(
                "input must not be empty".to_string(),
            ));
        }

        if targets.len() != self.verb_count() {
            return Err(ScanError::BadArgument(format!(
                "found {} verbs for {} targets; count must match",
                self.verb_count(),
                targets.len()
            )));
        }

        let groups = self
            .capture(input)
            .map_err(|e| e.context(Operation::Capture))?;

        assign(&groups, targets).map_err(|e| e.context(Operation::Assign))
    }

    /// Scans `input` into freshly allocated values of each verb's natural
    /// type: `bool` for `%t`, `i64` for `%d` and `String` for `%s`.
    pub fn scan_values(&self, input: &str) -> Result<Vec<Value>> {
        let mut values: Vec<Value> = self
            .verbs
            .iter()
            .map(|verb| Value::default_for(verb.kind()))
            .collect();

        let mut targets: Vec<Target<'_>> = values.iter_mut().map(Value::as_target).collect();
        self.scan(input, &mut targets)?;

        Ok(values)
    }

    /// Whether the literal parts of the format line up with `input`.
    ///
    /// Returns `Ok(false)` when the input does not match; ambiguous matches
    /// and empty captures are still reported as errors.
    pub fn matches(&self, input: &str) -> Result<bool> {
        match self.capture(input) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NoMatch => Ok(false),
            Err(e) => Err(e.context(Operation::Capture)),
        }
    }

    /// Splits `input` into capture groups without converting anything.
    pub fn capture<'i>(&self, input: &'i str) -> Result<Vec<CaptureGroup<'i, '_>>> {
        let occurrences = find_occurrences(&self.segments, input)?;
        let alignment = resolve_alignment(&self.segments, &occurrences)?;
        debug!(?alignment, "resolved segment alignment");

        let groups = self.partition(&alignment, input)?;
        for group in &groups {
            trace!(
                capture = group.text,
                verbs = group.verbs.len(),
                "capture group"
            );
        }

        Ok(groups)
    }

    fn verbs_between(&self, after: Option<usize>, before: Option<usize>) -> &[Verb] {
        let start = after.map_or(0, |offset| {
            self.verbs.partition_point(|v| v.offset() <= offset)
        });
        let end = before.map_or(self.verbs.len(), |offset| {
            self.verbs.partition_point(|v| v.offset() < offset)
        });
        &self.verbs[start..end.max(start)]
    }

    fn partition<'i>(
        &self,
        alignment: &[usize],
        input: &'i str,
    ) -> Result<Vec<CaptureGroup<'i, '_>>> {
        let mut groups = Vec::with_capacity(self.segments.len() + 1);

        if self.segments.is_empty() {
            groups.push(CaptureGroup {
                text: input,
                verbs: &self.verbs,
            });
        }

        let bounds: Vec<(&Segment, usize)> = self
            .segments
            .iter()
            .zip(alignment.iter().copied())
            .collect();

        if let Some(&(first, start)) = bounds.first() {
            if self.begins_with_verb() {
                let text = &input[..start];
                if text.is_empty() {
                    return Err(ScanError::EmptyCapture(format!(
                        "expected capture at start of input for leading verb '{}'",
                        self.verbs[0]
                    )));
                }
                groups.push(CaptureGroup {
                    text,
                    verbs: self.verbs_between(None, Some(first.offset())),
                });
            }
        }

        for pair in bounds.windows(2) {
            let (segment, start) = pair[0];
            let (next, next_start) = pair[1];
            let text = &input[start + segment.text().len()..next_start];
            if text.is_empty() {
                return Err(ScanError::Bug(format!(
                    "no string to capture between matching segments '{}' and '{}', so pattern should not have matched",
                    segment.text(),
                    next.text()
                )));
            }
            groups.push(CaptureGroup {
                text,
                verbs: self.verbs_between(Some(segment.offset()), Some(next.offset())),
            });
        }

        if let Some(&(last, start)) = bounds.last() {
            if self.ends_with_verb() {
                let text = &input[start + last.text().len()..];
                if text.is_empty() {
                    return Err(ScanError::EmptyCapture(format!(
                        "expected capture at end of input for final verb '{}'",
                        self.verbs[self.verbs.len() - 1]
                    )));
                }
                groups.push(CaptureGroup {
                    text,
                    verbs: self.verbs_between(Some(last.offset()), None),
                });
            }
        }

        if let Some(group) = groups.iter().find(|g| g.verbs.is_empty()) {
            return Err(ScanError::Bug(format!(
                "no verbs assigned to captured substring '{}'",
                group.text
            )));
        }

        Ok(groups)
    }
}

impl FromStr for Pattern {
    type Err = ScanError;

    fn from_str(format: &str) -> Result<Self> {
        Pattern::compile(format)
    }
}

/// Every non-overlapping start offset of each segment in `input`, scanning
/// left to right.
fn find_occurrences(segments: &[Segment], input: &str) -> Result<Vec<Vec<usize>>> {
    segments
        .iter()
        .map(|segment| {
            let starts: Vec<usize> = input
                .match_indices(segment.text())
                .map(|(start, _)| start)
                .collect();
            trace!(segment = segment.text(), ?starts, "found segment occurrences");

            if starts.is_empty() {
                return Err(ScanError::SegmentNotFound {
                    segment: segment.text().to_string(),
                    input: input.to_string(),
                });
            }
            Ok(starts)
        })
        .collect()
}

/// Picks the single set of segment offsets, one per segment, that lays the
/// segments out in format order with room for a capture between each pair.
///
/// Every occurrence of the last segment anchors a candidate; earlier
/// segments are then pulled in one at a time, each at its latest occurrence
/// that still ends before the segment after it begins.
fn resolve_alignment(segments: &[Segment], occurrences: &[Vec<usize>]) -> Result<Vec<usize>> {
    let Some((anchors, earlier)) = occurrences.split_last() else {
        return Ok(Vec::new());
    };

    let mut candidates: Vec<Vec<usize>> = Vec::new();

    'anchors: for &anchor in anchors {
        let mut chain = vec![anchor];
        let mut earliest = anchor;

        for (segment, starts) in segments[..earlier.len()].iter().zip(earlier).rev() {
            let len = segment.text().len();
            match starts.iter().rev().find(|&&start| start + len < earliest) {
                Some(&start) => {
                    chain.push(start);
                    earliest = start;
                }
                None => continue 'anchors,
            }
        }

        chain.reverse();
        candidates.push(chain);
    }

    match candidates.len() {
        0 => Err(ScanError::NoMatch),
        1 => Ok(candidates.remove(0)),
        count => Err(ScanError::MultipleMatches { count }),
    }
}

/// Captures values from `input` according to `format` and assigns them to
/// `targets`.
pub fn scan(input: &str, format: &str, targets: &mut [Target<'_>]) -> Result<()> {
    if format.is_empty() {
        return Err(ScanError::BadArgument(
            "format must not be empty".to_string(),
        ));
    }
    if input.is_empty() {
        return Err(ScanError::BadArgument(
            "input must not be empty".to_string(),
        ));
    }
    if targets.is_empty() {
        return Err(ScanError::BadArgument(
            "one or more targets required".to_string(),
        ));
    }

    compile(format)?.scan(input, targets)
}

/// Compiles `format` for repeated use with [`Pattern::scan`].
pub fn compile(format: &str) -> Result<Pattern> {
    Pattern::compile(format).map_err(|e| e.context(Operation::ParseFormat))
}
