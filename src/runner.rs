use gimmef_scan::{Pattern, ScanError, Value};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Values,
    Check,
}

#[derive(Debug)]
pub enum Outcome {
    Values(Vec<Value>),
    Matched(bool),
    Failed(ScanError),
}

#[derive(Debug)]
pub struct ScanResult {
    pub line: usize,
    pub input: String,
    pub outcome: Outcome,
}

impl ScanResult {
    pub fn passed(&self) -> bool {
        match self.outcome {
            Outcome::Values(_) => true,
            Outcome::Matched(matched) => matched,
            Outcome::Failed(_) => false,
        }
    }
}

pub fn scan_input(pattern: &Pattern, line: usize, input: &str, mode: Mode) -> ScanResult {
    let outcome = match mode {
        Mode::Values => match pattern.scan_values(input) {
            Ok(values) => Outcome::Values(values),
            Err(e) => Outcome::Failed(e),
        },
        Mode::Check => match pattern.matches(input) {
            Ok(matched) => Outcome::Matched(matched),
            Err(e) => Outcome::Failed(e),
        },
    };

    if let Outcome::Failed(error) = &outcome {
        tracing::debug!(line, kind = ?error.kind(), "scan failed");
    }

    ScanResult {
        line,
        input: input.to_string(),
        outcome,
    }
}

/// Scans every input against one shared pattern. Results keep input order.
pub fn scan_all(
    pattern: &Pattern,
    inputs: &[String],
    mode: Mode,
    sequential: bool,
) -> Vec<ScanResult> {
    if sequential || inputs.len() == 1 {
        inputs
            .iter()
            .enumerate()
            .map(|(i, input)| scan_input(pattern, i + 1, input, mode))
            .collect()
    } else {
        inputs
            .par_iter()
            .enumerate()
            .map(|(i, input)| scan_input(pattern, i + 1, input, mode))
            .collect()
    }
}
