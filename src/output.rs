use crate::runner::{Outcome, ScanResult};
use gimmef_scan::Value;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

pub struct Output {
    stdout: StandardStream,
    stderr: StandardStream,
}

fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Int(n) => serde_json::Value::from(*n),
        Value::String(s) => serde_json::Value::String(s.clone()),
    }
}

impl Output {
    pub fn new(color: bool) -> Self {
        let color_choice = if color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(color_choice),
            stderr: StandardStream::stderr(color_choice),
        }
    }

    pub fn print_result(&mut self, result: &ScanResult, json: bool) {
        match &result.outcome {
            Outcome::Values(values) => {
                if json {
                    let array: Vec<serde_json::Value> = values.iter().map(to_json).collect();
                    writeln!(self.stdout, "{}", serde_json::Value::Array(array)).unwrap();
                } else {
                    let fields: Vec<String> = values.iter().map(Value::to_string).collect();
                    writeln!(self.stdout, "{}", fields.join("\t")).unwrap();
                }
            }
            Outcome::Matched(matched) => {
                let (color, label) = if *matched {
                    (Color::Green, "match")
                } else {
                    (Color::Red, "no match")
                };
                let _ = self.stdout.set_color(ColorSpec::new().set_fg(Some(color)));
                write!(self.stdout, "{}", label).unwrap();
                let _ = self.stdout.reset();
                writeln!(self.stdout, "\t{}", result.input).unwrap();
            }
            Outcome::Failed(error) => {
                let _ = self
                    .stderr
                    .set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
                write!(self.stderr, "error").unwrap();
                let _ = self.stderr.reset();
                writeln!(self.stderr, ": line {}: {}", result.line, error).unwrap();
            }
        }
    }

    pub fn print_summary(&mut self, results: &[ScanResult]) {
        let failed = results.iter().filter(|r| !r.passed()).count();
        if failed == 0 {
            return;
        }

        let _ = self.stderr.set_color(ColorSpec::new().set_dimmed(true));
        writeln!(
            self.stderr,
            "{} of {} inputs failed",
            failed,
            results.len()
        )
        .unwrap();
        let _ = self.stderr.reset();
    }
}
