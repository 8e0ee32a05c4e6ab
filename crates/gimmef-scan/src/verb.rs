//! The fixed registry of verb kinds and their converters.

use crate::assign::Target;
use crate::error::ConvertError;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

pub const PERCENT: char = '%';

/// Characters accepted between `%` and the verb code.
pub const FLAG_CHARS: &[char] = &[
    '#', '-', '.', ' ', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

const BOOL_CHARS: &str = "01truefalseTRUEFALSE";
const INT_CHARS: &str = "+-0123456789";

pub fn is_flag(c: char) -> bool {
    FLAG_CHARS.contains(&c)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerbKind {
    Bool,
    Int,
    String,
}

impl VerbKind {
    pub fn from_code(c: char) -> Option<Self> {
        match c {
            't' => Some(VerbKind::Bool),
            'd' => Some(VerbKind::Int),
            's' => Some(VerbKind::String),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            VerbKind::Bool => 't',
            VerbKind::Int => 'd',
            VerbKind::String => 's',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            VerbKind::Bool => "boolean",
            VerbKind::Int => "integer",
            VerbKind::String => "string",
        }
    }

    /// Whether a capture for this kind ends at the first whitespace even
    /// when it is the last verb of its capture group.
    pub fn stops_at_whitespace(self) -> bool {
        match self {
            VerbKind::Bool | VerbKind::Int => true,
            VerbKind::String => false,
        }
    }

    /// Converts `text` into `target`, returning the number of bytes of
    /// `text` actually consumed.
    pub(crate) fn convert(
        self,
        text: &str,
        target: &mut Target<'_>,
    ) -> Result<usize, ConvertError> {
        if !target.accepts(self) {
            return Err(ConvertError::WrongTarget {
                expected: self.name(),
                got: target.type_name(),
            });
        }

        match self {
            VerbKind::Bool => convert_bool(text, target),
            VerbKind::Int => convert_int(text, target),
            VerbKind::String => convert_string(text, target),
        }
    }
}

/// A single placeholder occurrence in a format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verb {
    kind: VerbKind,
    offset: usize,
    flags: String,
}

impl Verb {
    pub(crate) fn new(kind: VerbKind, offset: usize, flags: impl Into<String>) -> Self {
        Self {
            kind,
            offset,
            flags: flags.into(),
        }
    }

    pub fn kind(&self) -> VerbKind {
        self.kind
    }

    /// Byte offset of the verb's `%` in the original format.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// Byte offset just past the verb's text in the original format.
    pub fn end(&self) -> usize {
        self.offset + PERCENT.len_utf8() + self.flags.len() + self.kind.code().len_utf8()
    }

    /// The first run of digits among the flags, read as a maximum number of
    /// characters to capture. Zero counts as no width.
    pub fn max_width(&self) -> Option<usize> {
        let digits: String = self
            .flags
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(|c| c.is_ascii_digit())
            .collect();
        match digits.parse() {
            Ok(0) | Err(_) => None,
            Ok(width) => Some(width),
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", PERCENT, self.flags, self.kind.code())
    }
}

fn leading_run<'a>(text: &'a str, alphabet: &str) -> &'a str {
    let end = text
        .find(|c: char| !alphabet.contains(c))
        .unwrap_or(text.len());
    &text[..end]
}

fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

fn convert_bool(text: &str, target: &mut Target<'_>) -> Result<usize, ConvertError> {
    let run = leading_run(text, BOOL_CHARS);
    if run.is_empty() {
        return Err(ConvertError::NoLeadingChars {
            what: "boolean",
            text: text.to_string(),
        });
    }

    let value = parse_bool(run).ok_or_else(|| ConvertError::InvalidBool {
        text: run.to_string(),
    })?;

    if let Target::Bool(slot) = target {
        **slot = value;
    }
    Ok(run.len())
}

fn convert_string(text: &str, target: &mut Target<'_>) -> Result<usize, ConvertError> {
    if let Target::Str(slot) = target {
        slot.clear();
        slot.push_str(text);
    }
    Ok(text.len())
}

fn parse_int<T>(text: &str) -> Result<T, ConvertError>
where
    T: FromStr<Err = ParseIntError>,
{
    text.parse().map_err(|error| ConvertError::InvalidInt {
        text: text.to_string(),
        error,
    })
}

fn convert_int(text: &str, target: &mut Target<'_>) -> Result<usize, ConvertError> {
    let run = leading_run(text, INT_CHARS);
    if run.is_empty() {
        return Err(ConvertError::NoLeadingChars {
            what: "numeric",
            text: text.to_string(),
        });
    }

    let got = target.type_name();
    match target {
        Target::I8(slot) => **slot = parse_int(run)?,
        Target::I16(slot) => **slot = parse_int(run)?,
        Target::I32(slot) => **slot = parse_int(run)?,
        Target::I64(slot) => **slot = parse_int(run)?,
        Target::Isize(slot) => **slot = parse_int(run)?,
        Target::U8(slot) => **slot = parse_int(run)?,
        Target::U16(slot) => **slot = parse_int(run)?,
        Target::U32(slot) => **slot = parse_int(run)?,
        Target::U64(slot) => **slot = parse_int(run)?,
        Target::Usize(slot) => **slot = parse_int(run)?,
        Target::Bool(_) | Target::Str(_) => {
            return Err(ConvertError::WrongTarget {
                expected: VerbKind::Int.name(),
                got,
            })
        }
    }
    Ok(run.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verb_display_and_end() {
        let verb = Verb::new(VerbKind::String, 3, "-5");
        assert_eq!(verb.to_string(), "%-5s");
        assert_eq!(verb.end(), 7);
    }

    #[test]
    fn test_max_width() {
        assert_eq!(Verb::new(VerbKind::String, 0, "5").max_width(), Some(5));
        assert_eq!(Verb::new(VerbKind::Int, 0, "-12.3").max_width(), Some(12));
        assert_eq!(Verb::new(VerbKind::Int, 0, "05").max_width(), Some(5));
        assert_eq!(Verb::new(VerbKind::String, 0, "").max_width(), None);
        assert_eq!(Verb::new(VerbKind::String, 0, "#-").max_width(), None);
        assert_eq!(Verb::new(VerbKind::String, 0, "0").max_width(), None);
    }

    #[test]
    fn test_convert_int_consumes_leading_digits() {
        let mut n = 0i32;
        let used = VerbKind::Int
            .convert("-42abc", &mut Target::from(&mut n))
            .unwrap();
        assert_eq!(n, -42);
        assert_eq!(used, 3);
    }

    #[test]
    fn test_convert_int_overflow() {
        let mut n = 0u8;
        let err = VerbKind::Int
            .convert("300", &mut Target::from(&mut n))
            .unwrap_err();
        assert!(matches!(err, ConvertError::InvalidInt { .. }));
        assert!(err.to_string().starts_with("error converting '300' to integer"));
    }

    #[test]
    fn test_convert_int_without_digits() {
        let mut n = 0i64;
        let err = VerbKind::Int
            .convert("abc", &mut Target::from(&mut n))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected one or more leading numeric characters, got 'abc'"
        );
    }

    #[test]
    fn test_convert_bool_literals() {
        let mut b = false;
        for (text, expected, used) in [
            ("1", true, 1),
            ("TRUE", true, 4),
            ("f", false, 1),
            ("false,", false, 5),
        ] {
            let n = VerbKind::Bool
                .convert(text, &mut Target::from(&mut b))
                .unwrap();
            assert_eq!(b, expected, "{text}");
            assert_eq!(n, used, "{text}");
        }
    }

    #[test]
    fn test_convert_bool_rejects_unknown_literal() {
        let mut b = false;
        let err = VerbKind::Bool
            .convert("tf", &mut Target::from(&mut b))
            .unwrap_err();
        assert_eq!(err, ConvertError::InvalidBool { text: "tf".into() });

        let err = VerbKind::Bool
            .convert("yes", &mut Target::from(&mut b))
            .unwrap_err();
        assert!(matches!(err, ConvertError::NoLeadingChars { .. }));
    }

    #[test]
    fn test_convert_wrong_target() {
        let mut n = 0i32;
        let err = VerbKind::String
            .convert("number", &mut Target::from(&mut n))
            .unwrap_err();
        assert_eq!(err.to_string(), "expected string target, got i32");
    }
}
