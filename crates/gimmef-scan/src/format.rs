//! Format string compiler.
//!
//! Splits a format such as `%d + %d = %d` into its verbs and the literal
//! segments between them, using winnow for tokenization.

use crate::error::{Result, ScanError};
use crate::verb::{is_flag, Verb, VerbKind, PERCENT};
use winnow::combinator::{alt, opt};
use winnow::prelude::*;
use winnow::token::{any, take_till, take_while};

/// A literal run of the format, with `%%` already collapsed to `%`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    text: String,
    offset: usize,
}

impl Segment {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte offset of the segment's first character in the original format.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

// ============ Tokenizer ============

#[derive(Debug, Clone, PartialEq)]
enum Token<'a> {
    Literal(&'a str),
    Percent,
    Directive { flags: &'a str, code: Option<char> },
}

fn literal<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    take_till(1.., PERCENT).parse_next(input)
}

fn directive<'a>(input: &mut &'a str) -> ModalResult<Token<'a>> {
    PERCENT.parse_next(input)?;
    alt((
        PERCENT.value(Token::Percent),
        (take_while(0.., is_flag), opt(any))
            .map(|(flags, code)| Token::Directive { flags, code }),
    ))
    .parse_next(input)
}

fn token<'a>(input: &mut &'a str) -> ModalResult<Token<'a>> {
    alt((literal.map(Token::Literal), directive)).parse_next(input)
}

// ============ Compiler ============

fn push_literal(pending: &mut Option<(usize, String)>, offset: usize, text: &str) {
    match pending {
        Some((_, literal)) => literal.push_str(text),
        None => *pending = Some((offset, text.to_string())),
    }
}

fn directive_verb(offset: usize, flags: &str, code: Option<char>) -> Result<Verb> {
    let Some(code) = code else {
        return Err(ScanError::BadArgument(format!(
            "incomplete verb '{PERCENT}{flags}' at end of format"
        )));
    };

    match VerbKind::from_code(code) {
        Some(kind) => Ok(Verb::new(kind, offset, flags)),
        None => Err(ScanError::BadArgument(format!(
            "unsupported verb '{PERCENT}{flags}{code}'"
        ))),
    }
}

/// Compiles `format` into its ordered verbs and literal segments.
///
/// Both verb and segment offsets index into `format` as written, so a
/// verb lies between two segments exactly when its offset does.
pub(crate) fn compile(format: &str) -> Result<(Vec<Verb>, Vec<Segment>)> {
    let mut input = format;
    let mut verbs: Vec<Verb> = Vec::new();
    let mut segments = Vec::new();
    let mut pending: Option<(usize, String)> = None;

    while !input.is_empty() {
        let offset = format.len() - input.len();
        let next = token.parse_next(&mut input).map_err(|_| {
            ScanError::BadArgument(format!("malformed format at offset {offset}"))
        })?;

        match next {
            Token::Literal(text) => push_literal(&mut pending, offset, text),
            Token::Percent => push_literal(&mut pending, offset, "%"),
            Token::Directive { flags, code } => {
                let verb = directive_verb(offset, flags, code)?;

                if let Some((start, text)) = pending.take() {
                    segments.push(Segment {
                        text,
                        offset: start,
                    });
                } else if let Some(previous) = verbs.last() {
                    if previous.kind() == verb.kind() && previous.max_width().is_none() {
                        return Err(ScanError::BadArgument(format!(
                            "found consecutive instances of verb '{PERCENT}{}' without a max width or intervening substring",
                            verb.kind().code()
                        )));
                    }
                }

                verbs.push(verb);
            }
        }
    }

    if let Some((start, text)) = pending {
        segments.push(Segment {
            text,
            offset: start,
        });
    }

    Ok((verbs, segments))
}
