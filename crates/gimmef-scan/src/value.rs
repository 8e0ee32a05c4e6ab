//! Owned scan results, for callers that do not supply their own slots.

use crate::assign::Target;
use crate::error::ConvertError;
use crate::verb::VerbKind;
use std::fmt;

/// An owned value of a verb's natural type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    String(String),
}

impl Value {
    pub fn default_for(kind: VerbKind) -> Self {
        match kind {
            VerbKind::Bool => Value::Bool(false),
            VerbKind::Int => Value::Int(0),
            VerbKind::String => Value::String(String::new()),
        }
    }

    pub fn as_target(&mut self) -> Target<'_> {
        match self {
            Value::Bool(b) => Target::Bool(b),
            Value::Int(n) => Target::I64(n),
            Value::String(s) => Target::Str(s),
        }
    }

    pub fn as_bool(&self) -> Result<bool, ConvertError> {
        match self {
            Value::Bool(b) => Ok(*b),
            _ => Err(self.type_error("bool")),
        }
    }

    pub fn as_int(&self) -> Result<i64, ConvertError> {
        match self {
            Value::Int(n) => Ok(*n),
            _ => Err(self.type_error("i64")),
        }
    }

    pub fn as_str(&self) -> Result<&str, ConvertError> {
        match self {
            Value::String(s) => Ok(s),
            _ => Err(self.type_error("String")),
        }
    }

    pub fn kind(&self) -> VerbKind {
        match self {
            Value::Bool(_) => VerbKind::Bool,
            Value::Int(_) => VerbKind::Int,
            Value::String(_) => VerbKind::String,
        }
    }

    fn type_error(&self, requested: &'static str) -> ConvertError {
        ConvertError::WrongValue {
            requested,
            held: self.kind().name(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
        }
    }
}
