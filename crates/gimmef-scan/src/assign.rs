//! Typed output slots and the assignment of captured text to them.

use crate::error::{Result, ScanError};
use crate::matcher::CaptureGroup;
use crate::verb::{Verb, VerbKind};

/// A caller-owned destination for one scanned value.
///
/// Build one with `Target::from(&mut value)` or the [`targets!`](crate::targets)
/// macro.
#[derive(Debug)]
pub enum Target<'a> {
    Bool(&'a mut bool),
    Str(&'a mut String),
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    Isize(&'a mut isize),
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    Usize(&'a mut usize),
}

impl Target<'_> {
    pub fn type_name(&self) -> &'static str {
        match self {
            Target::Bool(_) => "bool",
            Target::Str(_) => "String",
            Target::I8(_) => "i8",
            Target::I16(_) => "i16",
            Target::I32(_) => "i32",
            Target::I64(_) => "i64",
            Target::Isize(_) => "isize",
            Target::U8(_) => "u8",
            Target::U16(_) => "u16",
            Target::U32(_) => "u32",
            Target::U64(_) => "u64",
            Target::Usize(_) => "usize",
        }
    }

    /// Whether a value of `kind` can be written to this target.
    pub fn accepts(&self, kind: VerbKind) -> bool {
        match self {
            Target::Bool(_) => kind == VerbKind::Bool,
            Target::Str(_) => kind == VerbKind::String,
            _ => kind == VerbKind::Int,
        }
    }
}

macro_rules! impl_from_slot {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl<'a> From<&'a mut $ty> for Target<'a> {
                fn from(slot: &'a mut $ty) -> Self {
                    Target::$variant(slot)
                }
            }
        )*
    };
}

impl_from_slot! {
    bool => Bool,
    String => Str,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
}

/// Builds a `&mut [Target]` from a list of mutable places.
///
/// ```
/// let (mut a, mut b) = (0u16, String::new());
/// gimmef_scan::scan("7 dwarves", "%d %s", gimmef_scan::targets![a, b]).unwrap();
/// assert_eq!((a, b.as_str()), (7, "dwarves"));
/// ```
#[macro_export]
macro_rules! targets {
    ($($place:expr),* $(,)?) => {
        &mut [$($crate::Target::from(&mut $place)),*]
    };
}

/// Writes one value per verb of every capture group into `targets`, in order.
///
/// Within a group, adjacent verbs compete for the same text: each verb takes
/// what it can from the front of what the previous verbs left behind.
pub(crate) fn assign(groups: &[CaptureGroup<'_, '_>], targets: &mut [Target<'_>]) -> Result<()> {
    let mut index = 0;

    for group in groups {
        let mut rest = group.text;

        for (position, verb) in group.verbs.iter().enumerate() {
            let Some(target) = targets.get_mut(index) else {
                return Err(ScanError::Bug(format!(
                    "no target at index {index} for next verb '{verb}' and substring '{rest}'"
                ))
                .at_index(index));
            };

            let bounded = position + 1 < group.verbs.len();
            rest = assign_next(group.text, rest, position, verb, bounded, target)
                .map_err(|e| e.at_index(index))?;

            index += 1;
        }
    }

    Ok(())
}

/// Converts the front of `rest` for `verb`, returning what is left over.
fn assign_next<'s>(
    group_text: &str,
    rest: &'s str,
    position: usize,
    verb: &Verb,
    bounded: bool,
    target: &mut Target<'_>,
) -> Result<&'s str> {
    if rest.is_empty() {
        let message = if position == 0 {
            format!("captured substring '{group_text}' is empty for verb '{verb}'")
        } else {
            format!(
                "all of substring '{group_text}' consumed by prior adjacent verb(s), none left for next verb '{verb}'"
            )
        };
        return Err(ScanError::EmptyCapture(message));
    }

    let trimmed = rest.trim_start();
    let mut end = trimmed.len();
    if bounded || verb.kind().stops_at_whitespace() {
        if let Some(space) = trimmed.find(char::is_whitespace) {
            end = space;
        }
    }
    if let Some(width) = verb.max_width() {
        if let Some((limit, _)) = trimmed.char_indices().nth(width) {
            end = end.min(limit);
        }
    }

    let consumed = verb.kind().convert(&trimmed[..end], target)?;
    Ok(&trimmed[consumed.min(end)..])
}
