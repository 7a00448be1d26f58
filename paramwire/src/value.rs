//! Typed parameter values and text coercion.
//!
//! Every value handed to a [`crate::Configurable`] mutator is one of the
//! closed set of shapes in [`ParamValue`]. Scalars arrive from the document
//! as text and are coerced to the first [`ValueKind`] in
//! [`ValueKind::SCALAR_PRIORITY`] that the target accepts.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::Serialize;

use crate::BoxError;

/// Insertion-ordered text mapping used for map-shaped parameters.
pub type TextMap = IndexMap<String, String>;

/// Tag identifying the shape a mutator accepts.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// Verbatim text.
    Text,
    /// `true` or `false`.
    Bool,
    /// 64-bit signed integer.
    Int64,
    /// 32-bit signed integer.
    Int32,
    /// Double-precision float.
    Float64,
    /// Single-precision float.
    Float32,
    /// Ordered sequence of text entries.
    ListOfText,
    /// Insertion-ordered text-to-text mapping.
    MapOfText,
}

impl ValueKind {
    /// Order in which scalar mutators are probed. The first accepted kind
    /// wins; a coercion failure against it is final.
    pub const SCALAR_PRIORITY: [Self; 6] = [
        Self::Text,
        Self::Bool,
        Self::Int64,
        Self::Int32,
        Self::Float64,
        Self::Float32,
    ];

    /// Returns the human-readable name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Bool => "boolean",
            Self::Int64 => "64-bit integer",
            Self::Int32 => "32-bit integer",
            Self::Float64 => "double",
            Self::Float32 => "float",
            Self::ListOfText => "list of text",
            Self::MapOfText => "map of text",
        }
    }

    /// Returns `true` for the six scalar kinds.
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        !matches!(self, Self::ListOfText | Self::MapOfText)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parameter value after classification and coercion.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ParamValue {
    /// Verbatim text.
    Text(String),
    /// Parsed boolean.
    Bool(bool),
    /// Parsed 64-bit integer.
    Int64(i64),
    /// Parsed 32-bit integer.
    Int32(i32),
    /// Parsed double.
    Float64(f64),
    /// Parsed float.
    Float32(f32),
    /// Ordered list entries.
    ListOfText(Vec<String>),
    /// Ordered map entries.
    MapOfText(TextMap),
}

impl ParamValue {
    /// Returns the tag for this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Text(_) => ValueKind::Text,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int64(_) => ValueKind::Int64,
            Self::Int32(_) => ValueKind::Int32,
            Self::Float64(_) => ValueKind::Float64,
            Self::Float32(_) => ValueKind::Float32,
            Self::ListOfText(_) => ValueKind::ListOfText,
            Self::MapOfText(_) => ValueKind::MapOfText,
        }
    }

    /// Coerces scalar `text` into a value of `kind`.
    ///
    /// Integers are parsed as written; booleans and floats tolerate
    /// surrounding whitespace. Booleans accept `true`/`false` in any ASCII
    /// case and nothing else.
    ///
    /// # Errors
    ///
    /// Returns the parse failure when `text` is not a valid `kind`, or when
    /// `kind` is not a scalar kind.
    pub fn coerce(text: &str, kind: ValueKind) -> Result<Self, BoxError> {
        Ok(match kind {
            ValueKind::Text => Self::Text(text.to_owned()),
            ValueKind::Bool => Self::Bool(parse_bool(text)?),
            ValueKind::Int64 => Self::Int64(parse_number(text)?),
            ValueKind::Int32 => Self::Int32(parse_number(text)?),
            ValueKind::Float64 => Self::Float64(parse_number(text.trim())?),
            ValueKind::Float32 => Self::Float32(parse_number(text.trim())?),
            ValueKind::ListOfText | ValueKind::MapOfText => {
                return Err(format!("{kind} is not a scalar kind").into());
            }
        })
    }
}

fn parse_bool(text: &str) -> Result<bool, BoxError> {
    let trimmed = text.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(format!("expected 'true' or 'false', found '{text}'").into())
    }
}

fn parse_number<T>(text: &str) -> Result<T, BoxError>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    text.parse::<T>().map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("42", ValueKind::Int32, ParamValue::Int32(42))]
    #[case("-7", ValueKind::Int64, ParamValue::Int64(-7))]
    #[case("TRUE", ValueKind::Bool, ParamValue::Bool(true))]
    #[case(" False ", ValueKind::Bool, ParamValue::Bool(false))]
    #[case(" 2.5 ", ValueKind::Float64, ParamValue::Float64(2.5))]
    #[case("0.25", ValueKind::Float32, ParamValue::Float32(0.25))]
    #[case("", ValueKind::Text, ParamValue::Text(String::new()))]
    fn coerces_scalars(#[case] text: &str, #[case] kind: ValueKind, #[case] expected: ParamValue) {
        let value = ParamValue::coerce(text, kind).expect("value coerces");
        assert_eq!(value, expected);
        assert_eq!(value.kind(), kind);
    }

    #[rstest]
    #[case("abc", ValueKind::Int32)]
    #[case(" 42", ValueKind::Int32)]
    #[case("2147483648", ValueKind::Int32)]
    #[case("yes", ValueKind::Bool)]
    #[case("", ValueKind::Float64)]
    #[case("x", ValueKind::ListOfText)]
    fn rejects_unparseable_text(#[case] text: &str, #[case] kind: ValueKind) {
        assert!(ParamValue::coerce(text, kind).is_err());
    }

    #[test]
    fn scalar_priority_starts_with_text_and_ends_with_float() {
        assert_eq!(ValueKind::SCALAR_PRIORITY.first(), Some(&ValueKind::Text));
        assert_eq!(ValueKind::SCALAR_PRIORITY.last(), Some(&ValueKind::Float32));
        assert!(ValueKind::SCALAR_PRIORITY.iter().all(|kind| kind.is_scalar()));
    }
}
