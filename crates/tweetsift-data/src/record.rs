//! Records - Tweet Rows
//!
//! Defines the row types flowing through the pipeline: raw `Record`s whose
//! text cell may hold any scalar (or nothing), and `CleanedRecord`s with
//! normalized text and an integer class. Serialized field names follow the
//! source table's columns, `tweets` and `class`.
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::label::ClassCode;

// =============================================================================
// Field
// =============================================================================

/// A dynamically-typed table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Field {
    /// A string value.
    Text(String),
    /// An integer value.
    Integer(i64),
    /// A floating-point value.
    Float(f64),
    /// A missing value.
    Missing,
}

/// Hashable identity of a cell; all NaNs compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum FieldKey<'a> {
    Text(&'a str),
    Integer(i64),
    Float(u64),
    Missing,
}

impl Field {
    /// Returns the string if this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true for missing cells and NaN floats.
    pub fn is_missing(&self) -> bool {
        match self {
            Self::Missing => true,
            Self::Float(f) => f.is_nan(),
            _ => false,
        }
    }

    /// String form used for cleaning and comparison.
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(s) => Cow::Borrowed(s),
            other => Cow::Owned(other.to_string()),
        }
    }

    pub(crate) fn key(&self) -> FieldKey<'_> {
        match self {
            Self::Text(s) => FieldKey::Text(s),
            Self::Integer(i) => FieldKey::Integer(*i),
            Self::Float(f) if f.is_nan() => FieldKey::Missing,
            Self::Float(f) => FieldKey::Float(f.to_bits()),
            Self::Missing => FieldKey::Missing,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) if x.is_nan() => f.write_str("nan"),
            Self::Float(x) if x.is_infinite() => {
                f.write_str(if x.is_sign_positive() { "inf" } else { "-inf" })
            }
            Self::Float(x) if *x != 0.0 && (x.abs() >= 1e16 || x.abs() < 1e-4) => {
                write_exponent(f, *x)
            }
            Self::Float(x) if x.fract() == 0.0 => write!(f, "{x:.1}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Missing => f.write_str("nan"),
        }
    }
}

/// Writes `x` as `<mantissa>e<sign><exponent>` with a signed, at least
/// two-digit exponent (`1e+16`, `1.5e-05`).
fn write_exponent(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    let formatted = format!("{x:e}");
    let (mantissa, exponent) = formatted.split_once('e').unwrap_or((formatted.as_str(), "0"));
    let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;
    let sign = if exponent < 0 { '-' } else { '+' };
    write!(f, "{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}

impl From<&str> for Field {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Field {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for Field {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<f64> for Field {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl<T: Into<Field>> From<Option<T>> for Field {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

// =============================================================================
// LabeledText Trait
// =============================================================================

/// A row with a text body and a class label.
pub trait LabeledText {
    /// The label type compared against a target class.
    type Label: PartialEq + ?Sized;

    /// The row's text in string form.
    fn text(&self) -> Cow<'_, str>;

    /// The row's label.
    fn label(&self) -> &Self::Label;
}

// =============================================================================
// Record
// =============================================================================

/// One raw tweet and its label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// The tweet text; may be a non-string cell.
    #[serde(rename = "tweets", alias = "tweet", alias = "text")]
    pub text: Field,
    /// One of `regular`, `sarcasm`, `irony`, `figurative`.
    #[serde(rename = "class", alias = "label")]
    pub label: String,
}

impl Record {
    /// Creates a new record.
    pub fn new(text: impl Into<Field>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}

impl LabeledText for Record {
    type Label = str;

    fn text(&self) -> Cow<'_, str> {
        self.text.to_text()
    }

    fn label(&self) -> &str {
        &self.label
    }
}

// =============================================================================
// CleanedRecord
// =============================================================================

/// A normalized tweet with its encoded class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedRecord {
    /// Normalized, space-joined lowercase tokens.
    #[serde(rename = "tweets")]
    pub text: String,
    /// Binary class code.
    pub class: ClassCode,
}

impl CleanedRecord {
    /// Creates a new cleaned record.
    pub fn new(text: impl Into<String>, class: ClassCode) -> Self {
        Self {
            text: text.into(),
            class,
        }
    }
}

impl LabeledText for CleanedRecord {
    type Label = ClassCode;

    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }

    fn label(&self) -> &ClassCode {
        &self.class
    }
}

// =============================================================================
// Tests
// =============================================================================
