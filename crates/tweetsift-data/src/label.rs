//! Labels - Binary Class Encoding
//!
//! The classifier sees two classes: regular speech and sarcasm/irony. The
//! label table is closed; anything else reaching the encoder is an upstream
//! contract violation and fails the lookup.
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use tweetsift_core::{Error, Result};

/// Label string for class 0.
pub const REGULAR_LABEL: &str = "regular";
/// Label string for class 1, the merge of `sarcasm` and `irony`.
pub const SARCASM_IRONY_LABEL: &str = "sarcasm_irony";

// =============================================================================
// ClassCode
// =============================================================================

/// Binary class code. Serializes as its integer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum ClassCode {
    /// Regular speech.
    Regular = 0,
    /// Sarcasm or irony.
    SarcasmIrony = 1,
}

impl ClassCode {
    /// Both classes in code order.
    pub const ALL: [ClassCode; 2] = [Self::Regular, Self::SarcasmIrony];

    /// The integer code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// The label string this code encodes.
    pub fn label(self) -> &'static str {
        match self {
            Self::Regular => REGULAR_LABEL,
            Self::SarcasmIrony => SARCASM_IRONY_LABEL,
        }
    }

    /// Looks up a label string.
    pub fn from_label(label: &str) -> Result<Self> {
        match label {
            REGULAR_LABEL => Ok(Self::Regular),
            SARCASM_IRONY_LABEL => Ok(Self::SarcasmIrony),
            other => Err(Error::unknown_label(other)),
        }
    }
}

impl From<ClassCode> for u8 {
    fn from(code: ClassCode) -> Self {
        code.code()
    }
}

impl TryFrom<u8> for ClassCode {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Self::Regular),
            1 => Ok(Self::SarcasmIrony),
            other => Err(Error::unknown_label(other.to_string())),
        }
    }
}

impl Display for ClassCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// =============================================================================
// LabelEncoder
// =============================================================================

/// Maps label strings to class codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelEncoder;

impl LabelEncoder {
    /// Creates a new encoder.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Encodes a label, coercing it to its string form first.
    pub fn encode<L: Display + ?Sized>(&self, label: &L) -> Result<ClassCode> {
        ClassCode::from_label(&label.to_string())
    }

    /// Decodes an integer code back to its label string.
    pub fn decode(&self, code: u8) -> Result<&'static str> {
        ClassCode::try_from(code).map(ClassCode::label)
    }

    /// Label strings in code order.
    pub fn classes(&self) -> [&'static str; 2] {
        [REGULAR_LABEL, SARCASM_IRONY_LABEL]
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known_labels() {
        let encoder = LabelEncoder::new();
        assert_eq!(encoder.encode("regular").unwrap(), ClassCode::Regular);
        assert_eq!(encoder.encode("sarcasm_irony").unwrap(), ClassCode::SarcasmIrony);
        assert_eq!(encoder.encode("sarcasm_irony").unwrap().code(), 1);
    }

    #[test]
    fn test_encode_uncollapsed_label_fails() {
        let encoder = LabelEncoder::new();
        for label in ["sarcasm", "irony", "figurative", "Regular", ""] {
            match encoder.encode(label).unwrap_err() {
                Error::UnknownLabel { label: got } => assert_eq!(got, label),
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_encode_coerces_to_string() {
        let encoder = LabelEncoder::new();
        let err = encoder.encode(&0).unwrap_err();
        match err {
            Error::UnknownLabel { label } => assert_eq!(label, "0"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_decode() {
        let encoder = LabelEncoder::new();
        assert_eq!(encoder.decode(0).unwrap(), "regular");
        assert_eq!(encoder.decode(1).unwrap(), "sarcasm_irony");
        assert!(encoder.decode(2).is_err());
    }

    #[test]
    fn test_class_code_serde() {
        assert_eq!(serde_json::to_string(&ClassCode::SarcasmIrony).unwrap(), "1");
        let code: ClassCode = serde_json::from_str("0").unwrap();
        assert_eq!(code, ClassCode::Regular);
        assert!(serde_json::from_str::<ClassCode>("5").is_err());
    }
}
