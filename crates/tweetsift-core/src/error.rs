//! Error Types - Tweetsift Error Handling
//!
//! Provides the error type shared by every stage of the toolkit: label
//! encoding, configuration loading, and word-cloud rendering.
//!
//! # Key Features
//! - Unified error type for all Tweetsift operations
//! - Conversions from I/O and TOML errors
//! - Integration with `std::error::Error`
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use thiserror::Error;

// =============================================================================
// Error Types
// =============================================================================

/// The main error type for Tweetsift operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A label reached the encoder that is not in the class table.
    ///
    /// Signals that label collapsing was skipped upstream or that a new
    /// label category appeared in the data.
    #[error("Unknown label: '{label}'")]
    UnknownLabel {
        /// The label that failed the lookup.
        label: String,
    },

    /// An operation needed at least one word but got none.
    #[error("No words to process in {context}")]
    EmptyText {
        /// Where the empty input was found.
        context: String,
    },

    /// Invalid or unreadable configuration.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration problem.
        message: String,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Description of the serialization error.
        message: String,
    },

    /// The word cloud could not be laid out or drawn.
    #[error("Render error: {message}")]
    Render {
        /// Description of the rendering error.
        message: String,
    },
}

// =============================================================================
// Result Type
// =============================================================================

/// A specialized Result type for Tweetsift operations.
pub type Result<T> = core::result::Result<T, Error>;

// =============================================================================
// Helper Functions
// =============================================================================

impl Error {
    /// Creates a new unknown label error.
    #[must_use]
    pub fn unknown_label(label: impl Into<String>) -> Self {
        Self::UnknownLabel {
            label: label.into(),
        }
    }

    /// Creates a new empty text error.
    #[must_use]
    pub fn empty_text(context: impl Into<String>) -> Self {
        Self::EmptyText {
            context: context.into(),
        }
    }

    /// Creates a new configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a new render error.
    #[must_use]
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }
}

// =============================================================================
// Error Conversion
// =============================================================================

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::config(e.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Self::Serialization {
            message: e.to_string(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
