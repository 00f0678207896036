//! Tweetsift Core - Foundation Layer for the Tweetsift Toolkit
//!
//! This crate provides the shared error type and the configuration file
//! format used by every other Tweetsift crate.
//!
//! # Key Features
//! - Unified error type for normalization, encoding and rendering
//! - TOML configuration with defaults for the pipeline and word clouds
//!
//! # Example
//! ```rust
//! use tweetsift_core::TweetsiftConfig;
//!
//! let config = TweetsiftConfig::default();
//! assert_eq!(config.wordcloud.width, 800);
//! ```
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{PipelineConfig, TweetsiftConfig, WordCloudConfig, MAX_CANVAS_SIDE};
pub use error::{Error, Result};
