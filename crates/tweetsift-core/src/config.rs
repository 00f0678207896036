//! Config - Configuration File Handling
//!
//! Handles parsing and validation of Tweetsift configuration files
//! (`tweetsift.toml`). Every field has a default, so an empty file is a
//! valid configuration.
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

// =============================================================================
// Top-level Configuration
// =============================================================================

/// Toolkit configuration (tweetsift.toml)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TweetsiftConfig {
    /// Dataset pipeline configuration
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Word cloud rendering configuration
    #[serde(default)]
    pub wordcloud: WordCloudConfig,
}

// =============================================================================
// Pipeline Configuration
// =============================================================================

/// Label handling for the dataset pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Records carrying any of these labels are dropped before deduplication.
    #[serde(default = "default_excluded_labels")]
    pub excluded_labels: Vec<String>,

    /// Labels merged into the `sarcasm_irony` class.
    #[serde(default = "default_collapsed_labels")]
    pub collapsed_labels: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            excluded_labels: default_excluded_labels(),
            collapsed_labels: default_collapsed_labels(),
        }
    }
}

fn default_excluded_labels() -> Vec<String> {
    vec!["figurative".to_string()]
}
fn default_collapsed_labels() -> Vec<String> {
    vec!["sarcasm".to_string(), "irony".to_string()]
}

// =============================================================================
// Word Cloud Configuration
// =============================================================================

/// Canvas and layout settings for word clouds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordCloudConfig {
    /// Canvas width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Canvas height in pixels
    #[serde(default = "default_height")]
    pub height: u32,

    /// Background colour as RGB
    #[serde(default)]
    pub background: [u8; 3],

    /// Maximum number of words drawn
    #[serde(default = "default_max_words")]
    pub max_words: usize,

    /// Smallest font size before layout stops
    #[serde(default = "default_min_font_size")]
    pub min_font_size: u32,

    /// Largest font size; derived from the two heaviest words when unset
    #[serde(default)]
    pub max_font_size: Option<u32>,

    /// Font size decrement when a word does not fit
    #[serde(default = "default_font_step")]
    pub font_step: u32,

    /// How strongly frequency drives font size (0 = rank only, 1 = linear)
    #[serde(default = "default_relative_scaling")]
    pub relative_scaling: f64,

    /// Free pixels kept around every word
    #[serde(default = "default_margin")]
    pub margin: u32,

    /// Seed for word colours
    #[serde(default = "default_random_state")]
    pub random_state: u64,
}

impl Default for WordCloudConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: [0, 0, 0],
            max_words: default_max_words(),
            min_font_size: default_min_font_size(),
            max_font_size: None,
            font_step: default_font_step(),
            relative_scaling: default_relative_scaling(),
            margin: default_margin(),
            random_state: default_random_state(),
        }
    }
}

fn default_width() -> u32 {
    800
}
fn default_height() -> u32 {
    400
}
fn default_max_words() -> usize {
    200
}
fn default_min_font_size() -> u32 {
    4
}
fn default_font_step() -> u32 {
    1
}
fn default_relative_scaling() -> f64 {
    0.5
}
fn default_margin() -> u32 {
    2
}
fn default_random_state() -> u64 {
    42
}

/// Largest accepted canvas side in pixels.
pub const MAX_CANVAS_SIDE: u32 = 16_384;

impl WordCloudConfig {
    /// Checks that the settings describe a drawable canvas.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::config(format!(
                "canvas must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > MAX_CANVAS_SIDE || self.height > MAX_CANVAS_SIDE {
            return Err(Error::config(format!(
                "canvas sides are limited to {MAX_CANVAS_SIDE} pixels, got {}x{}",
                self.width, self.height
            )));
        }
        if self.font_step == 0 {
            return Err(Error::config("font_step must be at least 1"));
        }
        if self.min_font_size == 0 {
            return Err(Error::config("min_font_size must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.relative_scaling) {
            return Err(Error::config(format!(
                "relative_scaling must be within [0, 1], got {}",
                self.relative_scaling
            )));
        }
        Ok(())
    }
}

// =============================================================================
// Configuration Loading
// =============================================================================

impl TweetsiftConfig {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: TweetsiftConfig = toml::from_str(&content)?;
        config.wordcloud.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TweetsiftConfig::default();
        assert_eq!(config.pipeline.excluded_labels, vec!["figurative"]);
        assert_eq!(config.pipeline.collapsed_labels, vec!["sarcasm", "irony"]);
        assert_eq!(config.wordcloud.width, 800);
        assert_eq!(config.wordcloud.height, 400);
        assert_eq!(config.wordcloud.background, [0, 0, 0]);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let parsed: TweetsiftConfig = toml::from_str("").unwrap();
        assert_eq!(parsed, TweetsiftConfig::default());
    }

    #[test]
    fn test_partial_section() {
        let parsed: TweetsiftConfig = toml::from_str(
            r#"
            [wordcloud]
            width = 400
            max_font_size = 120
            "#,
        )
        .unwrap();
        assert_eq!(parsed.wordcloud.width, 400);
        assert_eq!(parsed.wordcloud.height, 400);
        assert_eq!(parsed.wordcloud.max_font_size, Some(120));
        assert_eq!(parsed.pipeline, PipelineConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tweetsift.toml");

        let mut config = TweetsiftConfig::default();
        config.pipeline.excluded_labels.push("satire".to_string());
        config.save(&path).unwrap();

        let loaded = TweetsiftConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_rejects_bad_canvas() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tweetsift.toml");
        std::fs::write(&path, "[wordcloud]\nwidth = 0\n").unwrap();

        let err = TweetsiftConfig::load(&path).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_validate_canvas_limits() {
        let mut config = WordCloudConfig {
            width: MAX_CANVAS_SIDE,
            height: MAX_CANVAS_SIDE,
            ..WordCloudConfig::default()
        };
        assert!(config.validate().is_ok());

        config.width = 70_000;
        config.height = 70_000;
        assert!(matches!(config.validate(), Err(Error::Config { .. })));

        config.width = 800;
        config.height = u32::MAX;
        assert!(matches!(config.validate(), Err(Error::Config { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let err = TweetsiftConfig::load("/nonexistent/tweetsift.toml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
