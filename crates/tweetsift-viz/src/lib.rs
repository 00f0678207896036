//! tweetsift-viz - Word-Frequency Clouds
//!
//! Renders word clouds for one class of a tweet dataset:
//! - `frequency`: word extraction, stopword removal and normalized weights
//! - `layout`: relative font scaling and spiral placement over an integral image
//! - `font`: an embedded 5x7 bitmap font
//! - `wordcloud`: the `WordCloud` generator returning an `image::RgbImage`
//!
//! # Example
//!
//! ```ignore
//! use tweetsift_viz::prelude::*;
//! use tweetsift_data::{ClassCode, CleanedRecord};
//!
//! let records = vec![CleanedRecord::new("love mondays", ClassCode::SarcasmIrony)];
//! let cloud = plot_wordcloud(&records, &ClassCode::SarcasmIrony)?;
//! assert_eq!(cloud.image().dimensions(), (800, 400));
//! ```
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]

pub mod font;
pub mod frequency;
pub mod layout;
pub mod wordcloud;

// =============================================================================
// Re-exports
// =============================================================================

pub use font::TextMask;
pub use frequency::{FrequencyCounter, WordFrequency};
pub use layout::{hsl_to_rgb, IntegralImage, Layout, LayoutEngine, PlacedWord};
pub use wordcloud::{plot_wordcloud, WordCloud, WordCloudImage};

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for word clouds.
pub mod prelude {
    pub use crate::{
        plot_wordcloud, FrequencyCounter, Layout, PlacedWord, WordCloud, WordCloudImage,
        WordFrequency,
    };
    pub use tweetsift_core::WordCloudConfig;
}
