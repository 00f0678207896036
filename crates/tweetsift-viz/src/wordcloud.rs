//! Word Cloud - Class Word-Frequency Rendering
//!
//! Collects the texts of one class, counts their words and renders the
//! frequency layout onto an RGB canvas (800x400 on black by default). The
//! result is returned to the caller, who decides whether to display or save
//! it.
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use std::path::Path;

use image::{Rgb, RgbImage};
use tracing::{debug, info};
use tweetsift_core::{Error, Result, WordCloudConfig};
use tweetsift_data::LabeledText;
use tweetsift_text::{EnglishStopwords, StopwordSet};

use crate::font::TextMask;
use crate::frequency::{FrequencyCounter, WordFrequency};
use crate::layout::{Layout, LayoutEngine, PlacedWord};

// =============================================================================
// WordCloudImage
// =============================================================================

/// A rendered cloud with the layout it was drawn from.
#[derive(Debug, Clone)]
pub struct WordCloudImage {
    layout: Layout,
    image: RgbImage,
}

impl WordCloudImage {
    /// The rendered raster.
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Consumes the cloud, returning the raster.
    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// The word placements.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Placed words, most frequent first.
    pub fn words(&self) -> &[PlacedWord] {
        &self.layout.words
    }

    /// Writes the raster to `path`; the format follows the extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.image
            .save(path.as_ref())
            .map_err(|e| Error::render(format!("failed to save {}: {e}", path.as_ref().display())))
    }
}

// =============================================================================
// WordCloud
// =============================================================================

/// Word-cloud generator.
#[derive(Debug, Clone)]
pub struct WordCloud<S = EnglishStopwords> {
    config: WordCloudConfig,
    counter: FrequencyCounter<S>,
}

impl WordCloud {
    /// Creates a generator with the default 800x400 black canvas.
    #[must_use]
    pub fn new() -> Self {
        let config = WordCloudConfig::default();
        let counter = FrequencyCounter::new(config.max_words);
        Self { config, counter }
    }

    /// Creates a generator from custom settings.
    pub fn with_config(config: WordCloudConfig) -> Result<Self> {
        config.validate()?;
        let counter = FrequencyCounter::new(config.max_words);
        Ok(Self { config, counter })
    }
}

impl Default for WordCloud {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StopwordSet> WordCloud<S> {
    /// Replaces the stopword set used when counting words.
    pub fn with_stopwords<T: StopwordSet>(self, stopwords: T) -> WordCloud<T> {
        WordCloud {
            counter: FrequencyCounter::with_stopwords(stopwords, self.config.max_words),
            config: self.config,
        }
    }

    /// The active settings.
    pub fn config(&self) -> &WordCloudConfig {
        &self.config
    }

    /// Renders the words of every record labeled `class`.
    ///
    /// Works with raw records (`class: &str`) and cleaned ones
    /// (`class: &ClassCode`).
    pub fn generate_for_class<'a, R, I>(&self, records: I, class: &R::Label) -> Result<WordCloudImage>
    where
        R: LabeledText + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        let mut matched = 0usize;
        let text = records
            .into_iter()
            .filter(|r| r.label() == class)
            .inspect(|_| matched += 1)
            .map(|r| r.text().into_owned())
            .collect::<Vec<_>>()
            .join(" ");
        debug!(records = matched, "Collected texts for word cloud");

        if matched == 0 {
            return Err(Error::empty_text("no records carry the requested class"));
        }
        self.generate_from_text(&text)
    }

    /// Renders the words of a single text.
    pub fn generate_from_text(&self, text: &str) -> Result<WordCloudImage> {
        let frequencies = self.counter.frequencies(text);
        self.generate_from_frequencies(&frequencies)
    }

    /// Renders precomputed frequencies, sorted by descending weight.
    pub fn generate_from_frequencies(&self, frequencies: &[WordFrequency]) -> Result<WordCloudImage> {
        if frequencies.is_empty() {
            return Err(Error::empty_text("word cloud input has no countable words"));
        }

        let layout = LayoutEngine::new(&self.config).layout(frequencies);
        info!(
            words = frequencies.len(),
            placed = layout.words.len(),
            width = self.config.width,
            height = self.config.height,
            "Rendering word cloud"
        );

        let image = self.render(&layout);
        Ok(WordCloudImage { layout, image })
    }

    fn render(&self, layout: &Layout) -> RgbImage {
        let mut image = RgbImage::from_pixel(layout.width, layout.height, Rgb(self.config.background));
        for word in &layout.words {
            let mask = TextMask::render(&word.word, word.font_size);
            for dy in 0..mask.height() {
                for dx in 0..mask.width() {
                    let (x, y) = (word.x + dx, word.y + dy);
                    if mask.get(dx, dy) && x < layout.width && y < layout.height {
                        image.put_pixel(x, y, Rgb(word.color));
                    }
                }
            }
        }
        image
    }
}

/// Renders the default cloud for one class.
pub fn plot_wordcloud<'a, R, I>(records: I, class: &R::Label) -> Result<WordCloudImage>
where
    R: LabeledText + 'a,
    I: IntoIterator<Item = &'a R>,
{
    WordCloud::new().generate_for_class(records, class)
}

// =============================================================================
// Tests
// =============================================================================
