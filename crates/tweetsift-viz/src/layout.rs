//! Layout - Word Placement
//!
//! Places words on the canvas in descending frequency. Each word's font size
//! follows the previous one through relative scaling, and a position is
//! searched on a square spiral around the canvas centre. Occupancy is tested
//! with an integral image so every candidate box is checked in constant time.
//! A word that does not fit shrinks by `font_step`; once it would drop below
//! `min_font_size` the layout stops.
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;
use tweetsift_core::WordCloudConfig;

use crate::font;
use crate::frequency::WordFrequency;

// =============================================================================
// Integral Image
// =============================================================================

/// Summed-area table over a boolean occupancy grid.
#[derive(Debug, Clone)]
pub struct IntegralImage {
    width: u32,
    height: u32,
    occupied: Vec<bool>,
    sums: Vec<u32>,
}

impl IntegralImage {
    /// Creates an empty grid.
    pub fn new(width: u32, height: u32) -> Self {
        let (w, h) = (width as usize, height as usize);
        Self {
            width,
            height,
            occupied: vec![false; w * h],
            sums: vec![0; (w + 1) * (h + 1)],
        }
    }

    fn cell(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    fn sum_index(&self, x: u32, y: u32) -> usize {
        y as usize * (self.width as usize + 1) + x as usize
    }

    fn sum_at(&self, x: u32, y: u32) -> u32 {
        self.sums[self.sum_index(x, y)]
    }

    /// Number of occupied pixels in the box at `(x, y)` of size `w` x `h`.
    pub fn region_sum(&self, x: u32, y: u32, w: u32, h: u32) -> u32 {
        let (x1, y1) = (x + w, y + h);
        self.sum_at(x1, y1) + self.sum_at(x, y) - self.sum_at(x, y1) - self.sum_at(x1, y)
    }

    /// Whether the box is inside the grid and entirely free.
    pub fn is_free(&self, x: u32, y: u32, w: u32, h: u32) -> bool {
        u64::from(x) + u64::from(w) <= u64::from(self.width)
            && u64::from(y) + u64::from(h) <= u64::from(self.height)
            && self.region_sum(x, y, w, h) == 0
    }

    /// Marks a box as occupied, clipped to the grid.
    pub fn fill(&mut self, x: u32, y: u32, w: u32, h: u32) {
        let x1 = x.saturating_add(w).min(self.width);
        let y1 = y.saturating_add(h).min(self.height);
        for row in y..y1 {
            for col in x..x1 {
                let cell = self.cell(col, row);
                self.occupied[cell] = true;
            }
        }
        self.recompute_from(y);
    }

    fn recompute_from(&mut self, first_row: u32) {
        for row in first_row..self.height {
            for col in 0..self.width {
                let cell = u32::from(self.occupied[self.cell(col, row)]);
                let up = self.sum_at(col + 1, row);
                let left = self.sum_at(col, row + 1);
                let diag = self.sum_at(col, row);
                let target = self.sum_index(col + 1, row + 1);
                self.sums[target] = cell + up + left - diag;
            }
        }
    }
}

// =============================================================================
// Placed Words
// =============================================================================

/// A word positioned on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    /// The word.
    pub word: String,
    /// Normalized frequency.
    pub weight: f64,
    /// Pixel height of the text.
    pub font_size: u32,
    /// Left edge of the text.
    pub x: u32,
    /// Top edge of the text.
    pub y: u32,
    /// Text width in pixels.
    pub width: u32,
    /// Text height in pixels.
    pub height: u32,
    /// Fill colour as RGB.
    pub color: [u8; 3],
}

/// The result of laying out a cloud.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layout {
    /// Canvas width.
    pub width: u32,
    /// Canvas height.
    pub height: u32,
    /// Words in placement order.
    pub words: Vec<PlacedWord>,
}

// =============================================================================
// Colours
// =============================================================================

/// Converts HSL (hue in degrees, saturation and lightness in `[0, 1]`) to RGB.
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> [u8; 3] {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h = (hue.rem_euclid(360.0)) / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    [channel(r), channel(g), channel(b)]
}

/// Random saturated colour of medium-dark lightness.
fn random_color(rng: &mut StdRng) -> [u8; 3] {
    let hue = 360.0 * f64::from(rng.gen_range(0..=255u32)) / 255.0;
    let lightness = f64::from(rng.gen_range(60..=120u32)) / 255.0;
    hsl_to_rgb(hue, 1.0, lightness)
}

// =============================================================================
// Layout Engine
// =============================================================================

/// Places weighted words according to a [`WordCloudConfig`].
#[derive(Debug, Clone)]
pub struct LayoutEngine<'a> {
    config: &'a WordCloudConfig,
}

impl<'a> LayoutEngine<'a> {
    /// Creates an engine for a validated configuration.
    pub fn new(config: &'a WordCloudConfig) -> Self {
        Self { config }
    }

    /// Lays out `words`, which must be sorted by descending weight.
    ///
    /// Without a configured `max_font_size` the starting size comes from a
    /// trial layout of the two heaviest words at full canvas height: the
    /// harmonic mean of their fitted sizes.
    pub fn layout(&self, words: &[WordFrequency]) -> Layout {
        let start = match self.config.max_font_size {
            Some(size) => size,
            None => self.initial_font_size(words),
        };
        let placed = self.place(words, start);

        debug!(
            start_font_size = start,
            placed = placed.len(),
            dropped = words.len() - placed.len(),
            "Word cloud layout complete"
        );

        Layout {
            width: self.config.width,
            height: self.config.height,
            words: placed,
        }
    }

    /// Starting font size when none is configured.
    fn initial_font_size(&self, words: &[WordFrequency]) -> u32 {
        let height = self.config.height;
        if words.len() < 2 {
            return height;
        }

        match self.place(&words[..2], height).as_slice() {
            [first, second] => {
                let (a, b) = (u64::from(first.font_size), u64::from(second.font_size));
                (2 * a * b / (a + b)) as u32
            }
            [only] => only.font_size,
            _ => height,
        }
    }

    /// Places `words` starting from `font_size`.
    fn place(&self, words: &[WordFrequency], mut font_size: u32) -> Vec<PlacedWord> {
        let config = self.config;
        let mut grid = IntegralImage::new(config.width, config.height);
        let mut rng = StdRng::seed_from_u64(config.random_state);
        let mut placed = Vec::new();

        let rs = config.relative_scaling;
        let mut last_weight = 1.0;

        for (i, entry) in words.iter().enumerate() {
            if entry.weight <= 0.0 {
                continue;
            }
            if i != 0 && rs != 0.0 {
                let scaled = (rs * (entry.weight / last_weight) + (1.0 - rs)) * f64::from(font_size);
                font_size = scaled.round() as u32;
            }

            let position = loop {
                if font_size < config.min_font_size {
                    break None;
                }
                if let Some(found) = self.find_position(&grid, &entry.word, font_size) {
                    break Some(found);
                }
                font_size = font_size.saturating_sub(config.font_step);
            };

            let Some((x, y, width, height)) = position else {
                debug!(
                    word = %entry.word,
                    placed = placed.len(),
                    "Canvas full, stopping layout"
                );
                break;
            };

            grid.fill(x, y, width, height);
            placed.push(PlacedWord {
                word: entry.word.clone(),
                weight: entry.weight,
                font_size,
                x,
                y,
                width,
                height,
                color: random_color(&mut rng),
            });
            last_weight = entry.weight;
        }

        placed
    }

    /// Finds the free box nearest the canvas centre for `word` at `font_size`.
    ///
    /// Returns the text box, inset by half the margin.
    fn find_position(
        &self,
        grid: &IntegralImage,
        word: &str,
        font_size: u32,
    ) -> Option<(u32, u32, u32, u32)> {
        let margin = self.config.margin;
        let (width, height) = font::text_size(word, font_size);
        if width == 0 {
            return None;
        }
        let (box_w, box_h) = (width + margin, height + margin);
        if box_w > self.config.width || box_h > self.config.height {
            return None;
        }

        let max_x = self.config.width - box_w;
        let max_y = self.config.height - box_h;
        SquareSpiral::new(max_x, max_y)
            .find(|&(x, y)| grid.is_free(x, y, box_w, box_h))
            .map(|(x, y)| (x + margin / 2, y + margin / 2, width, height))
    }
}

// =============================================================================
// Spiral Search
// =============================================================================

/// Visits every point of `[0, max_x] x [0, max_y]` in rings of growing
/// Chebyshev distance from the centre.
struct SquareSpiral {
    max_x: i64,
    max_y: i64,
    cx: i64,
    cy: i64,
    max_ring: i64,
    ring: i64,
    pending: std::vec::IntoIter<(i64, i64)>,
}

impl SquareSpiral {
    fn new(max_x: u32, max_y: u32) -> Self {
        let (max_x, max_y) = (i64::from(max_x), i64::from(max_y));
        let (cx, cy) = (max_x / 2, max_y / 2);
        let max_ring = cx.max(max_x - cx).max(cy).max(max_y - cy);
        Self {
            max_x,
            max_y,
            cx,
            cy,
            max_ring,
            ring: 0,
            pending: vec![(cx, cy)].into_iter(),
        }
    }

    fn ring_points(&self, d: i64) -> Vec<(i64, i64)> {
        let mut points = Vec::with_capacity((8 * d) as usize);
        for x in (self.cx - d)..=(self.cx + d) {
            points.push((x, self.cy - d));
            points.push((x, self.cy + d));
        }
        for y in (self.cy - d + 1)..=(self.cy + d - 1) {
            points.push((self.cx - d, y));
            points.push((self.cx + d, y));
        }
        points.retain(|&(x, y)| (0..=self.max_x).contains(&x) && (0..=self.max_y).contains(&y));
        points
    }
}

impl Iterator for SquareSpiral {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((x, y)) = self.pending.next() {
                return Some((x as u32, y as u32));
            }
            if self.ring >= self.max_ring {
                return None;
            }
            self.ring += 1;
            self.pending = self.ring_points(self.ring).into_iter();
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn freq(word: &str, weight: f64) -> WordFrequency {
        WordFrequency {
            word: word.to_string(),
            count: 1,
            weight,
        }
    }

    #[test]
    fn test_integral_image() {
        let mut grid = IntegralImage::new(10, 10);
        assert!(grid.is_free(0, 0, 10, 10));

        grid.fill(2, 3, 4, 2);
        assert_eq!(grid.region_sum(0, 0, 10, 10), 8);
        assert_eq!(grid.region_sum(2, 3, 1, 1), 1);
        assert!(grid.is_free(6, 0, 4, 10));
        assert!(!grid.is_free(5, 4, 2, 2));
        assert!(!grid.is_free(8, 8, 3, 1));
    }

    #[test]
    fn test_spiral_visits_every_point_once() {
        let points: Vec<_> = SquareSpiral::new(4, 2).collect();
        assert_eq!(points.len(), 15);
        assert_eq!(points[0], (2, 1));

        let mut sorted = points.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 15);
    }

    #[test]
    fn test_first_word_centred() {
        let config = WordCloudConfig {
            max_font_size: Some(70),
            ..WordCloudConfig::default()
        };
        let layout = LayoutEngine::new(&config).layout(&[freq("sun", 1.0)]);

        let word = &layout.words[0];
        assert_eq!(word.font_size, 70);
        let centre_x = word.x + word.width / 2;
        let centre_y = word.y + word.height / 2;
        assert!(centre_x.abs_diff(400) <= 2);
        assert!(centre_y.abs_diff(200) <= 2);
    }

    #[test]
    fn test_no_overlap() {
        let config = WordCloudConfig::default();
        let words: Vec<_> = ["love", "great", "day", "work", "monday", "fun", "traffic"]
            .iter()
            .enumerate()
            .map(|(i, w)| freq(w, 1.0 / (i as f64 + 1.0)))
            .collect();

        let layout = LayoutEngine::new(&config).layout(&words);
        assert_eq!(layout.words.len(), words.len());

        for (i, a) in layout.words.iter().enumerate() {
            assert!(a.x + a.width <= 800 && a.y + a.height <= 400);
            for b in &layout.words[i + 1..] {
                let apart = a.x + a.width <= b.x
                    || b.x + b.width <= a.x
                    || a.y + a.height <= b.y
                    || b.y + b.height <= a.y;
                assert!(apart, "{} overlaps {}", a.word, b.word);
            }
        }
    }

    #[test]
    fn test_relative_scaling_shrinks_rarer_words() {
        let config = WordCloudConfig {
            max_font_size: Some(80),
            ..WordCloudConfig::default()
        };
        let layout = LayoutEngine::new(&config).layout(&[freq("big", 1.0), freq("small", 0.5)]);

        assert_eq!(layout.words[0].font_size, 80);
        assert_eq!(layout.words[1].font_size, 60);
    }

    #[test]
    fn test_start_size_from_two_word_trial() {
        let config = WordCloudConfig::default();
        let words = [freq("alpha", 1.0), freq("bravo", 0.5), freq("charlie", 0.25)];

        let trial_config = WordCloudConfig {
            max_font_size: Some(config.height),
            ..WordCloudConfig::default()
        };
        let trial = LayoutEngine::new(&trial_config).layout(&words[..2]);
        let (a, b) = (trial.words[0].font_size, trial.words[1].font_size);

        let layout = LayoutEngine::new(&config).layout(&words);
        assert_eq!(layout.words[0].font_size, 2 * a * b / (a + b));
        assert!(layout.words[0].font_size < config.height);
    }

    #[test]
    fn test_near_equal_weights_get_near_equal_sizes() {
        let config = WordCloudConfig::default();
        let layout = LayoutEngine::new(&config).layout(&[freq("alpha", 1.0), freq("bravo", 0.97)]);

        assert_eq!(layout.words.len(), 2);
        let ratio = f64::from(layout.words[1].font_size) / f64::from(layout.words[0].font_size);
        assert!(ratio >= 0.9, "sizes {layout:?}");
    }

    #[test]
    fn test_single_word_starts_at_canvas_height() {
        let config = WordCloudConfig {
            width: 400,
            height: 40,
            ..WordCloudConfig::default()
        };
        let layout = LayoutEngine::new(&config).layout(&[freq("hi", 1.0)]);
        assert_eq!(layout.words[0].font_size, 38);
    }

    #[test]
    fn test_deterministic_colours() {
        let config = WordCloudConfig::default();
        let words = [freq("a1", 1.0), freq("b2", 0.5)];
        let first = LayoutEngine::new(&config).layout(&words);
        let second = LayoutEngine::new(&config).layout(&words);
        assert_eq!(first, second);
    }

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), [255, 0, 0]);
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), [0, 255, 0]);
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), [0, 0, 255]);
        assert_eq!(hsl_to_rgb(0.0, 0.0, 0.0), [0, 0, 0]);
    }

    #[test]
    fn test_stops_when_too_small() {
        let config = WordCloudConfig {
            width: 20,
            height: 10,
            min_font_size: 4,
            ..WordCloudConfig::default()
        };
        let layout = LayoutEngine::new(&config).layout(&[freq("averyveryverylongword", 1.0)]);
        assert!(layout.words.is_empty());
    }
}
