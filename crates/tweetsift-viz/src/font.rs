//! Font - Embedded 5x7 Bitmap Glyphs
//!
//! Words are drawn with a fixed 5x7 glyph set scaled by nearest neighbour to
//! the requested pixel height. Letters render in capital form; characters
//! without a glyph render as a hollow box.
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

/// Glyph width in font units.
pub const GLYPH_WIDTH: u32 = 5;
/// Glyph height in font units.
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance per character, including one unit of spacing.
pub const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

/// One glyph: seven rows, the low five bits of each row, MSB on the left.
pub type Glyph = [u8; 7];

const UNKNOWN: Glyph = [0x1F, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1F];

/// Glyph for a character.
pub fn glyph(c: char) -> Glyph {
    match c.to_ascii_lowercase() {
        'a' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'b' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'c' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'd' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'e' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'f' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'g' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'h' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'i' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'j' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'k' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'l' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'm' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'n' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'o' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'p' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'r' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        's' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        't' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'u' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'v' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'w' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'x' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'y' => [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
        'z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        '\'' | '\u{2019}' => [0x04, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        '_' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F],
        ' ' => [0x00; 7],
        _ => UNKNOWN,
    }
}

/// Pixels per font unit at a given pixel height.
fn scale(font_size: u32) -> f64 {
    f64::from(font_size) / f64::from(GLYPH_HEIGHT)
}

/// Pixel size of `text` drawn at `font_size`.
pub fn text_size(text: &str, font_size: u32) -> (u32, u32) {
    let chars = text.chars().count() as u32;
    if chars == 0 || font_size == 0 {
        return (0, 0);
    }
    let units = chars * GLYPH_ADVANCE - 1;
    let width = (f64::from(units) * scale(font_size)).ceil() as u32;
    (width.max(1), font_size)
}

// =============================================================================
// Rasterized Text
// =============================================================================

/// A text rendered to a coverage mask.
#[derive(Debug, Clone)]
pub struct TextMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl TextMask {
    /// Rasterizes `text` at `font_size` pixels high.
    pub fn render(text: &str, font_size: u32) -> Self {
        let (width, height) = text_size(text, font_size);
        let glyphs: Vec<Glyph> = text.chars().map(glyph).collect();
        let scale = scale(font_size);

        let mut bits = vec![false; (width * height) as usize];
        for y in 0..height {
            let row = ((f64::from(y) / scale) as u32).min(GLYPH_HEIGHT - 1) as usize;
            for x in 0..width {
                let unit = (f64::from(x) / scale) as u32;
                let (index, col) = ((unit / GLYPH_ADVANCE) as usize, unit % GLYPH_ADVANCE);
                if col >= GLYPH_WIDTH {
                    continue;
                }
                let on = glyphs
                    .get(index)
                    .is_some_and(|g| g[row] & (0x10 >> col) != 0);
                bits[(y * width + x) as usize] = on;
            }
        }

        Self {
            width,
            height,
            bits,
        }
    }

    /// Mask width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Mask height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the pixel at `(x, y)` is ink.
    pub fn get(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.bits[(y * self.width + x) as usize]
    }

    /// Number of ink pixels.
    pub fn coverage(&self) -> usize {
        self.bits.iter().filter(|b| **b).count()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_size() {
        assert_eq!(text_size("a", 7), (5, 7));
        assert_eq!(text_size("ab", 7), (11, 7));
        assert_eq!(text_size("ab", 14), (22, 14));
        assert_eq!(text_size("", 20), (0, 0));
    }

    #[test]
    fn test_unscaled_glyph() {
        let mask = TextMask::render("l", 7);
        for y in 0..7 {
            assert!(mask.get(0, y));
        }
        assert!(mask.get(4, 6));
        assert!(!mask.get(4, 0));
    }

    #[test]
    fn test_scaled_glyph_doubles() {
        let small = TextMask::render("t", 7);
        let large = TextMask::render("t", 14);
        assert_eq!(large.coverage(), small.coverage() * 4);
    }

    #[test]
    fn test_unknown_is_box() {
        assert_eq!(glyph('\u{263A}'), UNKNOWN);
        assert_eq!(glyph('Q'), glyph('q'));
    }

    #[test]
    fn test_spacing_column_is_blank() {
        let mask = TextMask::render("mm", 7);
        for y in 0..7 {
            assert!(!mask.get(5, y));
        }
    }
}
