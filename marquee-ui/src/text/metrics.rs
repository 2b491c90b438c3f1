//! Text measurement capability

use super::paint::TextPaint;

/// Vertical font metrics, both values positive
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FontMetrics {
    /// Distance from the top of the line box to the baseline
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the line box
    pub descent: f32,
}

impl FontMetrics {
    /// Full line span (ascent + descent)
    pub fn span(&self) -> f32 {
        self.ascent + self.descent
    }
}

/// Measures single-line text for a given paint.
///
/// Implemented by the host toolkit. Measurement is assumed to succeed;
/// non-finite widths are sanitized by the caller.
pub trait TextMetrics {
    /// Advance width of `text` in pixels
    fn text_width(&mut self, text: &str, paint: &TextPaint) -> f32;

    /// Vertical metrics of the font selected by `paint`
    fn font_metrics(&mut self, paint: &TextPaint) -> FontMetrics;
}

impl<T: TextMetrics + ?Sized> TextMetrics for Box<T> {
    fn text_width(&mut self, text: &str, paint: &TextPaint) -> f32 {
        (**self).text_width(text, paint)
    }

    fn font_metrics(&mut self, paint: &TextPaint) -> FontMetrics {
        (**self).font_metrics(paint)
    }
}

/// Fixed-advance metrics: every character is `size * advance` wide.
///
/// Useful for terminal hosts and deterministic tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    advance: f32,
    ascent: f32,
    descent: f32,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self {
            advance: 0.5,
            ascent: 0.8,
            descent: 0.2,
        }
    }
}

impl MonospaceMetrics {
    /// Create metrics where each char advances `advance` times the text size
    pub fn new(advance: f32) -> Self {
        Self {
            advance,
            ..Default::default()
        }
    }

    /// Set ascent and descent as fractions of the text size
    pub fn with_ascent_descent(mut self, ascent: f32, descent: f32) -> Self {
        self.ascent = ascent;
        self.descent = descent;
        self
    }

    /// Width of a single cell for the given paint
    pub fn cell_width(&self, paint: &TextPaint) -> f32 {
        paint.size * self.advance
    }
}

impl TextMetrics for MonospaceMetrics {
    fn text_width(&mut self, text: &str, paint: &TextPaint) -> f32 {
        text.chars().count() as f32 * self.cell_width(paint)
    }

    fn font_metrics(&mut self, paint: &TextPaint) -> FontMetrics {
        FontMetrics {
            ascent: paint.size * self.ascent,
            descent: paint.size * self.descent,
        }
    }
}
