//! Text metrics backed by cosmic-text shaping

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Style, Weight};

use super::metrics::{FontMetrics, TextMetrics};
use super::paint::{FontStyle, TextPaint};

/// Line height relative to font size
const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// Measures text with a cosmic-text [`FontSystem`].
///
/// Each call shapes the text into an unbounded single-line buffer, so the
/// width is the full advance of the string regardless of view size.
pub struct CosmicMetrics {
    font_system: FontSystem,
}

impl Default for CosmicMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl CosmicMetrics {
    /// Create metrics using the system font database
    pub fn new() -> Self {
        Self {
            font_system: FontSystem::new(),
        }
    }

    /// Create metrics sharing an existing font system
    pub fn with_font_system(font_system: FontSystem) -> Self {
        Self { font_system }
    }

    /// Get the font system mutably (e.g. to load extra fonts)
    pub fn font_system_mut(&mut self) -> &mut FontSystem {
        &mut self.font_system
    }

    fn shape(&mut self, text: &str, paint: &TextPaint) -> Buffer {
        let line_height = paint.size * LINE_HEIGHT_FACTOR;
        let mut buffer = Buffer::new(&mut self.font_system, Metrics::new(paint.size, line_height));
        // Very wide so the text never wraps
        buffer.set_size(&mut self.font_system, f32::MAX, line_height);
        buffer.set_text(&mut self.font_system, text, attrs_for(paint.font_style), Shaping::Advanced);
        buffer.shape_until_scroll(&mut self.font_system, false);
        buffer
    }
}

fn attrs_for(style: FontStyle) -> Attrs<'static> {
    match style {
        FontStyle::Bold => Attrs::new().family(Family::SansSerif).weight(Weight::BOLD),
        FontStyle::Italic => Attrs::new().family(Family::SansSerif).style(Style::Italic),
        FontStyle::Normal => Attrs::new().family(Family::SansSerif),
    }
}

/// Paint sizes cosmic-text cannot lay out (a zero line height is rejected)
fn is_unmeasurable(paint: &TextPaint) -> bool {
    !paint.size.is_finite() || paint.size <= 0.0
}

impl TextMetrics for CosmicMetrics {
    fn text_width(&mut self, text: &str, paint: &TextPaint) -> f32 {
        if text.is_empty() || is_unmeasurable(paint) {
            return 0.0;
        }

        let buffer = self.shape(text, paint);
        buffer
            .layout_runs()
            .map(|run| run.line_w)
            .max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .unwrap_or(0.0)
    }

    fn font_metrics(&mut self, paint: &TextPaint) -> FontMetrics {
        if is_unmeasurable(paint) {
            return FontMetrics::default();
        }

        let line_height = paint.size * LINE_HEIGHT_FACTOR;
        let buffer = self.shape("Xg", paint);
        match buffer.layout_runs().next() {
            Some(run) => {
                let ascent = run.line_y - run.line_top;
                FontMetrics {
                    ascent,
                    descent: (line_height - ascent).max(0.0),
                }
            }
            // No font could shape the probe; split the line box
            None => FontMetrics {
                ascent: paint.size,
                descent: line_height - paint.size,
            },
        }
    }
}
