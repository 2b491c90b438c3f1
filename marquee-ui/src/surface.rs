//! Drawing surface the marquee renders into

use crate::geometry::Rect;
use crate::text::TextPaint;

/// Drawing capability supplied by the host renderer
pub trait Surface {
    /// Intersect the current clip with `rect`
    fn clip_rect(&mut self, rect: Rect);

    /// Draw a single line of text with its baseline at `baseline`
    fn draw_text(&mut self, text: &str, x: f32, baseline: f32, paint: &TextPaint);
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clip(Rect),
    Text {
        text: String,
        x: f32,
        baseline: f32,
        paint: TextPaint,
    },
}

/// Surface that records draw calls, for headless hosts and tests
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Most recent clip rectangle
    pub fn last_clip(&self) -> Option<Rect> {
        self.commands.iter().rev().find_map(|command| match command {
            DrawCommand::Clip(rect) => Some(*rect),
            _ => None,
        })
    }

    /// Most recent text draw as `(text, x, baseline)`
    pub fn last_text(&self) -> Option<(&str, f32, f32)> {
        self.commands.iter().rev().find_map(|command| match command {
            DrawCommand::Text {
                text, x, baseline, ..
            } => Some((text.as_str(), *x, *baseline)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn clip_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Clip(rect));
    }

    fn draw_text(&mut self, text: &str, x: f32, baseline: f32, paint: &TextPaint) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            baseline,
            paint: paint.clone(),
        });
    }
}
