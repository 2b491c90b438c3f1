//! Single-row terminal surface
//!
//! Rasterizes marquee draw calls onto a grid of character cells. Each char
//! of the drawn text occupies one cell; cells not fully inside the clip are
//! left blank.

use marquee_ui::{Rect, Surface, TextPaint};

const EPSILON: f32 = 1e-3;

pub struct TerminalSurface {
    cell_width: f32,
    cells: Vec<char>,
    clip: Option<Rect>,
}

impl TerminalSurface {
    pub fn new(columns: usize, cell_width: f32) -> Self {
        Self {
            cell_width,
            cells: vec![' '; columns],
            clip: None,
        }
    }

    /// Blank the row and reset the clip
    pub fn clear(&mut self) {
        self.cells.fill(' ');
        self.clip = None;
    }

    pub fn row(&self) -> String {
        self.cells.iter().collect()
    }

    /// Range of columns fully inside the current clip
    fn visible_columns(&self) -> (isize, isize) {
        let columns = self.cells.len() as isize;
        match self.clip {
            Some(clip) => {
                let first = ((clip.left - EPSILON) / self.cell_width).ceil() as isize;
                let last = ((clip.right + EPSILON) / self.cell_width).floor() as isize;
                (first.max(0), last.min(columns))
            }
            None => (0, columns),
        }
    }
}

impl Surface for TerminalSurface {
    fn clip_rect(&mut self, rect: Rect) {
        self.clip = Some(match self.clip {
            Some(clip) => Rect::new(
                clip.left.max(rect.left),
                clip.top.max(rect.top),
                clip.right.min(rect.right),
                clip.bottom.min(rect.bottom),
            ),
            None => rect,
        });
    }

    fn draw_text(&mut self, text: &str, x: f32, _baseline: f32, _paint: &TextPaint) {
        if self.cell_width <= 0.0 || !x.is_finite() {
            return;
        }
        let (first, last) = self.visible_columns();
        let origin = (x / self.cell_width).round() as isize;

        for (i, ch) in text.chars().enumerate() {
            let column = origin + i as isize;
            if column >= last {
                break;
            }
            if column >= first {
                self.cells[column as usize] = ch;
            }
        }
    }
}
