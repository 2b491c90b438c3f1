//! Geometry types for marquee layout

/// Layout direction of the host view (or of a run of text)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutDirection {
    /// Left-to-right
    #[default]
    Ltr,
    /// Right-to-left
    Rtl,
}

impl LayoutDirection {
    pub fn is_ltr(self) -> bool {
        self == Self::Ltr
    }
}

/// Axis-aligned rectangle in view-local pixels.
///
/// Width and height may be negative when padding exceeds the view size;
/// callers treat non-positive extents as "nothing to draw".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// View padding.
///
/// `left`/`right` are physical. `start`/`end` are relative to the layout
/// direction and, when set, take precedence on hosts that support them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub start: Option<f32>,
    pub end: Option<f32>,
}

impl Padding {
    /// Same padding on every side
    pub fn uniform(value: f32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
            start: None,
            end: None,
        }
    }

    /// Set relative start/end padding
    pub fn with_relative(mut self, start: f32, end: f32) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    /// Resolve to physical `(left, right)` padding.
    ///
    /// With relative padding, start maps to the left edge in an LTR layout
    /// and to the right edge in an RTL layout.
    pub fn resolve_horizontal(&self, direction: LayoutDirection, relative: bool) -> (f32, f32) {
        if !relative {
            return (self.left, self.right);
        }

        let (start_default, end_default) = match direction {
            LayoutDirection::Ltr => (self.left, self.right),
            LayoutDirection::Rtl => (self.right, self.left),
        };
        let start = self.start.unwrap_or(start_default);
        let end = self.end.unwrap_or(end_default);

        match direction {
            LayoutDirection::Ltr => (start, end),
            LayoutDirection::Rtl => (end, start),
        }
    }

    /// Total horizontal padding. Identical for both directions.
    pub fn horizontal(&self, relative: bool) -> f32 {
        let (left, right) = self.resolve_horizontal(LayoutDirection::Ltr, relative);
        left + right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Size and padding of the view as handed over by a host layout pass
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewBounds {
    pub width: f32,
    pub height: f32,
    pub padding: Padding,
}

impl ViewBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            padding: Padding::default(),
        }
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Rectangle left over after padding is applied for the given direction
    pub fn content_rect(&self, direction: LayoutDirection, relative_padding: bool) -> Rect {
        let (left, right) = self.padding.resolve_horizontal(direction, relative_padding);
        Rect::new(
            left,
            self.padding.top,
            self.width - right,
            self.height - self.padding.bottom,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_physical_padding_ignores_direction() {
        let padding = Padding {
            left: 4.0,
            right: 10.0,
            ..Default::default()
        }
        .with_relative(20.0, 30.0);

        assert_eq!(padding.resolve_horizontal(LayoutDirection::Ltr, false), (4.0, 10.0));
        assert_eq!(padding.resolve_horizontal(LayoutDirection::Rtl, false), (4.0, 10.0));
    }

    #[test]
    fn test_relative_padding_swaps_for_rtl() {
        let padding = Padding::default().with_relative(20.0, 30.0);

        assert_eq!(padding.resolve_horizontal(LayoutDirection::Ltr, true), (20.0, 30.0));
        assert_eq!(padding.resolve_horizontal(LayoutDirection::Rtl, true), (30.0, 20.0));
    }

    #[test]
    fn test_relative_padding_falls_back_to_physical() {
        let padding = Padding {
            left: 4.0,
            right: 10.0,
            ..Default::default()
        };

        assert_eq!(padding.resolve_horizontal(LayoutDirection::Rtl, true), (4.0, 10.0));
        assert_eq!(padding.horizontal(true), 14.0);
    }

    #[test]
    fn test_content_rect() {
        let bounds = ViewBounds::new(200.0, 40.0).with_padding(Padding::uniform(8.0));
        let rect = bounds.content_rect(LayoutDirection::Ltr, true);

        assert_eq!(rect, Rect::new(8.0, 8.0, 192.0, 32.0));
        assert_eq!(rect.width(), 184.0);
        assert_eq!(rect.height(), 24.0);
    }
}
