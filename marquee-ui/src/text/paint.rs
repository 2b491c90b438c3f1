//! Text paint and stateful text color

/// RGBA color with components in 0.0-1.0 range
pub type Color = [f32; 4];

/// Font style for marquee text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
}

/// View state used to pick a color from a [`TextColor`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnabledState {
    #[default]
    Enabled,
    Disabled,
}

impl From<bool> for EnabledState {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }
}

/// Text color for each enabled state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextColor {
    pub enabled: Color,
    pub disabled: Color,
}

impl Default for TextColor {
    fn default() -> Self {
        Self {
            enabled: [0.0, 0.0, 0.0, 0.54],
            disabled: [0.0, 0.0, 0.0, 0.12],
        }
    }
}

impl TextColor {
    pub fn new(enabled: Color, disabled: Color) -> Self {
        Self { enabled, disabled }
    }

    /// One color for every state
    pub fn solid(color: Color) -> Self {
        Self {
            enabled: color,
            disabled: color,
        }
    }

    /// Resolve the color for a state
    pub fn color_for(&self, state: EnabledState) -> Color {
        match state {
            EnabledState::Enabled => self.enabled,
            EnabledState::Disabled => self.disabled,
        }
    }
}

/// Paint used to measure and draw the marquee text
#[derive(Debug, Clone, PartialEq)]
pub struct TextPaint {
    /// Font size in pixels
    pub size: f32,
    /// Resolved text color
    pub color: Color,
    /// Font style (normal, bold, italic)
    pub font_style: FontStyle,
}

impl Default for TextPaint {
    fn default() -> Self {
        Self {
            size: 14.0,
            color: TextColor::default().enabled,
            font_style: FontStyle::Normal,
        }
    }
}

impl TextPaint {
    pub fn new(size: f32) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_for_state() {
        let color = TextColor::new([1.0, 0.0, 0.0, 1.0], [0.5, 0.5, 0.5, 1.0]);
        assert_eq!(color.color_for(EnabledState::Enabled), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(color.color_for(EnabledState::Disabled), [0.5, 0.5, 0.5, 1.0]);
        assert_eq!(color.color_for(false.into()), [0.5, 0.5, 0.5, 1.0]);
    }

    #[test]
    fn test_solid_color() {
        let color = TextColor::solid([0.2, 0.3, 0.4, 1.0]);
        assert_eq!(color.enabled, color.disabled);
    }
}
