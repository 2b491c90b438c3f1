//! Marquee attributes loaded from TOML
//!
//! Field names follow the widget attribute surface; camelCase aliases are
//! accepted so layouts written against the attribute names load as-is.
//!
//! ```toml
//! text = "Breaking news: marquee scrolls only when it has to"
//! scroll_speed = 0.5
//! text_color = { enabled = [1.0, 1.0, 1.0, 1.0], disabled = [0.6, 0.6, 0.6, 1.0] }
//! text_animator = "slow"
//!
//! [animators.slow]
//! duration_ms = 8000
//! from = 0.0
//! to = -400.0
//! interpolator = "accelerate_decelerate"
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::animation::{Interpolator, RepeatCount, ValueAnimator};
use crate::elements::measure::dp_to_pixels;
use crate::text::{Color, TextColor};

/// Default text size in density-independent units
pub const DEFAULT_TEXT_SIZE_DP: f32 = 14.0;
/// Default scroll speed (unit interval, 1.0 = normal)
pub const DEFAULT_SCROLL_SPEED: f32 = 1.0;
/// Default auto-start flag
pub const DEFAULT_AUTO_START: bool = true;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Capabilities of the host toolkit, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HostCapabilities {
    /// The animation primitive can pause and resume natively
    pub native_pause: bool,
    /// The host resolves start/end padding against layout direction
    pub relative_padding: bool,
}

impl Default for HostCapabilities {
    fn default() -> Self {
        Self {
            native_pause: true,
            relative_padding: true,
        }
    }
}

/// Text color attribute: a literal color or a per-state mapping
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TextColorConfig {
    Solid(Color),
    States {
        enabled: Color,
        #[serde(default)]
        disabled: Option<Color>,
    },
}

impl From<TextColorConfig> for TextColor {
    fn from(config: TextColorConfig) -> Self {
        match config {
            TextColorConfig::Solid(color) => TextColor::solid(color),
            TextColorConfig::States { enabled, disabled } => {
                TextColor::new(enabled, disabled.unwrap_or(TextColor::default().disabled))
            }
        }
    }
}

/// A custom animator definition referenced by name from `text_animator`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnimatorResource {
    pub duration_ms: u64,
    #[serde(default)]
    pub from: f32,
    pub to: f32,
    #[serde(default = "default_repeat_count", alias = "repeatCount")]
    pub repeat_count: i32,
    #[serde(default)]
    pub interpolator: Interpolator,
}

fn default_repeat_count() -> i32 {
    RepeatCount::Infinite.as_raw()
}

impl AnimatorResource {
    /// Build the animator this resource describes
    pub fn build(&self) -> ValueAnimator {
        ValueAnimator::new(Duration::from_millis(self.duration_ms), self.from, self.to)
            .with_repeat_count(RepeatCount::from_raw(self.repeat_count))
            .with_interpolator(self.interpolator)
    }
}

/// Marquee attributes
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarqueeAttributes {
    /// Text to display (absent = empty)
    pub text: Option<String>,
    #[serde(alias = "textColor")]
    pub text_color: Option<TextColorConfig>,
    /// Text size in density-independent units
    #[serde(alias = "textSize")]
    pub text_size: f32,
    #[serde(alias = "scrollSpeed")]
    pub scroll_speed: f32,
    #[serde(alias = "autoStart")]
    pub auto_start: bool,
    pub enabled: bool,
    /// Repeat count for the default animator (-1 = infinite)
    #[serde(alias = "repeatCount")]
    pub repeat_count: i32,
    /// Name of an entry in `animators` replacing the default animator
    #[serde(alias = "textAnimator")]
    pub text_animator: Option<String>,
    /// Display density used to convert `text_size` to pixels
    pub density: f32,
    pub animators: HashMap<String, AnimatorResource>,
    pub host: HostCapabilities,
}

impl Default for MarqueeAttributes {
    fn default() -> Self {
        Self {
            text: None,
            text_color: None,
            text_size: DEFAULT_TEXT_SIZE_DP,
            scroll_speed: DEFAULT_SCROLL_SPEED,
            auto_start: DEFAULT_AUTO_START,
            enabled: true,
            repeat_count: default_repeat_count(),
            text_animator: None,
            density: 1.0,
            animators: HashMap::new(),
            host: HostCapabilities::default(),
        }
    }
}

impl MarqueeAttributes {
    /// Parse attributes from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load attributes from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Text size converted to pixels
    pub fn text_size_px(&self) -> f32 {
        dp_to_pixels(self.text_size, self.density)
    }

    pub fn text_color(&self) -> TextColor {
        self.text_color.map(TextColor::from).unwrap_or_default()
    }

    pub fn repeat_count(&self) -> RepeatCount {
        RepeatCount::from_raw(self.repeat_count)
    }

    /// Resolve the `text_animator` reference.
    ///
    /// A dangling reference logs a warning and yields `None`, so the
    /// default width-derived animator is used.
    pub fn animator_resource(&self) -> Option<&AnimatorResource> {
        let name = self.text_animator.as_deref()?;
        let resource = self.animators.get(name);
        if resource.is_none() {
            log::warn!("Unknown text animator '{}', using the default animator", name);
        }
        resource
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let attrs = MarqueeAttributes::from_toml_str("").unwrap();

        assert_eq!(attrs.text, None);
        assert_eq!(attrs.scroll_speed, 1.0);
        assert!(attrs.auto_start);
        assert!(attrs.enabled);
        assert_eq!(attrs.repeat_count(), RepeatCount::Infinite);
        assert_eq!(attrs.text_size_px(), 14.0);
        assert_eq!(attrs.text_color(), TextColor::default());
        assert_eq!(attrs.host, HostCapabilities::default());
    }

    #[test]
    fn test_camel_case_aliases() {
        let attrs = MarqueeAttributes::from_toml_str(
            r#"
            text = "Hello"
            scrollSpeed = 0.5
            autoStart = false
            repeatCount = 3
            textSize = 20.0
            density = 2.0
            "#,
        )
        .unwrap();

        assert_eq!(attrs.text.as_deref(), Some("Hello"));
        assert_eq!(attrs.scroll_speed, 0.5);
        assert!(!attrs.auto_start);
        assert_eq!(attrs.repeat_count(), RepeatCount::Times(3));
        assert_eq!(attrs.text_size_px(), 40.0);
    }

    #[test]
    fn test_text_color_forms() {
        let solid = MarqueeAttributes::from_toml_str("text_color = [1.0, 0.0, 0.0, 1.0]").unwrap();
        assert_eq!(solid.text_color(), TextColor::solid([1.0, 0.0, 0.0, 1.0]));

        let states = MarqueeAttributes::from_toml_str(
            "text_color = { enabled = [1.0, 1.0, 1.0, 1.0], disabled = [0.5, 0.5, 0.5, 1.0] }",
        )
        .unwrap();
        assert_eq!(
            states.text_color(),
            TextColor::new([1.0, 1.0, 1.0, 1.0], [0.5, 0.5, 0.5, 1.0])
        );
    }

    #[test]
    fn test_animator_resource() {
        let attrs = MarqueeAttributes::from_toml_str(
            r#"
            text_animator = "slow"

            [animators.slow]
            duration_ms = 8000
            to = -400.0
            interpolator = "accelerate_decelerate"
            "#,
        )
        .unwrap();

        let resource = attrs.animator_resource().unwrap();
        assert_eq!(resource.duration_ms, 8000);
        assert_eq!(resource.from, 0.0);
        assert_eq!(resource.repeat_count, -1);
        assert_eq!(resource.interpolator, Interpolator::AccelerateDecelerate);

        let animator = resource.build();
        assert_eq!(animator.interpolator(), Interpolator::AccelerateDecelerate);
    }

    #[test]
    fn test_missing_animator_resource_falls_back() {
        let _ = env_logger::builder().is_test(true).try_init();
        let attrs = MarqueeAttributes::from_toml_str(r#"text_animator = "missing""#).unwrap();
        assert!(attrs.animator_resource().is_none());
    }

    #[test]
    fn test_host_capabilities() {
        let attrs =
            MarqueeAttributes::from_toml_str("[host]\nnative_pause = false").unwrap();
        assert!(!attrs.host.native_pause);
        assert!(attrs.host.relative_padding);
    }

    #[test]
    fn test_parse_error() {
        let err = MarqueeAttributes::from_toml_str("scroll_speed = \"fast\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
