//! Configuration loading from marquee.toml

use marquee_ui::{ConfigError, LayoutDirection, MarqueeAttributes, Padding, TouchAction, ViewBounds};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub run: RunConfig,
    /// Scripted touch events replayed during the run
    #[serde(default)]
    pub touch: Vec<TouchConfig>,
    #[serde(default)]
    pub marquee: MarqueeAttributes,
}

/// Terminal view configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ViewConfig {
    /// View width in terminal columns
    #[serde(default = "default_columns")]
    pub columns: usize,
    /// Padding in columns [left, right]
    #[serde(default)]
    pub padding: [usize; 2],
    /// Layout direction: "ltr" or "rtl"
    #[serde(default = "default_direction")]
    pub direction: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            padding: [0, 0],
            direction: default_direction(),
        }
    }
}

fn default_columns() -> usize {
    32
}

fn default_direction() -> String {
    "ltr".to_string()
}

impl ViewConfig {
    pub fn layout_direction(&self) -> LayoutDirection {
        match self.direction.to_lowercase().as_str() {
            "ltr" | "left-to-right" => LayoutDirection::Ltr,
            "rtl" | "right-to-left" => LayoutDirection::Rtl,
            _ => {
                log::warn!("Unknown direction '{}', defaulting to ltr", self.direction);
                LayoutDirection::Ltr
            }
        }
    }

    /// View bounds in pixels for a terminal cell of `cell_width` x `cell_height`
    pub fn bounds(&self, cell_width: f32, cell_height: f32) -> ViewBounds {
        let padding = Padding {
            left: self.padding[0] as f32 * cell_width,
            right: self.padding[1] as f32 * cell_width,
            ..Default::default()
        };
        ViewBounds::new(self.columns as f32 * cell_width, cell_height).with_padding(padding)
    }
}

/// Frame loop configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    /// Frames per second
    #[serde(default = "default_fps")]
    pub fps: f32,
    /// Run length in seconds (0 = until interrupted)
    #[serde(default = "default_duration")]
    pub duration: f32,
    /// Sleep between frames; disable to replay the script as fast as possible
    #[serde(default = "default_realtime")]
    pub realtime: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            fps: default_fps(),
            duration: default_duration(),
            realtime: default_realtime(),
        }
    }
}

fn default_fps() -> f32 {
    30.0
}
fn default_duration() -> f32 {
    10.0
}
fn default_realtime() -> bool {
    true
}

impl RunConfig {
    /// Time between frames
    pub fn frame_interval(&self) -> Duration {
        let fps = if self.fps > 0.0 && self.fps.is_finite() {
            self.fps
        } else {
            log::warn!("Invalid fps {}, using {}", self.fps, default_fps());
            default_fps()
        };
        Duration::from_secs_f32(1.0 / fps)
    }

    /// Total run length, `None` to run forever
    pub fn run_length(&self) -> Option<Duration> {
        (self.duration > 0.0 && self.duration.is_finite())
            .then(|| Duration::from_secs_f32(self.duration))
    }
}

/// A scripted touch event
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TouchConfig {
    /// Time since start in milliseconds
    pub at_ms: u64,
    pub action: TouchAction,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&content)?)
    }

    /// Load from default path (marquee.toml in current directory)
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load("marquee.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.view.columns, 32);
        assert_eq!(config.view.layout_direction(), LayoutDirection::Ltr);
        assert_eq!(config.run.frame_interval(), Duration::from_secs_f32(1.0 / 30.0));
        assert!(config.touch.is_empty());
        assert!(config.marquee.auto_start);
    }

    #[test]
    fn test_full_config() {
        let config: Config = toml::from_str(
            r#"
            [view]
            columns = 20
            padding = [1, 2]
            direction = "rtl"

            [run]
            fps = 10.0
            duration = 0.0

            [[touch]]
            at_ms = 1500
            action = "down"

            [[touch]]
            at_ms = 2500
            action = "up"

            [marquee]
            text = "Hello"
            scrollSpeed = 0.5
            "#,
        )
        .unwrap();

        assert_eq!(config.view.layout_direction(), LayoutDirection::Rtl);
        let bounds = config.view.bounds(7.0, 14.0);
        assert_eq!(bounds.width, 140.0);
        assert_eq!(bounds.padding.left, 7.0);
        assert_eq!(bounds.padding.right, 14.0);
        assert_eq!(config.run.run_length(), None);
        assert_eq!(config.touch.len(), 2);
        assert_eq!(config.touch[0].action, TouchAction::Down);
        assert_eq!(config.marquee.scroll_speed, 0.5);
    }

    #[test]
    fn test_unknown_direction_defaults_to_ltr() {
        let view = ViewConfig {
            direction: "diagonal".to_string(),
            ..Default::default()
        };
        assert_eq!(view.layout_direction(), LayoutDirection::Ltr);
    }
}
