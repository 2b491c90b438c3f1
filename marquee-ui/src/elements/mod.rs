//! Elements system for marquee-ui
//!
//! Provides the marquee view and its touch-interactive wrapper.

pub mod marquee;
pub mod measure;
pub mod touch_marquee;

pub use marquee::{MarqueeOptions, MarqueeView, SEPARATOR};
pub use measure::{dp_to_pixels, pixels_to_dp, resolve_size, MeasureSpec};
pub use touch_marquee::{TouchMarquee, TouchState};

use serde::Deserialize;

/// Touch action delivered by the host's event dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TouchAction {
    /// Pointer pressed
    Down,
    /// Pointer moved while pressed
    Move,
    /// Pointer released
    Up,
    /// Gesture cancelled by the host
    Cancel,
    /// Pointer left the view while pressed
    Exit,
}

/// Trait for widgets that react to touch input
pub trait Widget {
    /// Handle a touch event, returns true if the event was consumed
    fn on_touch_event(&mut self, action: TouchAction) -> bool;
}
