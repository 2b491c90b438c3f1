//! # marquee-ui
//!
//! A reusable crate for single-line scrolling text (marquee) views.
//!
//! ## Features
//! - Scrolls only when the text is wider than its content rectangle
//! - Seamless wrap-around using a repeated, separator-padded string
//! - Scroll duration derived from the measured text width and a speed factor
//! - Right-to-left text scrolls mirrored
//! - Additive external offset for drags or client-owned animations
//! - Press-to-pause touch wrapper
//! - Custom animators and TOML-loaded attributes
//!
//! The host owns the frame clock, the drawing surface and text measurement;
//! the view is driven by pushing layout passes, frame deltas and touch
//! actions into it.
//!
//! ## Example
//!
//! ```no_run
//! use std::time::Duration;
//! use marquee_ui::{
//!     HostCapabilities, LayoutDirection, MarqueeView, MonospaceMetrics, RecordingSurface,
//!     ViewBounds,
//! };
//!
//! let mut view = MarqueeView::new(MonospaceMetrics::default(), HostCapabilities::default());
//! view.set_text("Breaking news: marquee scrolls only when it has to");
//! view.on_layout(ViewBounds::new(120.0, 24.0), LayoutDirection::Ltr);
//!
//! let mut surface = RecordingSurface::new();
//! for _ in 0..60 {
//!     view.layout_if_needed();
//!     if view.frame(Duration::from_millis(16)) {
//!         view.on_draw(&mut surface);
//!     }
//! }
//! ```

pub mod animation;
pub mod config;
pub mod elements;
pub mod geometry;
pub mod property;
pub mod surface;
pub mod text;

// Animation
pub use animation::{
    Animatable, AnimationBinding, AnimationFactory, Interpolator, Pausable, RepeatCount,
    ScrollAnimator, TickObservable, ValueAnimator, ValueAnimatorFactory, ValueRange,
};

// Configuration
pub use config::{AnimatorResource, ConfigError, HostCapabilities, MarqueeAttributes, TextColorConfig};

// Elements system
pub use elements::{
    MarqueeOptions, MarqueeView, MeasureSpec, TouchAction, TouchMarquee, TouchState, Widget,
};

// Geometry
pub use geometry::{LayoutDirection, Padding, Rect, ViewBounds};

pub use property::FloatProperty;
pub use surface::{DrawCommand, RecordingSurface, Surface};

// Text
pub use text::{
    CosmicMetrics, EnabledState, FontMetrics, FontStyle, MonospaceMetrics, TextColor, TextMetrics,
    TextPaint,
};
