//! Animation primitives driving the marquee scroll value
//!
//! The host's animation primitive is abstracted as [`Animatable`]. Optional
//! features are exposed as capabilities rather than concrete types:
//! - [`Pausable`]: native pause/resume
//! - [`TickObservable`]: reports an animated value on every frame
//! - [`ValueRange`]: the repeat count can be reassigned
//!
//! [`ScrollAnimator`] owns one animation and adds an elapsed-time shim for
//! primitives that cannot pause natively.

mod scroll;
mod value_animator;

use std::time::Duration;

use serde::Deserialize;

pub use scroll::{AnimationBinding, AnimationFactory, ScrollAnimator, ValueAnimatorFactory};
pub use value_animator::ValueAnimator;

/// How many times an animation repeats after its first run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepeatCount {
    /// Repeat forever
    #[default]
    Infinite,
    /// Repeat this many extra times (0 = play once)
    Times(u32),
}

impl RepeatCount {
    /// Convert from the integer attribute form, where any negative value
    /// means infinite
    pub fn from_raw(raw: i32) -> Self {
        if raw < 0 {
            Self::Infinite
        } else {
            Self::Times(raw as u32)
        }
    }

    /// Integer attribute form (-1 = infinite)
    pub fn as_raw(self) -> i32 {
        match self {
            Self::Infinite => -1,
            Self::Times(n) => n.min(i32::MAX as u32) as i32,
        }
    }
}

/// Time interpolation applied to the animation fraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpolator {
    #[default]
    Linear,
    /// Starts slow, speeds up (quadratic)
    Accelerate,
    /// Starts fast, slows down (quadratic)
    Decelerate,
    /// Slow at both ends (cosine)
    AccelerateDecelerate,
}

impl Interpolator {
    /// Map a linear fraction in [0, 1] to an eased fraction
    pub fn interpolate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Accelerate => t * t,
            Self::Decelerate => 1.0 - (1.0 - t) * (1.0 - t),
            Self::AccelerateDecelerate => ((t + 1.0) * std::f32::consts::PI).cos() / 2.0 + 0.5,
        }
    }
}

/// A host animation primitive.
///
/// Frames are pushed in with [`Animatable::advance`]; the primitive never
/// reads a clock on its own.
pub trait Animatable {
    /// Start from the beginning
    fn start(&mut self);

    /// Stop without jumping to the end value
    fn cancel(&mut self);

    /// Whether the animation has been started and not yet ended or cancelled
    fn is_running(&self) -> bool;

    /// Advance play time by one frame
    fn advance(&mut self, delta: Duration);

    /// Play time since start, across repeats
    fn current_play_time(&self) -> Duration;

    /// Seek to a play time
    fn set_current_play_time(&mut self, play_time: Duration);

    fn as_pausable(&self) -> Option<&dyn Pausable> {
        None
    }

    fn as_pausable_mut(&mut self) -> Option<&mut dyn Pausable> {
        None
    }

    fn as_tick_observable(&self) -> Option<&dyn TickObservable> {
        None
    }

    fn as_value_range_mut(&mut self) -> Option<&mut dyn ValueRange> {
        None
    }
}

/// Native pause/resume capability
pub trait Pausable {
    fn pause(&mut self);
    fn resume(&mut self);
    fn is_paused(&self) -> bool;
}

/// Capability to report the current animated value after each frame
pub trait TickObservable {
    fn animated_value(&self) -> f32;
}

/// Capability to reassign the repeat count of a bound animation
pub trait ValueRange {
    fn repeat_count(&self) -> RepeatCount;
    fn set_repeat_count(&mut self, repeat_count: RepeatCount);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_count_raw() {
        assert_eq!(RepeatCount::from_raw(-1), RepeatCount::Infinite);
        assert_eq!(RepeatCount::from_raw(-7), RepeatCount::Infinite);
        assert_eq!(RepeatCount::from_raw(3), RepeatCount::Times(3));
        assert_eq!(RepeatCount::Infinite.as_raw(), -1);
        assert_eq!(RepeatCount::Times(2).as_raw(), 2);
    }

    #[test]
    fn test_interpolator_endpoints() {
        for interpolator in [
            Interpolator::Linear,
            Interpolator::Accelerate,
            Interpolator::Decelerate,
            Interpolator::AccelerateDecelerate,
        ] {
            assert!(interpolator.interpolate(0.0).abs() < 1e-5);
            assert!((interpolator.interpolate(1.0) - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_interpolator_midpoints() {
        assert_eq!(Interpolator::Linear.interpolate(0.25), 0.25);
        assert_eq!(Interpolator::Accelerate.interpolate(0.5), 0.25);
        assert_eq!(Interpolator::Decelerate.interpolate(0.5), 0.75);
        assert!((Interpolator::AccelerateDecelerate.interpolate(0.5) - 0.5).abs() < 1e-5);
    }
}
