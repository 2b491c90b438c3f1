//! Built-in float value animator

use std::time::Duration;

use super::{Animatable, Interpolator, Pausable, RepeatCount, TickObservable, ValueRange};

/// Animates a float between two values over a duration, optionally repeating.
///
/// Supports every capability: native pause, per-frame values and
/// reassignable timing.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueAnimator {
    duration: Duration,
    from: f32,
    to: f32,
    repeat_count: RepeatCount,
    interpolator: Interpolator,
    /// Accumulated play time since start (excludes paused frames)
    play_time: Duration,
    running: bool,
    paused: bool,
    value: f32,
}

impl Default for ValueAnimator {
    fn default() -> Self {
        Self::new(Duration::ZERO, 0.0, 0.0)
    }
}

impl ValueAnimator {
    /// Create a linear animator that plays once
    pub fn new(duration: Duration, from: f32, to: f32) -> Self {
        Self {
            duration,
            from,
            to,
            repeat_count: RepeatCount::Times(0),
            interpolator: Interpolator::Linear,
            play_time: Duration::ZERO,
            running: false,
            paused: false,
            value: from,
        }
    }

    pub fn with_repeat_count(mut self, repeat_count: RepeatCount) -> Self {
        self.repeat_count = repeat_count;
        self
    }

    pub fn with_interpolator(mut self, interpolator: Interpolator) -> Self {
        self.interpolator = interpolator;
        self
    }

    pub fn interpolator(&self) -> Interpolator {
        self.interpolator
    }

    /// Current value
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Recompute the value from play time; ends the animation once the
    /// last repeat is complete
    fn update_value(&mut self) {
        let duration = self.duration.as_nanos();
        if duration == 0 {
            self.value = self.to;
            self.running = false;
            return;
        }

        let play_time = self.play_time.as_nanos();
        if let RepeatCount::Times(n) = self.repeat_count {
            let total = duration.saturating_mul(n as u128 + 1);
            if play_time >= total {
                self.value = self.to;
                self.running = false;
                return;
            }
        }

        let fraction = (play_time % duration) as f64 / duration as f64;
        let eased = self.interpolator.interpolate(fraction as f32);
        self.value = self.from + (self.to - self.from) * eased;
    }
}

impl Animatable for ValueAnimator {
    fn start(&mut self) {
        self.running = true;
        self.paused = false;
        self.play_time = Duration::ZERO;
        self.update_value();
    }

    fn cancel(&mut self) {
        self.running = false;
        self.paused = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn advance(&mut self, delta: Duration) {
        if !self.running || self.paused {
            return;
        }
        self.play_time = self.play_time.saturating_add(delta);
        self.update_value();
    }

    fn current_play_time(&self) -> Duration {
        self.play_time
    }

    fn set_current_play_time(&mut self, play_time: Duration) {
        self.play_time = play_time;
        self.update_value();
    }

    fn as_pausable(&self) -> Option<&dyn Pausable> {
        Some(self)
    }

    fn as_pausable_mut(&mut self) -> Option<&mut dyn Pausable> {
        Some(self)
    }

    fn as_tick_observable(&self) -> Option<&dyn TickObservable> {
        Some(self)
    }

    fn as_value_range_mut(&mut self) -> Option<&mut dyn ValueRange> {
        Some(self)
    }
}

impl Pausable for ValueAnimator {
    fn pause(&mut self) {
        if self.running {
            self.paused = true;
        }
    }

    fn resume(&mut self) {
        self.paused = false;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}

impl TickObservable for ValueAnimator {
    fn animated_value(&self) -> f32 {
        self.value
    }
}

impl ValueRange for ValueAnimator {
    fn repeat_count(&self) -> RepeatCount {
        self.repeat_count
    }

    fn set_repeat_count(&mut self, repeat_count: RepeatCount) {
        self.repeat_count = repeat_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_linear_progress() {
        let mut animator = ValueAnimator::new(ms(1000), 0.0, -100.0);
        assert!(!animator.is_running());

        animator.start();
        assert!(animator.is_running());
        assert_eq!(animator.value(), 0.0);

        animator.advance(ms(250));
        assert!((animator.value() + 25.0).abs() < 1e-3);

        animator.advance(ms(500));
        assert!((animator.value() + 75.0).abs() < 1e-3);
    }

    #[test]
    fn test_play_once_ends_on_final_value() {
        let mut animator = ValueAnimator::new(ms(100), 0.0, 10.0);
        animator.start();
        animator.advance(ms(150));

        assert!(!animator.is_running());
        assert_eq!(animator.value(), 10.0);

        // Ignored once ended
        animator.advance(ms(10));
        assert_eq!(animator.value(), 10.0);
    }

    #[test]
    fn test_infinite_repeat_wraps() {
        let mut animator =
            ValueAnimator::new(ms(1000), 0.0, -100.0).with_repeat_count(RepeatCount::Infinite);
        animator.start();
        animator.advance(ms(2250));

        assert!(animator.is_running());
        assert!((animator.value() + 25.0).abs() < 1e-3);
        assert_eq!(animator.current_play_time(), ms(2250));
    }

    #[test]
    fn test_finite_repeat_count() {
        let mut animator =
            ValueAnimator::new(ms(100), 0.0, 1.0).with_repeat_count(RepeatCount::Times(2));
        animator.start();

        animator.advance(ms(250));
        assert!(animator.is_running());

        animator.advance(ms(50));
        assert!(!animator.is_running());
        assert_eq!(animator.value(), 1.0);
    }

    #[test]
    fn test_zero_duration_jumps_to_end() {
        let mut animator = ValueAnimator::new(Duration::ZERO, 5.0, 9.0);
        animator.start();

        assert!(!animator.is_running());
        assert_eq!(animator.value(), 9.0);
    }

    #[test]
    fn test_native_pause_freezes_play_time() {
        let mut animator = ValueAnimator::new(ms(1000), 0.0, 100.0);
        animator.start();
        animator.advance(ms(100));

        animator.pause();
        assert!(animator.is_paused());
        animator.advance(ms(500));
        assert_eq!(animator.current_play_time(), ms(100));

        animator.resume();
        animator.advance(ms(100));
        assert_eq!(animator.current_play_time(), ms(200));
        assert!((animator.value() - 20.0).abs() < 1e-3);
    }

    #[test]
    fn test_pause_when_stopped_is_noop() {
        let mut animator = ValueAnimator::new(ms(1000), 0.0, 100.0);
        animator.pause();
        assert!(!animator.is_paused());
    }

    #[test]
    fn test_seek() {
        let mut animator =
            ValueAnimator::new(ms(1000), 0.0, -200.0).with_repeat_count(RepeatCount::Infinite);
        animator.start();
        animator.set_current_play_time(ms(500));

        assert!((animator.value() + 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_cancel_keeps_value() {
        let mut animator = ValueAnimator::new(ms(1000), 0.0, 100.0);
        animator.start();
        animator.advance(ms(400));
        animator.cancel();

        assert!(!animator.is_running());
        assert!((animator.value() - 40.0).abs() < 1e-3);
    }

    #[test]
    fn test_interpolated_values() {
        let mut animator = ValueAnimator::new(ms(1000), 0.0, 100.0)
            .with_interpolator(Interpolator::Accelerate);
        animator.start();
        animator.advance(ms(500));

        assert!((animator.value() - 25.0).abs() < 1e-3);
    }
}
