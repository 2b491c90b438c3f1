//! Scroll animator: owns the animation that drives the marquee scroll value

use std::time::Duration;

use super::{Animatable, Interpolator, RepeatCount, ValueAnimator};

/// Timing and range an animation is bound with
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationBinding {
    pub duration: Duration,
    pub from: f32,
    pub to: f32,
    pub repeat_count: RepeatCount,
    pub interpolator: Interpolator,
}

impl AnimationBinding {
    /// Linear binding from `from` to `to`
    pub fn linear(duration: Duration, from: f32, to: f32, repeat_count: RepeatCount) -> Self {
        Self {
            duration,
            from,
            to,
            repeat_count,
            interpolator: Interpolator::Linear,
        }
    }
}

/// Host hook creating the animation primitive for a binding
pub trait AnimationFactory {
    fn create(&mut self, binding: &AnimationBinding) -> Box<dyn Animatable>;
}

/// Default factory producing [`ValueAnimator`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueAnimatorFactory;

impl AnimationFactory for ValueAnimatorFactory {
    fn create(&mut self, binding: &AnimationBinding) -> Box<dyn Animatable> {
        Box::new(
            ValueAnimator::new(binding.duration, binding.from, binding.to)
                .with_repeat_count(binding.repeat_count)
                .with_interpolator(binding.interpolator),
        )
    }
}

type TickListener = Box<dyn FnMut(f32)>;

/// Wraps a single animation and exposes idempotent pause/resume.
///
/// When the host has no native pause (or the animation lacks the
/// [`Pausable`](super::Pausable) capability), pausing records the play time
/// and cancels; resuming restarts and seeks back to it.
pub struct ScrollAnimator {
    animation: Option<Box<dyn Animatable>>,
    /// Binding the current animation was created from (auto-derived only)
    binding: Option<AnimationBinding>,
    factory: Box<dyn AnimationFactory>,
    /// Host supports native pause/resume
    native_pause: bool,
    /// A custom animation was supplied; bindings are not derived
    explicitly_assigned: bool,
    repeat_count: RepeatCount,
    /// Play time saved by the pause shim
    paused_play_time: Option<Duration>,
    /// Held by `pause` until `resume`; rebound animations start paused
    held: bool,
    listener: Option<TickListener>,
}

impl std::fmt::Debug for ScrollAnimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollAnimator")
            .field("bound", &self.animation.is_some())
            .field("binding", &self.binding)
            .field("native_pause", &self.native_pause)
            .field("explicitly_assigned", &self.explicitly_assigned)
            .field("repeat_count", &self.repeat_count)
            .field("paused_play_time", &self.paused_play_time)
            .field("held", &self.held)
            .finish()
    }
}

impl ScrollAnimator {
    /// Create an animator using [`ValueAnimatorFactory`]
    pub fn new(native_pause: bool) -> Self {
        Self::with_factory(native_pause, Box::new(ValueAnimatorFactory))
    }

    /// Create an animator with a host animation factory
    pub fn with_factory(native_pause: bool, factory: Box<dyn AnimationFactory>) -> Self {
        Self {
            animation: None,
            binding: None,
            factory,
            native_pause,
            explicitly_assigned: false,
            repeat_count: RepeatCount::Infinite,
            paused_play_time: None,
            held: false,
            listener: None,
        }
    }

    /// Bind a fresh animation, stopping the previous one.
    ///
    /// Returns false and keeps the current animation when the binding is
    /// unchanged, so a running marquee is not restarted by a relayout.
    pub fn bind(&mut self, binding: AnimationBinding) -> bool {
        if self.animation.is_some() && self.binding.as_ref() == Some(&binding) {
            return false;
        }

        self.cancel();
        log::debug!(
            "Binding scroll animation: {:?} from {} to {} ({:?})",
            binding.duration,
            binding.from,
            binding.to,
            binding.repeat_count
        );
        self.animation = Some(self.factory.create(&binding));
        self.binding = Some(binding);
        true
    }

    /// Drop the current animation, cancelling it first
    pub fn unbind(&mut self) {
        self.cancel();
        self.animation = None;
        self.binding = None;
    }

    /// Replace the animation with a custom one (or none).
    ///
    /// Marks the animator as explicitly assigned.
    pub fn set_animation(&mut self, animation: Option<Box<dyn Animatable>>) {
        self.cancel();
        self.animation = animation;
        self.binding = None;
        self.explicitly_assigned = true;
    }

    pub fn animation(&self) -> Option<&dyn Animatable> {
        self.animation.as_deref()
    }

    pub fn binding(&self) -> Option<&AnimationBinding> {
        self.binding.as_ref()
    }

    pub fn is_bound(&self) -> bool {
        self.animation.is_some()
    }

    pub fn is_explicitly_assigned(&self) -> bool {
        self.explicitly_assigned
    }

    /// Repeat count used for derived bindings
    pub fn repeat_count(&self) -> RepeatCount {
        self.repeat_count
    }

    /// Set the repeat count for derived bindings and apply it to the
    /// current animation when it accepts one
    pub fn set_repeat_count(&mut self, repeat_count: RepeatCount) {
        self.repeat_count = repeat_count;
        if let Some(range) = self.animation.as_mut().and_then(|a| a.as_value_range_mut()) {
            range.set_repeat_count(repeat_count);
        }
        if let Some(binding) = self.binding.as_mut() {
            binding.repeat_count = repeat_count;
        }
    }

    /// Register the per-frame value callback
    pub fn set_tick_listener(&mut self, listener: impl FnMut(f32) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Start the animation. No-op when nothing is bound, when it is already
    /// running, or while it is held by the pause shim.
    ///
    /// While held by `pause`, a natively pausable animation is started and
    /// paused at once; otherwise the shim keeps it pending at play time 0.
    pub fn start(&mut self) {
        if self.paused_play_time.is_some() {
            return;
        }
        let native = self.uses_native_pause();
        let Some(animation) = self.animation.as_mut() else {
            return;
        };
        if animation.is_running() {
            return;
        }

        if !self.held {
            animation.start();
        } else if native {
            animation.start();
            if let Some(pausable) = animation.as_pausable_mut() {
                pausable.pause();
            }
        } else {
            self.paused_play_time = Some(Duration::ZERO);
        }
    }

    fn uses_native_pause(&self) -> bool {
        self.native_pause
            && self
                .animation
                .as_ref()
                .is_some_and(|a| a.as_pausable().is_some())
    }

    /// Pause. Idempotent; holds the animator until `resume`, so animations
    /// bound or started in between stay paused.
    pub fn pause(&mut self) {
        self.held = true;
        let native = self.uses_native_pause();
        let Some(animation) = self.animation.as_mut() else {
            return;
        };

        if native {
            if let Some(pausable) = animation.as_pausable_mut() {
                pausable.pause();
            }
            return;
        }

        if self.paused_play_time.is_none() && animation.is_running() {
            self.paused_play_time = Some(animation.current_play_time());
            animation.cancel();
        }
    }

    /// Resume. Idempotent; no-op when nothing is bound or paused.
    pub fn resume(&mut self) {
        self.held = false;
        let native = self.uses_native_pause();
        let Some(animation) = self.animation.as_mut() else {
            return;
        };

        if native {
            if let Some(pausable) = animation.as_pausable_mut() {
                pausable.resume();
            }
            return;
        }

        if let Some(play_time) = self.paused_play_time.take() {
            animation.start();
            animation.set_current_play_time(play_time);
        }
    }

    /// Cancel. Safe at any time; no tick is delivered afterwards until the
    /// animation is started again.
    pub fn cancel(&mut self) {
        self.paused_play_time = None;
        if let Some(animation) = self.animation.as_mut() {
            animation.cancel();
        }
    }

    pub fn is_running(&self) -> bool {
        self.animation.as_ref().is_some_and(|a| a.is_running())
    }

    /// True between `pause` and `resume`
    pub fn is_held(&self) -> bool {
        self.held
    }

    pub fn is_paused(&self) -> bool {
        if self.paused_play_time.is_some() {
            return true;
        }
        self.animation
            .as_ref()
            .and_then(|a| a.as_pausable())
            .is_some_and(|p| p.is_paused())
    }

    /// Play time of the animation, or the saved time while shim-paused
    pub fn current_play_time(&self) -> Duration {
        match (self.paused_play_time, self.animation.as_ref()) {
            (Some(play_time), _) => play_time,
            (None, Some(animation)) => animation.current_play_time(),
            (None, None) => Duration::ZERO,
        }
    }

    /// Advance one frame and return the new value, if the animation is
    /// running and observable.
    pub fn tick(&mut self, delta: Duration) -> Option<f32> {
        let animation = self.animation.as_mut()?;
        if !animation.is_running() || self.paused_play_time.is_some() {
            return None;
        }
        if animation.as_pausable().is_some_and(|p| p.is_paused()) {
            return None;
        }

        animation.advance(delta);
        let value = animation.as_tick_observable()?.animated_value();
        if let Some(listener) = self.listener.as_mut() {
            listener(value);
        }
        Some(value)
    }
}
