//! Marquee that pauses while pressed
//!
//! Wraps a [`MarqueeView`] and adds touch handling: pressing pauses the
//! scroll animation, releasing resumes it.

use super::marquee::MarqueeView;
use super::{TouchAction, Widget};
use crate::text::TextMetrics;

/// Touch state of a [`TouchMarquee`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TouchState {
    #[default]
    Running,
    PausedByTouch,
}

/// A marquee with press-to-pause interaction
pub struct TouchMarquee<M> {
    /// Inner marquee (provides layout, animation and drawing)
    marquee: MarqueeView<M>,
    state: TouchState,
}

impl<M: TextMetrics> TouchMarquee<M> {
    pub fn new(marquee: MarqueeView<M>) -> Self {
        Self {
            marquee,
            state: TouchState::Running,
        }
    }

    pub fn state(&self) -> TouchState {
        self.state
    }

    /// Get the inner marquee
    pub fn marquee(&self) -> &MarqueeView<M> {
        &self.marquee
    }

    /// Get the inner marquee mutably
    pub fn marquee_mut(&mut self) -> &mut MarqueeView<M> {
        &mut self.marquee
    }

    /// Pause on press, whatever the current state
    fn pause(&mut self) {
        self.marquee.animator_mut().pause();
        self.state = TouchState::PausedByTouch;
    }

    /// Resume on release, overriding auto-start
    fn resume(&mut self) {
        self.marquee.animator_mut().resume();
        self.state = TouchState::Running;
    }
}

impl<M: TextMetrics> Widget for TouchMarquee<M> {
    fn on_touch_event(&mut self, action: TouchAction) -> bool {
        match action {
            TouchAction::Down => self.pause(),
            TouchAction::Up | TouchAction::Cancel | TouchAction::Exit => self.resume(),
            TouchAction::Move => {}
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HostCapabilities;
    use crate::elements::marquee::MarqueeOptions;
    use crate::geometry::{LayoutDirection, ViewBounds};
    use crate::text::MonospaceMetrics;
    use std::time::Duration;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn touch_marquee(native_pause: bool, auto_start: bool) -> TouchMarquee<MonospaceMetrics> {
        let capabilities = HostCapabilities {
            native_pause,
            ..Default::default()
        };
        let options = MarqueeOptions {
            text: Some("Hello World".to_string()),
            text_size: 20.0,
            auto_start,
            ..Default::default()
        };
        let mut marquee =
            MarqueeView::with_options(MonospaceMetrics::new(0.5), capabilities, options);
        marquee.on_layout(ViewBounds::new(50.0, 30.0), LayoutDirection::Ltr);
        TouchMarquee::new(marquee)
    }

    #[test]
    fn test_press_pauses_and_release_resumes() {
        for native_pause in [true, false] {
            let mut view = touch_marquee(native_pause, true);
            view.marquee_mut().frame(ms(100));
            let scroll = view.marquee().scroll();

            assert!(view.on_touch_event(TouchAction::Down));
            assert_eq!(view.state(), TouchState::PausedByTouch);
            assert!(view.marquee().animator().is_paused());
            view.marquee_mut().frame(ms(300));
            assert_eq!(view.marquee().scroll(), scroll);

            assert!(view.on_touch_event(TouchAction::Up));
            assert_eq!(view.state(), TouchState::Running);
            view.marquee_mut().frame(ms(100));
            // 140px over 700ms: 200ms of play
            assert!((view.marquee().scroll() + 40.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_repeated_events_are_idempotent() {
        let mut view = touch_marquee(false, true);
        view.marquee_mut().frame(ms(100));

        view.on_touch_event(TouchAction::Down);
        view.on_touch_event(TouchAction::Down);
        assert_eq!(view.marquee().animator().current_play_time(), ms(100));

        view.on_touch_event(TouchAction::Up);
        view.on_touch_event(TouchAction::Up);
        assert_eq!(view.state(), TouchState::Running);
        assert!(view.marquee().animator().is_running());
        assert_eq!(view.marquee().animator().current_play_time(), ms(100));
    }

    #[test]
    fn test_relayout_while_pressed_stays_paused() {
        for native_pause in [true, false] {
            let mut view = touch_marquee(native_pause, true);
            view.marquee_mut().frame(ms(100));

            view.on_touch_event(TouchAction::Down);
            view.marquee_mut().set_text("Another long marquee text");
            view.marquee_mut().layout_if_needed();
            view.marquee_mut().frame(ms(200));

            assert_eq!(view.state(), TouchState::PausedByTouch);
            assert!(view.marquee().animator().is_paused());
            assert_eq!(view.marquee().scroll(), 0.0);

            view.on_touch_event(TouchAction::Up);
            view.marquee_mut().frame(ms(100));
            // 280px over 1400ms
            assert!((view.marquee().scroll() + 20.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_exit_and_cancel_resume() {
        for release in [TouchAction::Exit, TouchAction::Cancel] {
            let mut view = touch_marquee(true, true);
            view.on_touch_event(TouchAction::Down);
            view.on_touch_event(release);

            assert_eq!(view.state(), TouchState::Running);
            assert!(!view.marquee().animator().is_paused());
        }
    }

    #[test]
    fn test_move_does_not_transition() {
        let mut view = touch_marquee(true, true);
        view.on_touch_event(TouchAction::Down);
        view.on_touch_event(TouchAction::Move);
        assert_eq!(view.state(), TouchState::PausedByTouch);
    }

    #[test]
    fn test_release_without_press_is_noop() {
        let mut view = touch_marquee(true, false);
        assert!(view.on_touch_event(TouchAction::Up));
        assert_eq!(view.state(), TouchState::Running);
        assert!(!view.marquee().animator().is_running());
    }

    #[test]
    fn test_touch_without_animator() {
        let mut marquee = MarqueeView::new(MonospaceMetrics::new(0.5), HostCapabilities::default());
        marquee.set_text_animator(None);
        let mut view = TouchMarquee::new(marquee);

        view.on_touch_event(TouchAction::Down);
        assert_eq!(view.state(), TouchState::PausedByTouch);
        view.on_touch_event(TouchAction::Up);
        assert_eq!(view.state(), TouchState::Running);
    }
}
