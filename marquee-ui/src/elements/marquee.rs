//! Marquee (scrolling text) view
//!
//! Single-line text that scrolls horizontally when it does not fit its
//! content rectangle. Two sources move the text:
//! - `scroll`: written only by the scroll animator on each frame
//! - `offset`: set by any caller, e.g. a drag or a client-owned animation
//!
//! Both are summed at draw time. A caller driving `offset` must bring it
//! back to 0 before the internal animation wraps, or the text jumps.

use std::time::Duration;

use crate::animation::{Animatable, AnimationBinding, RepeatCount, ScrollAnimator};
use crate::config::{AnimatorResource, HostCapabilities, MarqueeAttributes};
use crate::geometry::{LayoutDirection, Rect, ViewBounds};
use crate::property::FloatProperty;
use crate::surface::Surface;
use crate::text::{is_ltr_text, EnabledState, FontMetrics, TextColor, TextMetrics, TextPaint};

use super::measure::{resolve_size, MeasureSpec};

/// Padding appended to the text before it is repeated
pub const SEPARATOR: &str = "   ";

/// Copies of the padded text kept in the scrolling string
const COPIES: usize = 3;

/// Milliseconds of animation per pixel of padded text at speed 1.0
const SCROLL_MULTIPLIER: f32 = 5.0;

/// Initial configuration for a [`MarqueeView`]
pub struct MarqueeOptions {
    pub text: Option<String>,
    pub text_color: TextColor,
    /// Text size in pixels
    pub text_size: f32,
    pub scroll_speed: f32,
    pub auto_start: bool,
    pub enabled: bool,
    /// Custom animator replacing the width-derived one
    pub animator: Option<Box<dyn Animatable>>,
    pub repeat_count: RepeatCount,
}

impl Default for MarqueeOptions {
    fn default() -> Self {
        Self {
            text: None,
            text_color: TextColor::default(),
            text_size: 14.0,
            scroll_speed: 1.0,
            auto_start: true,
            enabled: true,
            animator: None,
            repeat_count: RepeatCount::Infinite,
        }
    }
}

/// Scrolling text view over a host text-measurement capability
pub struct MarqueeView<M> {
    metrics: M,
    capabilities: HostCapabilities,
    text: String,
    /// Text padded with the separator and repeated, rebuilt on layout
    scrolling_text: String,
    ltr_text: bool,
    text_color: TextColor,
    enabled: bool,
    paint: TextPaint,
    /// Internal animator value
    scroll: f32,
    /// External additive offset
    offset: f32,
    scroll_speed: f32,
    auto_start: bool,
    animator: ScrollAnimator,
    drawing_rect: Rect,
    font_metrics: FontMetrics,
    /// Measured width of `text`, kept current by the text and paint setters
    text_width: f32,
    /// Scrollability decided by the last layout pass
    scrolling: bool,
    /// Measured width of `scrolling_text` at the last layout
    scrolling_width: f32,
    last_layout: Option<(ViewBounds, LayoutDirection)>,
    layout_requested: bool,
    invalidated: bool,
}

impl<M: TextMetrics> MarqueeView<M> {
    /// Property handle for the external offset
    pub const OFFSET: FloatProperty<Self> = FloatProperty::new("offset", Self::offset, Self::set_offset);

    /// Create a view with default options
    pub fn new(metrics: M, capabilities: HostCapabilities) -> Self {
        Self::with_options(metrics, capabilities, MarqueeOptions::default())
    }

    /// Create a view and apply `options`
    pub fn with_options(metrics: M, capabilities: HostCapabilities, options: MarqueeOptions) -> Self {
        let mut view = Self {
            metrics,
            capabilities,
            text: String::new(),
            scrolling_text: String::new(),
            ltr_text: true,
            text_color: TextColor::default(),
            enabled: true,
            paint: TextPaint::default(),
            scroll: 0.0,
            offset: 0.0,
            scroll_speed: 1.0,
            auto_start: true,
            animator: ScrollAnimator::new(capabilities.native_pause),
            drawing_rect: Rect::default(),
            font_metrics: FontMetrics::default(),
            text_width: 0.0,
            scrolling: false,
            scrolling_width: 0.0,
            last_layout: None,
            layout_requested: true,
            invalidated: true,
        };
        view.configure(options);
        view
    }

    /// Create a view from parsed attributes
    pub fn from_attributes(metrics: M, attributes: &MarqueeAttributes) -> Self {
        let animator = attributes
            .animator_resource()
            .map(|resource| Box::new(resource.build()) as Box<dyn Animatable>);
        let options = MarqueeOptions {
            text: attributes.text.clone(),
            text_color: attributes.text_color(),
            text_size: attributes.text_size_px(),
            scroll_speed: attributes.scroll_speed,
            auto_start: attributes.auto_start,
            enabled: attributes.enabled,
            animator,
            repeat_count: attributes.repeat_count(),
        };
        Self::with_options(metrics, attributes.host, options)
    }

    /// Apply a full configuration. Inputs are sanitized; a layout pass is
    /// requested.
    pub fn configure(&mut self, options: MarqueeOptions) {
        self.text = options.text.unwrap_or_default();
        self.text_color = options.text_color;
        self.paint.size = options.text_size;
        self.scroll_speed = sanitize_speed(options.scroll_speed);
        self.auto_start = options.auto_start;
        self.animator.set_repeat_count(options.repeat_count);
        if let Some(animator) = options.animator {
            self.animator.set_animation(Some(animator));
        }
        self.set_enabled(options.enabled);
        self.remeasure();
        self.request_layout();
    }

    // ── Layout ──────────────────────────────────────────────

    /// Mark the view as needing a layout pass. Safe to call from within a
    /// tick; nothing about the animation changes until the pass runs.
    pub fn request_layout(&mut self) {
        self.layout_requested = true;
    }

    pub fn needs_layout(&self) -> bool {
        self.layout_requested
    }

    /// Re-run the last layout if one was requested since.
    ///
    /// Returns true if a layout pass ran.
    pub fn layout_if_needed(&mut self) -> bool {
        match self.last_layout {
            Some((bounds, direction)) if self.layout_requested => {
                self.on_layout(bounds, direction);
                true
            }
            _ => false,
        }
    }

    /// Layout pass: resolve the drawing rectangle, decide whether the text
    /// scrolls, rebuild the scrolling text and (re)bind the animator.
    pub fn on_layout(&mut self, bounds: ViewBounds, direction: LayoutDirection) {
        self.layout_requested = false;
        self.last_layout = Some((bounds, direction));

        self.scrolling_text = self.text.clone();
        self.ltr_text = is_ltr_text(&self.text);
        self.drawing_rect = bounds.content_rect(direction, self.capabilities.relative_padding);
        self.font_metrics = self.metrics.font_metrics(&self.paint);
        self.remeasure();
        self.scrolling = self.is_scrollable();

        if !self.scrolling {
            self.animator.cancel();
            self.scroll = 0.0;
            self.offset = 0.0;
            self.scrolling_width = self.text_width;
            log::debug!(
                "Marquee text fits ({} <= {}), not scrolling",
                self.text_width,
                self.drawing_rect.width()
            );
            self.invalidate();
            return;
        }

        let padded = format!("{}{}", self.text, SEPARATOR);
        let padded_width = measured_width(&mut self.metrics, &padded, &self.paint);

        if !self.animator.is_explicitly_assigned() {
            match scroll_duration(padded_width, self.scroll_speed) {
                Some(duration) => {
                    let binding = AnimationBinding::linear(
                        duration,
                        0.0,
                        -padded_width,
                        self.animator.repeat_count(),
                    );
                    // An unchanged binding keeps its play time, and so the scroll
                    if self.animator.bind(binding) {
                        self.scroll = 0.0;
                    }
                }
                None => {
                    log::debug!("Scroll speed is 0, marquee stays static");
                    self.animator.unbind();
                    self.scroll = 0.0;
                }
            }
        }

        self.scrolling_text = padded.repeat(COPIES);
        self.scrolling_width = measured_width(&mut self.metrics, &self.scrolling_text, &self.paint);

        if self.auto_start {
            self.animator.start();
        }
        self.invalidate();
    }

    /// Preferred size for the given parent constraints
    pub fn measure_size(
        &mut self,
        bounds: &ViewBounds,
        width_spec: MeasureSpec,
        height_spec: MeasureSpec,
    ) -> (f32, f32) {
        let relative = self.capabilities.relative_padding;
        let text_width = measured_width(&mut self.metrics, &self.text, &self.paint);
        let min_width = (text_width + bounds.padding.horizontal(relative)).ceil();
        let font_height = self.metrics.font_metrics(&self.paint).span();
        let min_height = (font_height + bounds.padding.vertical()).ceil();

        (
            resolve_size(min_width, width_spec),
            resolve_size(min_height, height_spec),
        )
    }

    // ── Frame / draw ────────────────────────────────────────

    /// Advance the animator by one frame.
    ///
    /// Returns true if the view needs a redraw.
    pub fn frame(&mut self, delta: Duration) -> bool {
        if let Some(value) = self.animator.tick(delta) {
            self.on_animation_tick(value);
        }
        self.invalidated
    }

    /// Apply an animator value
    pub fn on_animation_tick(&mut self, value: f32) {
        self.scroll = value;
        self.invalidate();
    }

    fn remeasure(&mut self) {
        self.text_width = measured_width(&mut self.metrics, &self.text, &self.paint);
    }

    fn invalidate(&mut self) {
        self.invalidated = true;
    }

    pub fn is_invalidated(&self) -> bool {
        self.invalidated
    }

    /// Width of one copy of the padded text
    pub fn unit_width(&self) -> f32 {
        self.scrolling_width / COPIES as f32
    }

    /// Combined scroll position before wrapping: scroll plus the offset,
    /// signed so a positive offset always moves along the reading direction
    pub fn scroll_position(&self) -> f32 {
        let offset = if self.ltr_text { self.offset } else { -self.offset };
        self.scroll + offset
    }

    /// Horizontal draw offset of the scrolling text relative to the drawing
    /// rectangle's left edge
    pub fn draw_offset(&self) -> f32 {
        let unit = self.unit_width();
        let shift = if self.scrolling { unit } else { 0.0 };
        let dx = wrap_offset(self.scroll_position(), unit) - shift;

        if self.ltr_text {
            dx
        } else {
            self.drawing_rect.width() - dx - unit * COPIES as f32
        }
    }

    /// Draw the text clipped to the drawing rectangle
    pub fn on_draw(&mut self, surface: &mut dyn Surface) {
        let dx = self.draw_offset();
        let baseline = self.drawing_rect.top + self.font_metrics.span();

        surface.clip_rect(self.drawing_rect);
        surface.draw_text(&self.scrolling_text, self.drawing_rect.left + dx, baseline, &self.paint);
        self.invalidated = false;
    }

    // ── Queries ─────────────────────────────────────────────

    /// True when the measured text is wider than the content rectangle.
    ///
    /// A text exactly as wide as the rectangle does not scroll, nor does
    /// anything in a view without content width. Reflects the current text
    /// and paint; the scrolling text itself is only rebuilt by layout.
    pub fn is_scrollable(&self) -> bool {
        let content_width = self.drawing_rect.width();
        content_width > 0.0 && self.text_width > content_width
    }

    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    pub fn scrolling_text(&self) -> &str {
        &self.scrolling_text
    }

    pub fn drawing_rect(&self) -> Rect {
        self.drawing_rect
    }

    /// Base direction of the text at the last layout
    pub fn is_ltr_text(&self) -> bool {
        self.ltr_text
    }

    pub fn animator(&self) -> &ScrollAnimator {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut ScrollAnimator {
        &mut self.animator
    }

    pub fn metrics(&self) -> &M {
        &self.metrics
    }

    // ── Properties ──────────────────────────────────────────

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the text. Scrolls only if it does not fit.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.remeasure();
        self.request_layout();
    }

    pub fn text_color(&self) -> TextColor {
        self.text_color
    }

    pub fn set_text_color(&mut self, text_color: TextColor) {
        self.text_color = text_color;
        self.paint.color = text_color.color_for(self.enabled.into());
        self.request_layout();
    }

    /// Text size in pixels
    pub fn text_size(&self) -> f32 {
        self.paint.size
    }

    pub fn set_text_size(&mut self, text_size: f32) {
        self.paint.size = text_size;
        self.remeasure();
        self.request_layout();
    }

    pub fn text_paint(&self) -> &TextPaint {
        &self.paint
    }

    /// Replace the paint. Its color is kept until the next enabled-state
    /// change.
    pub fn set_text_paint(&mut self, paint: TextPaint) {
        self.paint = paint;
        self.remeasure();
        self.request_layout();
    }

    pub fn repeat_count(&self) -> RepeatCount {
        self.animator.repeat_count()
    }

    pub fn set_repeat_count(&mut self, repeat_count: RepeatCount) {
        self.animator.set_repeat_count(repeat_count);
        self.request_layout();
    }

    /// External scroll contribution
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Set the external scroll contribution. Redraws without a layout pass.
    pub fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
        self.invalidate();
    }

    pub fn scroll_speed(&self) -> f32 {
        self.scroll_speed
    }

    /// Set the scroll speed (1.0 = normal). Non-positive values disable
    /// scrolling.
    pub fn set_scroll_speed(&mut self, scroll_speed: f32) {
        self.scroll_speed = sanitize_speed(scroll_speed);
        self.request_layout();
    }

    /// Replace the width-derived animator with a custom one, or remove
    /// animation entirely with `None`
    pub fn set_text_animator(&mut self, animator: Option<Box<dyn Animatable>>) {
        self.animator.set_animation(animator);
        self.request_layout();
    }

    /// Replace the animator with one built from a resource
    pub fn set_text_animator_resource(&mut self, resource: &AnimatorResource) {
        self.set_text_animator(Some(Box::new(resource.build())));
    }

    pub fn is_auto_start(&self) -> bool {
        self.auto_start
    }

    pub fn set_auto_start(&mut self, auto_start: bool) {
        self.auto_start = auto_start;
        self.request_layout();
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set the enabled state and resolve the paint color for it
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.paint.color = self.text_color.color_for(EnabledState::from(enabled));
        self.invalidate();
    }
}

/// Measure text, treating unmeasurable results as zero width
fn measured_width<M: TextMetrics>(metrics: &mut M, text: &str, paint: &TextPaint) -> f32 {
    let width = metrics.text_width(text, paint);
    if width.is_finite() && width > 0.0 {
        width
    } else {
        0.0
    }
}

fn sanitize_speed(speed: f32) -> f32 {
    if speed > 0.0 && speed.is_finite() {
        speed
    } else {
        if speed != 0.0 {
            log::warn!("Scroll speed {} is not positive, disabling scrolling", speed);
        }
        0.0
    }
}

/// Animation duration for one pass over `width` pixels, rounded to the
/// millisecond. `None` when the speed disables scrolling.
pub fn scroll_duration(width: f32, speed: f32) -> Option<Duration> {
    if speed <= 0.0 || !speed.is_finite() {
        return None;
    }
    let millis = (width / speed * SCROLL_MULTIPLIER).round();
    if !millis.is_finite() || millis < 0.0 {
        return None;
    }
    Some(Duration::from_millis(millis as u64))
}

/// Wrap `value` into `(-unit, 0]`. Zero for a degenerate unit.
pub fn wrap_offset(value: f32, unit: f32) -> f32 {
    if unit <= 0.0 || !unit.is_finite() || !value.is_finite() {
        return 0.0;
    }
    let rem = value % unit;
    if rem > 0.0 {
        rem - unit
    } else {
        rem
    }
}
