//! Application state - drives a touch marquee in a terminal frame loop

use marquee_ui::{MarqueeView, MonospaceMetrics, TouchMarquee, Widget};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::config::{Config, RunConfig, TouchConfig};
use crate::terminal::TerminalSurface;

/// Main application state
pub struct App {
    marquee: TouchMarquee<MonospaceMetrics>,
    surface: TerminalSurface,
    run: RunConfig,
    /// Touch script sorted by time
    script: Vec<TouchConfig>,
    next_touch: usize,
    elapsed: Duration,
}

impl App {
    /// Create new app from configuration
    pub fn new(config: Config) -> Self {
        let metrics = MonospaceMetrics::default();
        let mut view = MarqueeView::from_attributes(metrics, &config.marquee);

        // One terminal cell per character
        let cell_width = metrics.cell_width(view.text_paint());
        let cell_height = view.text_size();
        let bounds = config.view.bounds(cell_width, cell_height);
        view.on_layout(bounds, config.view.layout_direction());

        log::info!(
            "Marquee: {} columns, cell {}px, scrollable={}",
            config.view.columns,
            cell_width,
            view.is_scrollable()
        );

        let mut script = config.touch;
        script.sort_by_key(|touch| touch.at_ms);

        Self {
            marquee: TouchMarquee::new(view),
            surface: TerminalSurface::new(config.view.columns, cell_width),
            run: config.run,
            script,
            next_touch: 0,
            elapsed: Duration::ZERO,
        }
    }

    pub fn marquee(&self) -> &TouchMarquee<MonospaceMetrics> {
        &self.marquee
    }

    /// Current terminal row
    pub fn row(&self) -> String {
        self.surface.row()
    }

    /// Advance one frame. Returns true if the row was redrawn.
    pub fn step(&mut self, delta: Duration) -> bool {
        self.elapsed += delta;
        self.apply_script();

        let view = self.marquee.marquee_mut();
        view.layout_if_needed();
        if !view.frame(delta) {
            return false;
        }
        self.surface.clear();
        view.on_draw(&mut self.surface);
        true
    }

    /// Deliver scripted touches that are due
    fn apply_script(&mut self) {
        while let Some(touch) = self.script.get(self.next_touch) {
            if Duration::from_millis(touch.at_ms) > self.elapsed {
                break;
            }
            log::info!("Touch {:?} at {}ms", touch.action, touch.at_ms);
            self.marquee.on_touch_event(touch.action);
            self.next_touch += 1;
        }
    }

    /// Run the frame loop, printing the row on every redraw
    pub fn run(&mut self) -> io::Result<()> {
        let interval = self.run.frame_interval();
        let length = self.run.run_length();
        let mut out = io::stdout().lock();

        while length.map_or(true, |length| self.elapsed < length) {
            if self.step(interval) {
                write!(out, "\r{}", self.row())?;
                out.flush()?;
            }
            if self.run.realtime {
                thread::sleep(interval);
            }
        }

        writeln!(out)?;
        log::info!("Finished after {:?}", self.elapsed);
        Ok(())
    }
}
