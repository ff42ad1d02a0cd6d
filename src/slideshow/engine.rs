use tokio::time::Instant;
use tracing::{debug, info, warn};

use super::steps::{self, StepInfo};
use super::timers::{TimerAction, TimerSet};
use crate::config::{ImageUrls, SlideshowTimings};
use crate::events::Key;
use crate::grid::Column;
use crate::host::{DisplaySlot, FullscreenHost, Label};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Stopped,
    Running,
    Paused,
}

/// Slideshow session controller.
///
/// Owns the column snapshot, the step cursor and every pending timer of the
/// session. The host is borrowed per call; the engine only toggles its
/// presentation state.
#[derive(Debug)]
pub struct Slideshow {
    columns: Vec<Column>,
    step: usize,
    lifecycle: Lifecycle,
    timers: TimerSet,
    timings: SlideshowTimings,
    urls: ImageUrls,
}

impl Slideshow {
    pub fn new(timings: SlideshowTimings, urls: ImageUrls) -> Self {
        Self {
            columns: Vec::new(),
            step: 0,
            lifecycle: Lifecycle::Stopped,
            timers: TimerSet::new(),
            timings,
            urls,
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_active(&self) -> bool {
        self.lifecycle != Lifecycle::Stopped
    }

    pub fn is_paused(&self) -> bool {
        self.lifecycle == Lifecycle::Paused
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn timers(&self) -> &TimerSet {
        &self.timers
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_due()
    }

    pub fn max_steps(&self) -> usize {
        steps::max_steps(self.columns.iter().map(|c| c.photos.len()))
    }

    /// Column and round of the cursor. Only meaningful once started.
    pub fn step_info(&self) -> StepInfo {
        steps::step_info(self.step, self.columns.len().max(1))
    }

    /// Begin a new session over `columns`. Returns `false`, leaving the
    /// current state untouched, when there is nothing to show.
    pub fn start<H: FullscreenHost>(
        &mut self,
        columns: Vec<Column>,
        now: Instant,
        host: &mut H,
    ) -> bool {
        let columns: Vec<Column> = columns
            .into_iter()
            .filter(|c| !c.photos.is_empty())
            .collect();
        if columns.is_empty() {
            debug!("no columns with photos; slideshow not started");
            return false;
        }

        self.timers.cancel_all();
        self.columns = columns;
        self.step = 0;
        self.lifecycle = Lifecycle::Running;

        let names: Vec<&str> = self.columns.iter().map(|c| c.name.as_str()).collect();
        host.populate_slots(&names);
        host.set_paused(false);
        host.open();
        info!(
            columns = self.columns.len(),
            max_steps = self.max_steps(),
            "slideshow started"
        );
        self.reveal(now, host);
        true
    }

    pub fn stop<H: FullscreenHost>(&mut self, host: &mut H) {
        self.lifecycle = Lifecycle::Stopped;
        self.timers.cancel_all();
        host.close();
        info!(step = self.step, "slideshow stopped");
    }

    pub fn pause<H: FullscreenHost>(&mut self, host: &mut H) {
        if self.lifecycle != Lifecycle::Running {
            return;
        }
        self.timers.cancel_all();
        self.lifecycle = Lifecycle::Paused;
        host.set_paused(true);
        debug!(step = self.step, "slideshow paused");
    }

    /// Resume a paused session. The reveal of the current step restarts from
    /// the beginning.
    pub fn resume<H: FullscreenHost>(&mut self, now: Instant, host: &mut H) {
        if self.lifecycle != Lifecycle::Paused {
            return;
        }
        self.lifecycle = Lifecycle::Running;
        host.set_paused(false);
        debug!(step = self.step, "slideshow resumed");
        self.reveal(now, host);
    }

    pub fn toggle_pause<H: FullscreenHost>(&mut self, now: Instant, host: &mut H) {
        match self.lifecycle {
            Lifecycle::Running => self.pause(host),
            Lifecycle::Paused => self.resume(now, host),
            Lifecycle::Stopped => {}
        }
    }

    /// Jump one step forward. Allowed while paused; re-arms auto-advance.
    pub fn next<H: FullscreenHost>(&mut self, now: Instant, host: &mut H) {
        if !self.is_active() {
            return;
        }
        self.timers.cancel_all();
        self.step = steps::step_forward(self.step, self.max_steps());
        self.rebuild(now, host);
    }

    pub fn prev<H: FullscreenHost>(&mut self, now: Instant, host: &mut H) {
        if !self.is_active() {
            return;
        }
        self.timers.cancel_all();
        self.step = steps::step_back(self.step, self.max_steps());
        self.rebuild(now, host);
    }

    /// Slideshow key bindings. Returns `true` when the key was consumed and
    /// its default action should be suppressed.
    pub fn handle_key<H: FullscreenHost>(&mut self, key: Key, now: Instant, host: &mut H) -> bool {
        if !self.is_active() {
            return false;
        }
        match key {
            Key::ArrowRight => self.next(now, host),
            Key::ArrowLeft => self.prev(now, host),
            Key::Space => self.toggle_pause(now, host),
            Key::Escape => return false,
        }
        true
    }

    /// Run every timer due at or before `now`, in deadline order. Timers
    /// scheduled by a firing timer count from that timer's deadline.
    pub fn fire_due<H: FullscreenHost>(&mut self, now: Instant, host: &mut H) {
        while let Some(timer) = self.timers.take_due(now) {
            self.on_timer(timer.action, timer.due, host);
        }
    }

    fn on_timer<H: FullscreenHost>(&mut self, action: TimerAction, at: Instant, host: &mut H) {
        match action {
            TimerAction::SwapPhoto { column, round } => {
                if let Some(slot) = host.slot(column) {
                    self.show(column, round, slot);
                }
                self.schedule_labels(at, column);
            }
            TimerAction::RevealName { column } => {
                if let Some(slot) = host.slot(column) {
                    slot.set_label_visible(Label::Name, true);
                }
            }
            TimerAction::RevealAge { column } => {
                if let Some(slot) = host.slot(column) {
                    slot.set_label_visible(Label::Age, true);
                }
            }
            TimerAction::Advance => {
                if self.lifecycle != Lifecycle::Running {
                    debug!(lifecycle = ?self.lifecycle, "auto-advance ignored");
                    return;
                }
                self.step = steps::step_forward(self.step, self.max_steps());
                self.reveal(at, host);
            }
        }
    }

    /// Bring the current column to its photo. A slot that already shows a
    /// photo fades out first and swaps after the swap delay.
    fn reveal<H: FullscreenHost>(&mut self, now: Instant, host: &mut H) {
        self.timers.cancel_all();
        let StepInfo { column, round } = self.step_info();
        debug!(step = self.step, column, round, "reveal");

        let Some(slot) = host.slot(column) else {
            warn!(column, "no display slot for column");
            self.schedule_labels(now, column);
            return;
        };
        if round > 0 {
            slot.set_label_visible(Label::Name, false);
            slot.set_label_visible(Label::Age, false);
            slot.set_hidden(true);
            self.timers.schedule(
                now,
                self.timings.swap_delay,
                TimerAction::SwapPhoto { column, round },
            );
        } else {
            self.show(column, round, slot);
            self.schedule_labels(now, column);
        }
    }

    /// Settle every column except the current one for the cursor, without
    /// staged reveals, then reveal the current column.
    fn rebuild<H: FullscreenHost>(&mut self, now: Instant, host: &mut H) {
        self.timers.cancel_all();
        let current = self.step_info();
        debug!(step = self.step, column = current.column, round = current.round, "rebuild");

        for column in 0..self.columns.len() {
            if column == current.column {
                continue;
            }
            let Some(slot) = host.slot(column) else {
                debug!(column, "no display slot for column; skipped");
                continue;
            };
            let visible = match steps::column_round(column, current) {
                Some(round) => {
                    self.show(column, round, slot);
                    true
                }
                None => {
                    slot.set_hidden(true);
                    false
                }
            };
            slot.set_label_visible(Label::Name, visible);
            slot.set_label_visible(Label::Age, visible);
        }

        self.reveal(now, host);
    }

    fn show<S: DisplaySlot>(&self, column: usize, round: usize, slot: &mut S) {
        let photo = self.columns[column].photo_for_round(round);
        slot.show_image(&self.urls.full_resolution(&photo.src));
        slot.set_caption(&photo.age);
        slot.set_hidden(false);
    }

    fn schedule_labels(&mut self, from: Instant, column: usize) {
        self.timers.schedule(
            from,
            self.timings.name_reveal,
            TimerAction::RevealName { column },
        );
        self.timers.schedule(
            from,
            self.timings.age_reveal,
            TimerAction::RevealAge { column },
        );
        self.timers
            .schedule(from, self.timings.advance, TimerAction::Advance);
    }
}
