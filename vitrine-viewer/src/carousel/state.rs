//! CarouselScrollState: offset/index geometry and deadline bookkeeping

use std::time::{Duration, Instant};

/// Scroll-side state for a carousel instance.
///
/// Two deadlines drive all timing behavior. `suppress_until` marks the
/// end of the window in which scroll events are attributed to the
/// controller's own scroll command. `settle_deadline` is the debounce for
/// user scrolling; it is restarted by every accepted scroll event and
/// only the last one inside the quiet window fires.
#[derive(Debug, Clone, Default)]
pub struct CarouselScrollState {
    /// Width of one slide in pixels. Slides are full-bleed, so this is
    /// the viewport width, recomputed on attach and resize.
    pub slide_width: f32,
    suppress_until: Option<Instant>,
    settle_deadline: Option<Instant>,
}

impl CarouselScrollState {
    pub fn new(slide_width: f32) -> Self {
        Self {
            slide_width,
            ..Self::default()
        }
    }

    /// Map an offset to the nearest slide index, clamped to content.
    pub fn index_for_offset(&self, offset: f32, total: usize) -> usize {
        if total == 0 || self.slide_width <= 0.0 {
            return 0;
        }
        let raw = (offset / self.slide_width).round();
        let max = (total - 1) as f32;
        raw.clamp(0.0, max) as usize
    }

    /// Target offset that left-aligns `index`.
    pub fn offset_for_index(&self, index: usize) -> f32 {
        index as f32 * self.slide_width
    }

    pub fn is_suppressed(&self, now: Instant) -> bool {
        matches!(self.suppress_until, Some(until) if now < until)
    }

    /// Open the programmatic-suppression window. A new command always
    /// restarts the window from `now`.
    pub fn begin_suppression(&mut self, now: Instant, window: Duration) {
        self.suppress_until = Some(now + window);
    }

    /// Restart the settle debounce from `now`.
    pub fn restart_settle(&mut self, now: Instant, quiet: Duration) {
        self.settle_deadline = Some(now + quiet);
    }

    /// Consume an expired settle deadline. Returns true at most once per
    /// scheduled settle.
    pub fn take_expired_settle(&mut self, now: Instant) -> bool {
        match self.settle_deadline {
            Some(deadline) if now >= deadline => {
                self.settle_deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drop an expired suppression marker so `next_deadline` stays clean.
    pub fn expire_suppression(&mut self, now: Instant) {
        if matches!(self.suppress_until, Some(until) if now >= until) {
            self.suppress_until = None;
        }
    }

    pub fn cancel_settle(&mut self) {
        self.settle_deadline = None;
    }

    pub fn clear_deadlines(&mut self) {
        self.suppress_until = None;
        self.settle_deadline = None;
    }

    /// Earliest instant at which `poll` has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.suppress_until, self.settle_deadline) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}
