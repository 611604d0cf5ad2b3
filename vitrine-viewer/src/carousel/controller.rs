//! Carousel scroll controller
//!
//! Owns the discrete active-slide index and reconciles two sources of
//! motion against each other: user scrolling (reported as bare scroll
//! events, settled by debounce) and the controller's own scroll commands
//! (which open a suppression window so they are never re-interpreted as
//! user input). All entry points take `now` so hosts and tests drive the
//! clock explicitly; nothing here blocks.

use std::time::Instant;

use crate::carousel::state::CarouselScrollState;
use crate::carousel::types::{CarouselTimings, IndexChangeOrigin, IndexChanged};
use crate::error::ViewerError;
use crate::infra::runtime_config::RuntimeConfig;
use crate::viewport::{ScrollBehavior, ScrollViewport};

#[derive(Debug)]
pub struct CarouselScrollController<V> {
    total: usize,
    active: usize,
    state: CarouselScrollState,
    timings: CarouselTimings,
    viewport: Option<V>,
    disposed: bool,
}

impl<V: ScrollViewport> CarouselScrollController<V> {
    pub fn new(total: usize) -> Self {
        Self::new_with_config(total, &RuntimeConfig::default())
    }

    pub fn new_with_config(total: usize, rc: &RuntimeConfig) -> Self {
        Self {
            total,
            active: 0,
            state: CarouselScrollState::default(),
            timings: CarouselTimings::from_config(rc),
            viewport: None,
            disposed: false,
        }
    }

    /// Seed the active index before the viewport exists (e.g. from a URL
    /// fragment at mount). Clamped; emits nothing. After attachment,
    /// use [`Self::scroll_to_index`] instead.
    pub fn seed_index(&mut self, index: usize) {
        if self.viewport.is_none() && self.total > 0 {
            self.active = index.min(self.total - 1);
        }
    }

    /// Attach the scroll viewport and realign it to the active slide
    /// with an instant jump.
    pub fn attach(&mut self, viewport: V, now: Instant) {
        if self.disposed {
            return;
        }
        self.state.slide_width = viewport.width();
        self.viewport = Some(viewport);
        if self.active > 0 {
            self.issue_scroll(self.active, ScrollBehavior::Instant, now);
        }
    }

    pub fn is_attached(&self) -> bool {
        self.viewport.is_some()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn can_step_left(&self) -> bool {
        self.active > 0
    }

    pub fn can_step_right(&self) -> bool {
        self.total > 0 && self.active < self.total - 1
    }

    /// Request a move to `requested`. Out-of-range requests degrade to
    /// the clamped index; with no viewport attached this is a no-op. The
    /// index is updated and reported optimistically, without waiting for
    /// the viewport to finish moving.
    pub fn scroll_to_index(
        &mut self,
        requested: isize,
        behavior: ScrollBehavior,
        now: Instant,
    ) -> Option<IndexChanged> {
        if self.disposed || self.total == 0 {
            return None;
        }
        let max = (self.total - 1) as isize;
        let clamped = requested.clamp(0, max) as usize;
        if clamped as isize != requested {
            log::debug!(
                "clamping scroll request: {}",
                ViewerError::IndexOutOfRange {
                    requested,
                    total: self.total
                }
            );
        }
        if self.viewport.is_none() {
            log::debug!("dropping scroll request: {}", ViewerError::ViewportDetached);
            return None;
        }

        self.issue_scroll(clamped, behavior, now);

        if clamped != self.active {
            self.active = clamped;
            Some(IndexChanged {
                index: clamped,
                origin: IndexChangeOrigin::Programmatic,
            })
        } else {
            None
        }
    }

    /// Record a scroll event. Events stamped inside the suppression
    /// window belong to the controller's own motion and are ignored;
    /// everything else restarts the settle debounce.
    pub fn handle_scroll(&mut self, now: Instant) {
        if self.disposed || self.viewport.is_none() {
            return;
        }
        if self.state.is_suppressed(now) {
            log::trace!("ignoring scroll event inside suppression window");
            return;
        }
        self.state.restart_settle(now, self.timings.settle);
    }

    /// Recompute the slide width after a viewport resize. The offset is
    /// left alone; any misalignment self-corrects at the next settle.
    pub fn handle_resize(&mut self, _now: Instant) {
        if self.disposed {
            return;
        }
        if let Some(viewport) = &self.viewport {
            self.state.slide_width = viewport.width();
        }
    }

    /// Fire expired deadlines. On settle, the offset is read fresh from
    /// the viewport and rounded to the nearest slide; a change is only
    /// reported when the settled index differs from the active one.
    pub fn poll(&mut self, now: Instant) -> Option<IndexChanged> {
        if self.disposed {
            return None;
        }
        self.state.expire_suppression(now);
        if !self.state.take_expired_settle(now) {
            return None;
        }
        let viewport = self.viewport.as_ref()?;
        let settled = self.state.index_for_offset(viewport.offset(), self.total);
        if settled == self.active {
            return None;
        }
        log::debug!("scroll settled on slide {settled} (was {})", self.active);
        self.active = settled;
        Some(IndexChanged {
            index: settled,
            origin: IndexChangeOrigin::Settle,
        })
    }

    /// Earliest instant at which [`Self::poll`] has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        if self.disposed {
            return None;
        }
        self.state.next_deadline()
    }

    /// Cancel all pending deadlines and detach the viewport. Idempotent;
    /// a disposed controller ignores every subsequent call.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.state.clear_deadlines();
        self.viewport = None;
        self.disposed = true;
        log::debug!("carousel controller disposed");
    }

    fn issue_scroll(&mut self, index: usize, behavior: ScrollBehavior, now: Instant) {
        let window = match behavior {
            ScrollBehavior::Smooth => self.timings.suppress_smooth,
            ScrollBehavior::Instant => self.timings.suppress_instant,
        };
        // A command supersedes any in-flight user motion.
        self.state.cancel_settle();
        self.state.begin_suppression(now, window);
        let target = self.state.offset_for_index(index);
        if let Some(viewport) = self.viewport.as_mut() {
            viewport.scroll_to(target, behavior);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::SharedViewport;
    use std::time::Duration;

    const WIDTH: f32 = 800.0;

    fn attached(total: usize) -> (CarouselScrollController<SharedViewport>, SharedViewport) {
        let viewport = SharedViewport::new(WIDTH);
        let mut controller = CarouselScrollController::new(total);
        controller.attach(viewport.clone(), Instant::now());
        (controller, viewport)
    }

    #[test]
    fn requests_settle_on_the_clamped_index() {
        let (mut controller, viewport) = attached(7);
        let now = Instant::now();
        for (requested, expected) in [(3, 3), (-2, 0), (99, 6), (0, 0)] {
            controller.scroll_to_index(requested, ScrollBehavior::Instant, now);
            assert_eq!(controller.active_index(), expected, "request {requested}");
            assert_eq!(
                viewport.offset(),
                expected as f32 * WIDTH,
                "request {requested}"
            );
        }
    }

    #[test]
    fn repeated_requests_are_idempotent() {
        let (mut controller, _viewport) = attached(7);
        let now = Instant::now();
        let first = controller.scroll_to_index(4, ScrollBehavior::Smooth, now);
        assert_eq!(first.map(|e| e.index), Some(4));
        let second = controller.scroll_to_index(4, ScrollBehavior::Smooth, now);
        assert_eq!(second, None);
        assert_eq!(controller.active_index(), 4);
    }

    #[test]
    fn scroll_inside_suppression_window_never_moves_the_index() {
        let (mut controller, viewport) = attached(7);
        let start = Instant::now();
        controller.scroll_to_index(2, ScrollBehavior::Smooth, start);

        // Feedback from the controller's own motion, inside the window.
        viewport.set_offset(0.7 * WIDTH);
        controller.handle_scroll(start + Duration::from_millis(10));
        let fired = controller.poll(start + Duration::from_millis(599));
        assert_eq!(fired, None);
        assert_eq!(controller.active_index(), 2);
    }

    #[test]
    fn user_scroll_settles_after_the_quiet_window() {
        let (mut controller, viewport) = attached(7);
        let start = Instant::now();

        viewport.set_offset(2.4 * WIDTH);
        controller.handle_scroll(start);
        // Still moving: each event restarts the debounce.
        viewport.set_offset(2.9 * WIDTH);
        controller.handle_scroll(start + Duration::from_millis(30));
        assert_eq!(controller.poll(start + Duration::from_millis(60)), None);

        let settled = controller.poll(start + Duration::from_millis(80));
        assert_eq!(
            settled,
            Some(IndexChanged {
                index: 3,
                origin: IndexChangeOrigin::Settle,
            })
        );
    }

    #[test]
    fn settle_with_unchanged_index_reports_nothing() {
        let (mut controller, viewport) = attached(7);
        let start = Instant::now();
        viewport.set_offset(0.1 * WIDTH);
        controller.handle_scroll(start);
        assert_eq!(controller.poll(start + Duration::from_millis(60)), None);
        assert_eq!(controller.active_index(), 0);
    }

    #[test]
    fn detached_controller_ignores_requests() {
        let mut controller: CarouselScrollController<SharedViewport> =
            CarouselScrollController::new(7);
        assert_eq!(
            controller.scroll_to_index(3, ScrollBehavior::Smooth, Instant::now()),
            None
        );
        assert_eq!(controller.active_index(), 0);
    }

    #[test]
    fn attach_realigns_to_a_seeded_index() {
        let viewport = SharedViewport::new(WIDTH);
        let mut controller = CarouselScrollController::new(7);
        controller.seed_index(4);
        controller.attach(viewport.clone(), Instant::now());
        assert_eq!(controller.active_index(), 4);
        assert_eq!(
            viewport.last_command(),
            Some((4.0 * WIDTH, ScrollBehavior::Instant))
        );
    }

    #[test]
    fn resize_keeps_offset_until_next_settle() {
        let (mut controller, viewport) = attached(7);
        let start = Instant::now();
        controller.scroll_to_index(2, ScrollBehavior::Instant, start);
        assert_eq!(viewport.offset(), 2.0 * WIDTH);

        viewport.set_width(1000.0);
        controller.handle_resize(start + Duration::from_millis(100));
        // Offset untouched; index unchanged until a settle recomputes it.
        assert_eq!(viewport.offset(), 2.0 * WIDTH);
        assert_eq!(controller.active_index(), 2);

        controller.handle_scroll(start + Duration::from_millis(200));
        let settled = controller.poll(start + Duration::from_millis(260));
        // 1600 / 1000 rounds to slide 2: still aligned closely enough.
        assert_eq!(settled, None);
        assert_eq!(controller.active_index(), 2);
    }

    #[test]
    fn disposed_controller_observes_nothing() {
        let (mut controller, viewport) = attached(7);
        let start = Instant::now();
        viewport.set_offset(3.0 * WIDTH);
        controller.handle_scroll(start);
        controller.dispose();
        controller.dispose();

        assert_eq!(controller.poll(start + Duration::from_millis(500)), None);
        assert_eq!(
            controller.scroll_to_index(5, ScrollBehavior::Smooth, start),
            None
        );
        assert_eq!(controller.next_deadline(), None);
        assert_eq!(controller.active_index(), 0);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let (mut controller, _viewport) = attached(0);
        let now = Instant::now();
        assert_eq!(controller.scroll_to_index(0, ScrollBehavior::Smooth, now), None);
        assert!(!controller.can_step_left());
        assert!(!controller.can_step_right());
    }
}
