//! Keyboard navigation adapter
//!
//! Translates directional key input into controller index requests. One
//! adapter exists per active carousel instance and detaches exactly once
//! at teardown; a detached adapter forwards nothing. Bound violations
//! (left at the first slide, right at the last) are absorbed by the
//! controller's clamp, not here.

use std::time::Instant;

use crate::carousel::controller::CarouselScrollController;
use crate::carousel::types::IndexChanged;
use crate::viewport::{ScrollBehavior, ScrollViewport};

/// Directional keys the adapter responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionalKey {
    ArrowLeft,
    ArrowRight,
}

/// Modifier state carried by a key event. Any held modifier means the
/// press belongs to the host (browser shortcuts, text navigation) and is
/// not a carousel step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }
}

#[derive(Debug)]
pub struct KeyboardNavigationAdapter {
    bound: bool,
}

impl Default for KeyboardNavigationAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardNavigationAdapter {
    pub fn new() -> Self {
        Self { bound: true }
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// Forward a directional key press as a one-slide step request.
    pub fn handle_key<V: ScrollViewport>(
        &self,
        key: DirectionalKey,
        modifiers: Modifiers,
        controller: &mut CarouselScrollController<V>,
        now: Instant,
    ) -> Option<IndexChanged> {
        if !self.bound || modifiers.any() {
            return None;
        }
        let delta: isize = match key {
            DirectionalKey::ArrowLeft => -1,
            DirectionalKey::ArrowRight => 1,
        };
        let requested = controller.active_index() as isize + delta;
        controller.scroll_to_index(requested, ScrollBehavior::Smooth, now)
    }

    /// Unbind from key input. Idempotent; called once at instance
    /// teardown so no listener outlives its owner.
    pub fn detach(&mut self) {
        if self.bound {
            self.bound = false;
            log::debug!("keyboard navigation adapter detached");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::SharedViewport;

    fn controller() -> CarouselScrollController<SharedViewport> {
        let mut controller = CarouselScrollController::new(7);
        controller.attach(SharedViewport::new(800.0), Instant::now());
        controller
    }

    #[test]
    fn arrows_step_one_slide() {
        let adapter = KeyboardNavigationAdapter::new();
        let mut controller = controller();
        let now = Instant::now();
        adapter.handle_key(DirectionalKey::ArrowRight, Modifiers::NONE, &mut controller, now);
        adapter.handle_key(DirectionalKey::ArrowRight, Modifiers::NONE, &mut controller, now);
        assert_eq!(controller.active_index(), 2);
        adapter.handle_key(DirectionalKey::ArrowLeft, Modifiers::NONE, &mut controller, now);
        assert_eq!(controller.active_index(), 1);
    }

    #[test]
    fn left_at_first_slide_stays_put() {
        let adapter = KeyboardNavigationAdapter::new();
        let mut controller = controller();
        let event = adapter.handle_key(
            DirectionalKey::ArrowLeft,
            Modifiers::NONE,
            &mut controller,
            Instant::now(),
        );
        assert_eq!(event, None);
        assert_eq!(controller.active_index(), 0);
    }

    #[test]
    fn modified_presses_belong_to_the_host() {
        let adapter = KeyboardNavigationAdapter::new();
        let mut controller = controller();
        let with_alt = Modifiers {
            alt: true,
            ..Modifiers::NONE
        };
        let event = adapter.handle_key(
            DirectionalKey::ArrowRight,
            with_alt,
            &mut controller,
            Instant::now(),
        );
        assert_eq!(event, None);
        assert_eq!(controller.active_index(), 0);
    }

    #[test]
    fn detached_adapter_forwards_nothing() {
        let mut adapter = KeyboardNavigationAdapter::new();
        let mut controller = controller();
        adapter.detach();
        adapter.detach();
        let event = adapter.handle_key(
            DirectionalKey::ArrowRight,
            Modifiers::NONE,
            &mut controller,
            Instant::now(),
        );
        assert_eq!(event, None);
        assert_eq!(controller.active_index(), 0);
    }
}
