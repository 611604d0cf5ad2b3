//! Full-screen carousel surface
//!
//! Composes the registry, scroll controller, and keyboard adapter for
//! the slide-per-variation carousel, and turns the active index into a
//! per-slide render plan through the render-window policy.

use std::time::Instant;

use vitrine_model::{VariationId, VariationRegistry};

use crate::carousel::{
    render_window, CarouselScrollController, DirectionalKey, IndexChanged,
    KeyboardNavigationAdapter, Modifiers,
};
use crate::infra::runtime_config::RuntimeConfig;
use crate::viewport::{ScrollBehavior, ScrollViewport};

/// One slide's render decision. Placeholders keep the slide's layout
/// footprint so scroll geometry is independent of what is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideSlot<'a, R> {
    Live { id: &'a VariationId, unit: &'a R },
    Placeholder { id: &'a VariationId },
}

#[derive(Debug)]
pub struct CarouselShell<R, V> {
    registry: VariationRegistry<R>,
    controller: CarouselScrollController<V>,
    keyboard: KeyboardNavigationAdapter,
}

impl<R, V: ScrollViewport> CarouselShell<R, V> {
    /// Build the surface over `registry`, seeding the active slide from
    /// the URL fragment when it names a registered variation.
    pub fn new(registry: VariationRegistry<R>, initial_fragment: Option<&str>) -> Self {
        Self::new_with_config(registry, initial_fragment, &RuntimeConfig::default())
    }

    pub fn new_with_config(
        registry: VariationRegistry<R>,
        initial_fragment: Option<&str>,
        rc: &RuntimeConfig,
    ) -> Self {
        let mut controller = CarouselScrollController::new_with_config(registry.len(), rc);
        if let Some(index) = initial_fragment
            .and_then(|raw| VariationId::parse(raw).ok())
            .and_then(|id| registry.index_of(&id))
        {
            controller.seed_index(index);
        }
        Self {
            registry,
            controller,
            keyboard: KeyboardNavigationAdapter::new(),
        }
    }

    /// Attach the scroll viewport once the host has one; the viewport is
    /// realigned to the active slide.
    pub fn attach_viewport(&mut self, viewport: V, now: Instant) {
        self.controller.attach(viewport, now);
    }

    pub fn active_index(&self) -> usize {
        self.controller.active_index()
    }

    pub fn active_id(&self) -> Option<&VariationId> {
        self.registry.id_at(self.controller.active_index())
    }

    pub fn can_step_left(&self) -> bool {
        self.controller.can_step_left()
    }

    pub fn can_step_right(&self) -> bool {
        self.controller.can_step_right()
    }

    pub fn handle_key(
        &mut self,
        key: DirectionalKey,
        modifiers: Modifiers,
        now: Instant,
    ) -> Option<IndexChanged> {
        self.keyboard
            .handle_key(key, modifiers, &mut self.controller, now)
    }

    /// Dot indicator press: jump straight to `index`.
    pub fn dot_pressed(&mut self, index: usize, now: Instant) -> Option<IndexChanged> {
        self.controller
            .scroll_to_index(index as isize, ScrollBehavior::Smooth, now)
    }

    /// Previous-arrow press. The view disables the button at the left
    /// bound via [`Self::can_step_left`]; the clamp covers stray presses.
    pub fn prev_pressed(&mut self, now: Instant) -> Option<IndexChanged> {
        let requested = self.controller.active_index() as isize - 1;
        self.controller
            .scroll_to_index(requested, ScrollBehavior::Smooth, now)
    }

    /// Next-arrow press.
    pub fn next_pressed(&mut self, now: Instant) -> Option<IndexChanged> {
        let requested = self.controller.active_index() as isize + 1;
        self.controller
            .scroll_to_index(requested, ScrollBehavior::Smooth, now)
    }

    pub fn handle_scroll(&mut self, now: Instant) {
        self.controller.handle_scroll(now);
    }

    pub fn handle_resize(&mut self, now: Instant) {
        self.controller.handle_resize(now);
    }

    pub fn poll(&mut self, now: Instant) -> Option<IndexChanged> {
        self.controller.poll(now)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.controller.next_deadline()
    }

    /// Per-slide render decisions in presentation order.
    pub fn render_plan(&self) -> Vec<SlideSlot<'_, R>> {
        let window = render_window(self.controller.active_index(), self.registry.len());
        self.registry
            .iter()
            .enumerate()
            .map(|(index, (id, unit))| {
                if window.contains(&index) {
                    SlideSlot::Live { id, unit }
                } else {
                    SlideSlot::Placeholder { id }
                }
            })
            .collect()
    }

    pub fn registry(&self) -> &VariationRegistry<R> {
        &self.registry
    }

    /// Tear the surface down: the keyboard adapter unbinds and the
    /// controller cancels its deadlines and drops the viewport.
    pub fn dispose(&mut self) {
        self.keyboard.detach();
        self.controller.dispose();
    }
}
