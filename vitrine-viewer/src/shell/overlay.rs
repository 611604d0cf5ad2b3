//! Overlay picker surface
//!
//! Composes the registry and history sync controller for the surface
//! where variations are opened full-screen over a picker: a card press
//! opens by id, the close button navigates back, and back/forward
//! notifications drive the selection.

use vitrine_model::{NavigationEntry, VariationId, VariationRegistry};

use crate::history::{HistoryBackend, HistorySyncController, SelectionChanged};

#[derive(Debug)]
pub struct OverlayShell<R, H> {
    registry: VariationRegistry<R>,
    history: HistorySyncController<H>,
}

impl<R, H: HistoryBackend> OverlayShell<R, H> {
    /// Build the surface over `registry`, reconciling the backend's
    /// initial fragment (a known id is restored as already open).
    pub fn new(registry: VariationRegistry<R>, backend: H) -> Self {
        let history = HistorySyncController::init(backend, &registry);
        Self { registry, history }
    }

    pub fn selected(&self) -> Option<&VariationId> {
        self.history.selected()
    }

    pub fn is_open(&self) -> bool {
        self.history.is_open()
    }

    /// Renderable unit of the open overlay, if any.
    pub fn active_unit(&self) -> Option<&R> {
        self.history.selected().and_then(|id| self.registry.get(id))
    }

    /// Card press: open `id` full-screen.
    pub fn open_pressed(&mut self, id: &VariationId) -> Option<SelectionChanged> {
        self.history.open(id.clone(), &self.registry)
    }

    /// Close-button press: request a back-navigation. The selection
    /// clears when the notification arrives.
    pub fn close_pressed(&mut self) {
        self.history.close();
    }

    /// Deliver a navigation notification from the backend.
    pub fn on_navigate(&mut self, entry: Option<&NavigationEntry>) -> Option<SelectionChanged> {
        self.history.on_navigate(entry, &self.registry)
    }

    pub fn registry(&self) -> &VariationRegistry<R> {
        &self.registry
    }

    pub fn history(&self) -> &HistorySyncController<H> {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut HistorySyncController<H> {
        &mut self.history
    }

    pub fn dispose(&mut self) {
        self.history.dispose();
    }
}
