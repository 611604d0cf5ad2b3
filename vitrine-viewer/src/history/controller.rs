//! History sync controller
//!
//! Keeps a single "which overlay is open" selection in lockstep with the
//! navigation history stack and URL fragment. The stack is the single
//! source of truth: `open` pushes and updates state together, while
//! `close` only requests a back-navigation and lets the resulting
//! notification clear the selection. Mutating state without the matching
//! stack operation would desynchronize later back/forward behavior.

use vitrine_model::{NavigationEntry, VariationId, VariationLookup};

use crate::error::ViewerError;
use crate::history::backend::HistoryBackend;

/// Change notification emitted when the open-overlay selection moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChanged {
    pub selected: Option<VariationId>,
}

#[derive(Debug)]
pub struct HistorySyncController<H> {
    backend: H,
    selected: Option<VariationId>,
    disposed: bool,
}

impl<H: HistoryBackend> HistorySyncController<H> {
    /// Take ownership of the navigable context and reconcile the initial
    /// URL fragment. A fragment naming a known variation is treated as
    /// already open, and the base frame is replaced (not pushed) with
    /// that state so back-navigation leaves the page instead of first
    /// closing a phantom overlay. Anything else reads as Closed.
    pub fn init<L: VariationLookup>(backend: H, lookup: &L) -> Self {
        let mut controller = Self {
            backend,
            selected: None,
            disposed: false,
        };
        let fragment = controller.backend.fragment();
        if let Some(raw) = fragment {
            match VariationId::parse(&raw) {
                Ok(id) if lookup.contains_variation(&id) => {
                    log::debug!("restoring overlay {id} from fragment");
                    controller
                        .backend
                        .replace(&NavigationEntry::open(id.clone()));
                    controller.selected = Some(id);
                }
                Ok(id) => {
                    log::debug!(
                        "ignoring fragment: {}",
                        ViewerError::UnknownVariation(id)
                    );
                }
                Err(err) => {
                    log::debug!("ignoring unusable fragment {raw:?}: {err}");
                }
            }
        }
        controller
    }

    pub fn selected(&self) -> Option<&VariationId> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Open `id`: push a new frame and set the fragment. Always a push,
    /// even when `id` is already the open overlay, so every open has a
    /// matching back-step. Unknown ids degrade to a no-op.
    pub fn open<L: VariationLookup>(
        &mut self,
        id: VariationId,
        lookup: &L,
    ) -> Option<SelectionChanged> {
        if self.disposed {
            return None;
        }
        if !lookup.contains_variation(&id) {
            log::debug!("refusing open: {}", ViewerError::UnknownVariation(id));
            return None;
        }
        self.backend.push(&NavigationEntry::open(id.clone()));
        let changed = self.selected.as_ref() != Some(&id);
        self.selected = Some(id);
        changed.then(|| SelectionChanged {
            selected: self.selected.clone(),
        })
    }

    /// Close the open overlay by navigating back. State is untouched
    /// here; the backend's navigation notification performs the actual
    /// clear. With nothing open this is a no-op, so the base frame is
    /// never popped by a stray close.
    pub fn close(&mut self) {
        if self.disposed || self.selected.is_none() {
            return;
        }
        self.backend.back();
    }

    /// Apply a navigation notification (user pressed back/forward, or a
    /// requested back landed). The selection becomes whatever the frame
    /// carries; absent or unknown ids read as Closed.
    pub fn on_navigate<L: VariationLookup>(
        &mut self,
        entry: Option<&NavigationEntry>,
        lookup: &L,
    ) -> Option<SelectionChanged> {
        if self.disposed {
            return None;
        }
        let next = entry
            .and_then(|entry| entry.variation.clone())
            .filter(|id| {
                let known = lookup.contains_variation(id);
                if !known {
                    log::debug!(
                        "treating navigation as closed: {}",
                        ViewerError::UnknownVariation(id.clone())
                    );
                }
                known
            });
        if next == self.selected {
            return None;
        }
        self.selected = next;
        Some(SelectionChanged {
            selected: self.selected.clone(),
        })
    }

    pub fn backend(&self) -> &H {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut H {
        &mut self.backend
    }

    /// Detach from the navigable context. Idempotent; a disposed
    /// controller ignores opens, closes, and notifications alike.
    pub fn dispose(&mut self) {
        if !self.disposed {
            self.disposed = true;
            log::debug!("history sync controller disposed");
        }
    }
}
