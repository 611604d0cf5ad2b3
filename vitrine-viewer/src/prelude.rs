//! Common imports for hosts embedding the viewer core.

pub use crate::carousel::{
    CarouselScrollController, DirectionalKey, IndexChangeOrigin, IndexChanged,
    KeyboardNavigationAdapter, Modifiers, render_window,
};
pub use crate::error::ViewerError;
pub use crate::history::{
    HistoryBackend, HistorySyncController, MemoryHistory, SelectionChanged,
};
pub use crate::infra::runtime_config::RuntimeConfig;
pub use crate::shell::{CarouselShell, OverlayShell, SlideSlot};
pub use crate::viewport::{ScrollBehavior, ScrollViewport, SharedViewport};

pub use vitrine_model::prelude::*;
