//! History stack / URL fragment / overlay-state synchronization.

pub mod backend;
pub mod controller;

pub use backend::{HistoryBackend, MemoryHistory};
pub use controller::{HistorySyncController, SelectionChanged};
