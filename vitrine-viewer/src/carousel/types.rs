//! Shared types for the carousel module

use std::time::Duration;

use crate::infra::runtime_config::RuntimeConfig;

/// What caused the active index to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexChangeOrigin {
    /// A controller-issued scroll command (keyboard step, dot press,
    /// initial fragment seed). Reported optimistically, before the
    /// viewport finishes moving.
    Programmatic,
    /// User scrolling came to rest and the settled offset rounded to a
    /// different slide.
    Settle,
}

/// Change notification emitted when the active slide index moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexChanged {
    pub index: usize,
    pub origin: IndexChangeOrigin,
}

/// Resolved timing windows for one carousel instance.
///
/// Durations are fixed at construction; hosts that tune at runtime build
/// a fresh controller from the updated [`RuntimeConfig`].
#[derive(Debug, Clone, Copy)]
pub struct CarouselTimings {
    pub settle: Duration,
    pub suppress_smooth: Duration,
    pub suppress_instant: Duration,
}

impl CarouselTimings {
    pub fn from_config(rc: &RuntimeConfig) -> Self {
        Self {
            settle: Duration::from_millis(rc.scroll_settle_ms()),
            suppress_smooth: Duration::from_millis(rc.suppress_smooth_ms()),
            suppress_instant: Duration::from_millis(rc.suppress_instant_ms()),
        }
    }
}

impl Default for CarouselTimings {
    fn default() -> Self {
        Self::from_config(&RuntimeConfig::default())
    }
}
