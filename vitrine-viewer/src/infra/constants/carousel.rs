//! Carousel timing and windowing constants
//!
//! Shared constants for carousel scroll reconciliation. Tuning should
//! happen here so every carousel instance updates consistently.

/// Suppression windows opened after a controller-issued scroll command.
/// Scroll events stamped inside the window are never interpreted as user
/// input.
pub mod suppression {
    /// Window following a smooth (animated) programmatic scroll (ms).
    /// Must outlast the longest smooth-scroll animation the host runs.
    pub const SMOOTH_MS: u64 = 600;
    /// Window following an instant jump (ms).
    pub const INSTANT_MS: u64 = 50;
}

/// Settle detection for user-initiated scrolling.
pub mod settle {
    /// Quiet time after the last scroll event before the motion is judged
    /// finished and a discrete index is committed (ms).
    pub const DEBOUNCE_MS: u64 = 50;
}

/// Render-window bounds for live slide content.
pub mod window {
    /// Distance from the active slide within which content stays live.
    pub const LIVE_RADIUS: usize = 1;
    /// Upper bound on concurrently live slides implied by `LIVE_RADIUS`.
    pub const MAX_LIVE: usize = 2 * LIVE_RADIUS + 1;
}
