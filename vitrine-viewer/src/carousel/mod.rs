//! Scroll-position-driven carousel control
//!
//! Separates state (offset/index geometry, deadlines), controller logic
//! (suppression and settle reconciliation), keyboard adaptation, and the
//! render-window policy.

pub mod controller;
pub mod keyboard;
pub mod state;
pub mod types;
pub mod window;

pub use controller::CarouselScrollController;
pub use keyboard::{DirectionalKey, KeyboardNavigationAdapter, Modifiers};
pub use state::CarouselScrollState;
pub use types::{CarouselTimings, IndexChangeOrigin, IndexChanged};
pub use window::render_window;
