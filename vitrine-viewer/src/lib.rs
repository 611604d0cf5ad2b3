//! Vitrine viewer library
//!
//! Navigation-state synchronization for a brand-presentation viewer.
//! Everything visual is an external collaborator: the host supplies a
//! [`vitrine_model::VariationRegistry`] of renderable units and delivers
//! raw input (scroll events, key presses, pointer presses, navigation
//! notifications, clock polls); this crate owns the state that must stay
//! consistent across them: the active slide index, and the open-overlay
//! selection synchronized with the history stack and URL fragment.
//!
//! Notes
//! - Single-threaded and event-driven: all timing is deadline-valued and
//!   driven through `poll(now)`, nothing blocks.
//! - No error here ever reaches a caller; invalid input degrades to the
//!   nearest safe idle state and is logged at debug level.

pub mod carousel;
pub mod error;
pub mod history;
pub mod infra;
pub mod prelude;
pub mod shell;
pub mod viewport;

pub use error::ViewerError;
