//! Compile-time defaults for viewer behavior.
//!
//! Constants live here; user-adjustable overrides go through
//! [`crate::infra::runtime_config::RuntimeConfig`].

pub mod carousel;
