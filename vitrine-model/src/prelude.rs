//! Convenience re-exports for crates consuming the model layer.

pub use crate::error::{ModelError, Result as ModelResult};
pub use crate::ids::VariationId;
pub use crate::navigation::NavigationEntry;
pub use crate::registry::{VariationLookup, VariationRegistry};
