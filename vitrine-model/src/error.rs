use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    InvalidVariationId(String),
    DuplicateVariation(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidVariationId(raw) => {
                write!(f, "invalid variation id: {raw:?}")
            }
            ModelError::DuplicateVariation(id) => {
                write!(f, "duplicate variation: {id}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
