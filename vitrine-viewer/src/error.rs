use vitrine_model::VariationId;

/// Rejections that can occur while reconciling navigation input.
///
/// None of these ever cross the public controller API: every rejected
/// input degrades to the nearest safe idle state and is logged at debug
/// level. The enum exists so degradations are named and uniform in logs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ViewerError {
    #[error("slide index {requested} outside 0..{total}")]
    IndexOutOfRange { requested: isize, total: usize },

    #[error("unknown variation: {0}")]
    UnknownVariation(VariationId),

    #[error("no scroll viewport attached")]
    ViewportDetached,
}
