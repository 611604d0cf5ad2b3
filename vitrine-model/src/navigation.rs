use crate::ids::VariationId;

/// Payload carried by one navigation history frame.
///
/// The frame is the authority on which overlay (if any) is open at that
/// point in the stack. A `None` variation is the base state with nothing
/// open; on the wire it round-trips as `{"variation": null}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavigationEntry {
    pub variation: Option<VariationId>,
}

impl NavigationEntry {
    /// Frame for an open overlay showing `id`.
    pub fn open(id: VariationId) -> Self {
        Self {
            variation: Some(id),
        }
    }

    /// Base frame with no overlay open.
    pub fn closed() -> Self {
        Self { variation: None }
    }

    pub fn is_open(&self) -> bool {
        self.variation.is_some()
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn wire_shape_matches_browser_history_state() {
        let open = NavigationEntry::open(VariationId::parse("v2").unwrap());
        assert_eq!(
            serde_json::to_string(&open).unwrap(),
            r#"{"variation":"v2"}"#
        );
        assert_eq!(
            serde_json::to_string(&NavigationEntry::closed()).unwrap(),
            r#"{"variation":null}"#
        );
    }

    #[test]
    fn malformed_payload_ids_are_rejected() {
        let err = serde_json::from_str::<NavigationEntry>(r#"{"variation":"NOT OK"}"#);
        assert!(err.is_err());
    }
}
