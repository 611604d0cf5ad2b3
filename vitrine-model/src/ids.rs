use crate::error::ModelError;

/// Strongly typed id for presentation variations.
///
/// Variation ids double as URL fragments and history payload values, so
/// the character set is restricted to what survives both verbatim:
/// lowercase ASCII alphanumerics plus `-` and `_`, at most
/// [`VariationId::MAX_LEN`] bytes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String")
)]
pub struct VariationId(String);

impl VariationId {
    /// Upper bound on id length, in bytes.
    pub const MAX_LEN: usize = 32;

    /// Validate and construct an id from its string form.
    pub fn parse(raw: &str) -> Result<Self, ModelError> {
        let valid = !raw.is_empty()
            && raw.len() <= Self::MAX_LEN
            && raw.bytes().all(|b| {
                b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_'
            });
        if valid {
            Ok(VariationId(raw.to_owned()))
        } else {
            Err(ModelError::InvalidVariationId(raw.to_owned()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for VariationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for VariationId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for VariationId {
    type Error = ModelError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl std::fmt::Display for VariationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
