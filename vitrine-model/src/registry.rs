//! Registry mapping variation ids to externally supplied renderable units.
//!
//! The registry is populated by the host in presentation order (the order
//! dots and slides appear in). Navigation code never inspects the
//! renderable payload, only id membership and position.

use crate::error::ModelError;
use crate::ids::VariationId;

/// Lookup seam consumed by navigation controllers.
///
/// Controllers only ever ask whether an id is known; keeping that behind a
/// trait keeps them independent of the renderable payload type.
pub trait VariationLookup {
    fn contains_variation(&self, id: &VariationId) -> bool;
}

/// Ordered id → renderable-unit registry.
///
/// `R` is opaque to this crate: a component handle, a DOM node factory, a
/// test marker. Entries keep insertion order so carousel index and dot
/// position fall out of the registry itself.
#[derive(Debug, Clone, Default)]
pub struct VariationRegistry<R> {
    entries: Vec<(VariationId, R)>,
}

impl<R> VariationRegistry<R> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry, rejecting duplicate ids.
    pub fn insert(&mut self, id: VariationId, unit: R) -> Result<(), ModelError> {
        if self.contains(&id) {
            return Err(ModelError::DuplicateVariation(id.as_str().to_owned()));
        }
        self.entries.push((id, unit));
        Ok(())
    }

    /// Build a registry from `(id, unit)` pairs in presentation order.
    pub fn from_entries<I>(entries: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = (VariationId, R)>,
    {
        let mut registry = Self::new();
        for (id, unit) in entries {
            registry.insert(id, unit)?;
        }
        Ok(registry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &VariationId) -> bool {
        self.index_of(id).is_some()
    }

    /// Carousel position of `id`, if registered.
    pub fn index_of(&self, id: &VariationId) -> Option<usize> {
        self.entries.iter().position(|(entry_id, _)| entry_id == id)
    }

    pub fn id_at(&self, index: usize) -> Option<&VariationId> {
        self.entries.get(index).map(|(id, _)| id)
    }

    pub fn get(&self, id: &VariationId) -> Option<&R> {
        self.entries
            .iter()
            .find(|(entry_id, _)| entry_id == id)
            .map(|(_, unit)| unit)
    }

    pub fn unit_at(&self, index: usize) -> Option<&R> {
        self.entries.get(index).map(|(_, unit)| unit)
    }

    pub fn ids(&self) -> impl Iterator<Item = &VariationId> {
        self.entries.iter().map(|(id, _)| id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&VariationId, &R)> {
        self.entries.iter().map(|(id, unit)| (id, unit))
    }
}

impl<R> VariationLookup for VariationRegistry<R> {
    fn contains_variation(&self, id: &VariationId) -> bool {
        self.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> VariationId {
        VariationId::parse(raw).unwrap()
    }

    #[test]
    fn preserves_presentation_order() {
        let registry =
            VariationRegistry::from_entries((1..=7).map(|n| (id(&format!("v{n}")), n))).unwrap();
        assert_eq!(registry.len(), 7);
        assert_eq!(registry.index_of(&id("v3")), Some(2));
        assert_eq!(registry.id_at(6), Some(&id("v7")));
        assert_eq!(registry.get(&id("v5")), Some(&5));
        assert!(!registry.contains(&id("v8")));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut registry = VariationRegistry::new();
        registry.insert(id("v1"), ()).unwrap();
        assert_eq!(
            registry.insert(id("v1"), ()),
            Err(ModelError::DuplicateVariation("v1".into()))
        );
    }
}
