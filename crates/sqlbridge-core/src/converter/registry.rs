//! Registry mapping source node kinds to their specialized converters.

use super::NodeConverter;
use crate::error::RegistryError;
use std::collections::HashMap;

/// One converter per source node kind, checked when the registry is built.
#[derive(Default)]
pub struct ConverterRegistry {
    converters: HashMap<&'static str, Box<dyn NodeConverter>>,
}

impl ConverterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry, rejecting two converters for the same node kind.
    pub fn from_converters(
        converters: impl IntoIterator<Item = Box<dyn NodeConverter>>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for converter in converters {
            registry.register(converter)?;
        }
        Ok(registry)
    }

    pub fn register(&mut self, converter: Box<dyn NodeConverter>) -> Result<(), RegistryError> {
        let kind = converter.node_kind();
        if let Some(existing) = self.converters.get(kind) {
            return Err(RegistryError::DuplicateConverter {
                kind,
                existing: existing.name(),
                duplicate: converter.name(),
            });
        }
        self.converters.insert(kind, converter);
        Ok(())
    }

    pub fn get(&self, kind: &str) -> Option<&dyn NodeConverter> {
        self.converters.get(kind).map(|converter| converter.as_ref())
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    /// Registered node kinds, sorted.
    pub fn kinds(&self) -> Vec<&'static str> {
        let mut kinds: Vec<_> = self.converters.keys().copied().collect();
        kinds.sort_unstable();
        kinds
    }
}

impl std::fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut entries: Vec<_> = self
            .converters
            .iter()
            .map(|(kind, converter)| (*kind, converter.name()))
            .collect();
        entries.sort_unstable();
        f.debug_map().entries(entries).finish()
    }
}
