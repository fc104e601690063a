//! Descriptor registry storage

use super::ConfigurationDescriptor;
use crate::config::ConfigurationKind;
use std::collections::BTreeMap;

/// Central table mapping each configuration variant to its descriptor.
#[derive(Debug, Clone, Default)]
pub struct DescriptorRegistry {
    descriptors: BTreeMap<ConfigurationKind, ConfigurationDescriptor>,
}

impl DescriptorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            descriptors: BTreeMap::new(),
        }
    }

    /// Create a registry pre-populated with all built-in descriptors.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for descriptor in super::builtins::builtin_descriptors() {
            registry.register(descriptor);
        }
        registry
    }

    /// Register a descriptor, replacing any previous one for the same kind.
    pub fn register(&mut self, descriptor: ConfigurationDescriptor) {
        tracing::debug!(
            kind = %descriptor.kind,
            display_name = %descriptor.display_name,
            "Registering configuration descriptor"
        );
        self.descriptors.insert(descriptor.kind, descriptor);
    }

    pub fn get(&self, kind: ConfigurationKind) -> Option<&ConfigurationDescriptor> {
        self.descriptors.get(&kind)
    }

    /// Look up a descriptor by its exact display name.
    pub fn find_by_display_name(&self, name: &str) -> Option<&ConfigurationDescriptor> {
        self.descriptors.values().find(|d| d.display_name == name)
    }

    pub fn contains(&self, kind: ConfigurationKind) -> bool {
        self.descriptors.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// All descriptors, ordered by kind.
    pub fn list(&self) -> Vec<&ConfigurationDescriptor> {
        self.descriptors.values().collect()
    }

    /// Display names, ordered by kind.
    pub fn display_names(&self) -> Vec<&str> {
        self.descriptors
            .values()
            .map(|d| d.display_name.as_str())
            .collect()
    }
}
