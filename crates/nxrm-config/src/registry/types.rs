//! Core types for the descriptor registry

use crate::config::{ConfigurationKind, NxrmConfiguration, ServerFields};
use crate::version::NxrmVersion;

/// Registration entry for one configuration variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationDescriptor {
    /// Variant this descriptor creates
    pub kind: ConfigurationKind,
    /// Label shown in the variant selection list
    pub display_name: String,
}

impl ConfigurationDescriptor {
    pub fn new(kind: ConfigurationKind, display_name: impl Into<String>) -> Self {
        Self {
            kind,
            display_name: display_name.into(),
        }
    }

    /// Bind submitted form fields to a configuration of this variant.
    pub fn create(&self, fields: ServerFields) -> NxrmConfiguration {
        NxrmConfiguration::new(self.kind, fields)
    }

    /// Protocol generation of configurations created by this descriptor.
    pub fn version(&self) -> Option<NxrmVersion> {
        self.kind.version()
    }
}
