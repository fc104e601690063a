//! Selecting protocol behaviour from a configuration's version
//!
//! Callers get two explicit branches for a server without a declared
//! version: [`capability_of`] reports it as [`ProtocolCapability::Unknown`],
//! while [`require_version`] fails with [`Error::VersionUnspecified`].

use crate::config::NxrmConfiguration;
use crate::error::{Error, Result};
use crate::version::NxrmVersion;

/// What is known about the protocol a configured server speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtocolCapability {
    /// The configuration names a protocol generation.
    Known(NxrmVersion),
    /// The configuration leaves the generation unspecified.
    Unknown,
}

impl ProtocolCapability {
    pub fn version(&self) -> Option<NxrmVersion> {
        match self {
            ProtocolCapability::Known(version) => Some(*version),
            ProtocolCapability::Unknown => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, ProtocolCapability::Known(_))
    }
}

/// Report the protocol capability of a server. Never fails.
pub fn capability_of(config: &NxrmConfiguration) -> ProtocolCapability {
    match config.version() {
        Some(version) => ProtocolCapability::Known(version),
        None => {
            tracing::debug!(id = config.id(), "Server has no declared version");
            ProtocolCapability::Unknown
        }
    }
}

/// Resolve the protocol generation a client must use, failing fast when
/// the server does not declare one.
pub fn require_version(config: &NxrmConfiguration) -> Result<NxrmVersion> {
    config.version().ok_or_else(|| {
        tracing::debug!(
            id = config.id(),
            "Refusing version-specific operation on unversioned server"
        );
        Error::VersionUnspecified {
            id: config.id().to_string(),
        }
    })
}
