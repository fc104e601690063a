//! Repository server configuration records
//!
//! Every configured server shares the same five fields ([`ServerFields`]).
//! What differs between configuration variants is only the protocol
//! generation they announce, which is carried by the closed
//! [`ConfigurationKind`] tag rather than stored on the record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::version::NxrmVersion;

/// The fields common to every configured server.
///
/// Values are accepted as given. Checking them is the job of
/// [`crate::validation`] and of whoever finally connects to `server_url`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerFields {
    id: String,
    internal_id: String,
    display_name: String,
    server_url: String,
    credentials_id: String,
}

impl ServerFields {
    /// Create the field set in form order.
    pub fn new(
        id: impl Into<String>,
        internal_id: impl Into<String>,
        display_name: impl Into<String>,
        server_url: impl Into<String>,
        credentials_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            internal_id: internal_id.into(),
            display_name: display_name.into(),
            server_url: server_url.into(),
            credentials_id: credentials_id.into(),
        }
    }

    /// Create the field set for a newly added server, minting a random
    /// internal id.
    pub fn with_generated_internal_id(
        id: impl Into<String>,
        display_name: impl Into<String>,
        server_url: impl Into<String>,
        credentials_id: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            uuid::Uuid::new_v4().to_string(),
            display_name,
            server_url,
            credentials_id,
        )
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn internal_id(&self) -> &str {
        &self.internal_id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Reference into the external credential store. Never the secret.
    pub fn credentials_id(&self) -> &str {
        &self.credentials_id
    }
}

/// Closed set of configuration variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigurationKind {
    /// Server speaking the 2.x protocol
    Nxrm2,
    /// Server speaking the 3.x protocol
    Nxrm3,
    /// Test server with no declared protocol generation
    Simple,
}

impl ConfigurationKind {
    /// All variants, in registry order.
    pub const ALL: [ConfigurationKind; 3] = [
        ConfigurationKind::Nxrm2,
        ConfigurationKind::Nxrm3,
        ConfigurationKind::Simple,
    ];

    /// Protocol generation announced by this variant.
    pub fn version(&self) -> Option<NxrmVersion> {
        match self {
            ConfigurationKind::Nxrm2 => Some(NxrmVersion::Nxrm2),
            ConfigurationKind::Nxrm3 => Some(NxrmVersion::Nxrm3),
            ConfigurationKind::Simple => None,
        }
    }

    /// Machine identifier used in files and on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            ConfigurationKind::Nxrm2 => "nxrm2",
            ConfigurationKind::Nxrm3 => "nxrm3",
            ConfigurationKind::Simple => "simple",
        }
    }
}

impl FromStr for ConfigurationKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nxrm2" => Ok(ConfigurationKind::Nxrm2),
            "nxrm3" => Ok(ConfigurationKind::Nxrm3),
            "simple" | "test" => Ok(ConfigurationKind::Simple),
            _ => Err(Error::UnknownKind {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ConfigurationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// One configured Nexus Repository Manager server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NxrmConfiguration {
    kind: ConfigurationKind,
    #[serde(flatten)]
    fields: ServerFields,
}

impl NxrmConfiguration {
    pub fn new(kind: ConfigurationKind, fields: ServerFields) -> Self {
        Self { kind, fields }
    }

    pub fn nxrm2(fields: ServerFields) -> Self {
        Self::new(ConfigurationKind::Nxrm2, fields)
    }

    pub fn nxrm3(fields: ServerFields) -> Self {
        Self::new(ConfigurationKind::Nxrm3, fields)
    }

    /// Test server configuration. Its version is always absent.
    pub fn simple(fields: ServerFields) -> Self {
        Self::new(ConfigurationKind::Simple, fields)
    }

    pub fn kind(&self) -> ConfigurationKind {
        self.kind
    }

    pub fn fields(&self) -> &ServerFields {
        &self.fields
    }

    /// Protocol generation of this server, `None` when it is unspecified.
    pub fn version(&self) -> Option<NxrmVersion> {
        self.kind.version()
    }

    pub fn id(&self) -> &str {
        self.fields.id()
    }

    pub fn internal_id(&self) -> &str {
        self.fields.internal_id()
    }

    pub fn display_name(&self) -> &str {
        self.fields.display_name()
    }

    pub fn server_url(&self) -> &str {
        self.fields.server_url()
    }

    pub fn credentials_id(&self) -> &str {
        self.fields.credentials_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_fields() -> ServerFields {
        ServerFields::new(
            "srv1",
            "int1",
            "Test Server",
            "https://nxrm.example.com",
            "cred-123",
        )
    }

    #[test]
    fn test_simple_configuration_fields() {
        let config = NxrmConfiguration::simple(sample_fields());

        assert_eq!(config.id(), "srv1");
        assert_eq!(config.internal_id(), "int1");
        assert_eq!(config.display_name(), "Test Server");
        assert_eq!(config.server_url(), "https://nxrm.example.com");
        assert_eq!(config.credentials_id(), "cred-123");
        assert_eq!(config.version(), None);
    }

    #[test]
    fn test_kind_versions() {
        assert_eq!(ConfigurationKind::Nxrm2.version(), Some(NxrmVersion::Nxrm2));
        assert_eq!(ConfigurationKind::Nxrm3.version(), Some(NxrmVersion::Nxrm3));
        assert_eq!(ConfigurationKind::Simple.version(), None);
    }

    #[test]
    fn test_distinct_ids_are_distinct_values() {
        let a = NxrmConfiguration::simple(sample_fields());
        let b = NxrmConfiguration::simple(ServerFields::new(
            "srv2",
            "int1",
            "Test Server",
            "https://nxrm.example.com",
            "cred-123",
        ));
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_no_validation_on_construction() {
        let config = NxrmConfiguration::nxrm3(ServerFields::new("", " ", "", "not a url", ""));
        assert_eq!(config.server_url(), "not a url");
        assert_eq!(config.version(), Some(NxrmVersion::Nxrm3));
    }

    #[test]
    fn test_generated_internal_ids_differ() {
        let a = ServerFields::with_generated_internal_id("a", "A", "http://a", "");
        let b = ServerFields::with_generated_internal_id("a", "A", "http://a", "");
        assert!(!a.internal_id().is_empty());
        assert_ne!(a.internal_id(), b.internal_id());
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!(
            "NXRM2".parse::<ConfigurationKind>().unwrap(),
            ConfigurationKind::Nxrm2
        );
        assert_eq!(
            "test".parse::<ConfigurationKind>().unwrap(),
            ConfigurationKind::Simple
        );
        assert!("nxrm4".parse::<ConfigurationKind>().is_err());
    }

    #[test]
    fn test_serialized_field_names() {
        let config = NxrmConfiguration::nxrm2(sample_fields());
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["kind"], "nxrm2");
        assert_eq!(json["internalId"], "int1");
        assert_eq!(json["displayName"], "Test Server");
        assert_eq!(json["serverUrl"], "https://nxrm.example.com");
        assert_eq!(json["credentialsId"], "cred-123");
    }
}
