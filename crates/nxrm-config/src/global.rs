//! The global list of configured servers
//!
//! The list is only ever replaced as a whole. Editing one server means
//! building a new list and passing it through [`GlobalNxrmConfiguration::replace_all`],
//! which re-runs every check.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::NxrmConfiguration;
use crate::error::{Error, Result};
use crate::validation::{self, ValidationReport};

/// All configured Nexus Repository Manager servers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalNxrmConfiguration {
    #[serde(default)]
    servers: Vec<NxrmConfiguration>,
}

impl GlobalNxrmConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from a list of servers, applying the same
    /// checks as [`replace_all`](Self::replace_all).
    pub fn from_servers(servers: Vec<NxrmConfiguration>) -> Result<Self> {
        let mut global = Self::new();
        global.replace_all(servers)?;
        Ok(global)
    }

    /// Swap in a new list of servers.
    ///
    /// On error the current list is left untouched. Warnings are returned
    /// in the report.
    pub fn replace_all(&mut self, servers: Vec<NxrmConfiguration>) -> Result<ValidationReport> {
        let report = Self::check(&servers)?;
        tracing::info!(count = servers.len(), "Replacing configured servers");
        self.servers = servers;
        Ok(report)
    }

    /// Validate a list without storing it.
    pub fn check(servers: &[NxrmConfiguration]) -> Result<ValidationReport> {
        let mut ids = HashSet::new();
        let mut internal_ids = HashSet::new();
        for server in servers {
            if !ids.insert(server.id()) {
                return Err(Error::DuplicateId {
                    id: server.id().to_string(),
                });
            }
            if !internal_ids.insert(server.internal_id()) {
                return Err(Error::DuplicateInternalId {
                    internal_id: server.internal_id().to_string(),
                });
            }
        }

        let report = validation::validate_all(servers);
        if report.has_errors() {
            return Err(Error::Validation(report));
        }
        for entry in report.warnings() {
            tracing::warn!(server = %entry.server_id, field = %entry.field, "{:?}", entry.check);
        }
        Ok(report)
    }

    /// Re-run the checks on the stored list, e.g. after loading from disk.
    pub fn validate(&self) -> Result<ValidationReport> {
        Self::check(&self.servers)
    }

    pub fn get(&self, id: &str) -> Option<&NxrmConfiguration> {
        self.servers.iter().find(|s| s.id() == id)
    }

    pub fn get_by_internal_id(&self, internal_id: &str) -> Option<&NxrmConfiguration> {
        self.servers.iter().find(|s| s.internal_id() == internal_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NxrmConfiguration> {
        self.servers.iter()
    }

    pub fn servers(&self) -> &[NxrmConfiguration] {
        &self.servers
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    /// The current list with `server` appended.
    pub fn with_added(&self, server: NxrmConfiguration) -> Vec<NxrmConfiguration> {
        let mut servers = self.servers.clone();
        servers.push(server);
        servers
    }

    /// The current list without the server named `id`.
    pub fn without(&self, id: &str) -> Result<Vec<NxrmConfiguration>> {
        if self.get(id).is_none() {
            return Err(Error::ServerNotFound { id: id.to_string() });
        }
        Ok(self
            .servers
            .iter()
            .filter(|s| s.id() != id)
            .cloned()
            .collect())
    }
}
