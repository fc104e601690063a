//! Nexus Repository Manager protocol generations
//!
//! A configured server either names the protocol generation its client
//! must speak, or leaves it unspecified. The unspecified case is carried as
//! `Option::<NxrmVersion>::None` and is never folded into a default member.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Protocol generation of a Nexus Repository Manager server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NxrmVersion {
    /// Nexus Repository Manager 2.x
    Nxrm2,
    /// Nexus Repository Manager 3.x
    Nxrm3,
}

impl NxrmVersion {
    /// Major release number of this generation.
    pub fn major(&self) -> u8 {
        match self {
            NxrmVersion::Nxrm2 => 2,
            NxrmVersion::Nxrm3 => 3,
        }
    }
}

impl FromStr for NxrmVersion {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nxrm2" | "2" | "v2" | "2.x" => Ok(NxrmVersion::Nxrm2),
            "nxrm3" | "3" | "v3" | "3.x" => Ok(NxrmVersion::Nxrm3),
            _ => Err(Error::InvalidVersion {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for NxrmVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NxrmVersion::Nxrm2 => write!(f, "nxrm2"),
            NxrmVersion::Nxrm3 => write!(f, "nxrm3"),
        }
    }
}
