//! Nexus Repository Manager server configuration.
//!
//! A configured server is a [`NxrmConfiguration`]: five shared fields plus a
//! [`ConfigurationKind`] that decides which protocol generation it
//! announces. The test variant ([`ConfigurationKind::Simple`]) announces
//! none, and [`dispatch`] gives callers explicit branches for that case.
//!
//! ```
//! use nxrm_config::{DescriptorRegistry, ConfigurationKind, ServerFields};
//!
//! let registry = DescriptorRegistry::with_builtins();
//! let descriptor = registry.get(ConfigurationKind::Simple).unwrap();
//! assert_eq!(descriptor.display_name, "Nexus Repository Manager Test Server");
//!
//! let config = descriptor.create(ServerFields::new(
//!     "srv1", "int1", "Test Server", "https://nxrm.example.com", "cred-123",
//! ));
//! assert_eq!(config.version(), None);
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod global;
pub mod logging;
pub mod registry;
pub mod store;
pub mod validation;
pub mod version;

pub use config::{ConfigurationKind, NxrmConfiguration, ServerFields};
pub use dispatch::{ProtocolCapability, capability_of, require_version};
pub use error::{Error, Result};
pub use global::GlobalNxrmConfiguration;
pub use registry::{ConfigurationDescriptor, DescriptorRegistry};
pub use store::ConfigStore;
pub use validation::{Endpoint, FieldCheck, ValidationReport};
pub use version::NxrmVersion;
