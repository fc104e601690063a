//! Built-in descriptor registrations
//!
//! Every variant the crate knows about is listed here and nowhere else.

use super::ConfigurationDescriptor;
use crate::config::ConfigurationKind;

/// Number of built-in descriptors.
pub const BUILTIN_COUNT: usize = 3;

/// Label of the test server variant.
pub const SIMPLE_DISPLAY_NAME: &str = "Nexus Repository Manager Test Server";

/// Returns all built-in descriptors, in kind order.
pub fn builtin_descriptors() -> Vec<ConfigurationDescriptor> {
    vec![
        ConfigurationDescriptor::new(
            ConfigurationKind::Nxrm2,
            "Nexus Repository Manager 2.x Server",
        ),
        ConfigurationDescriptor::new(
            ConfigurationKind::Nxrm3,
            "Nexus Repository Manager 3.x Server",
        ),
        ConfigurationDescriptor::new(ConfigurationKind::Simple, SIMPLE_DISPLAY_NAME),
    ]
}
