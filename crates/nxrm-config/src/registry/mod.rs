//! Descriptor registry for configuration variants
//!
//! Each configuration variant is announced by a descriptor carrying the
//! label shown when a user picks which kind of server to add. The table is
//! built explicitly at startup from [`builtin_descriptors`].

mod builtins;
mod store;
mod types;

pub use builtins::{builtin_descriptors, BUILTIN_COUNT, SIMPLE_DISPLAY_NAME};
pub use store::DescriptorRegistry;
pub use types::ConfigurationDescriptor;
