//! Command implementations for nxrm-cli

pub mod descriptors;
pub mod servers;

pub use descriptors::run_descriptors;
pub use servers::{AddArgs, run_add, run_check, run_list, run_remove, run_show};
