//! List the configurable server kinds

use colored::Colorize;
use nxrm_config::DescriptorRegistry;

use crate::error::Result;

/// Run the descriptors command
pub fn run_descriptors() -> Result<()> {
    let registry = DescriptorRegistry::with_builtins();

    println!("{}", "Server Kinds".bold());
    println!();
    for descriptor in registry.list() {
        let version = match descriptor.version() {
            Some(version) => version.to_string(),
            None => "unspecified".to_string(),
        };
        println!(
            "  {:<8} {} ({})",
            descriptor.kind.slug().green(),
            descriptor.display_name,
            version.dimmed()
        );
    }
    println!();
    println!(
        "Use {} to configure one.",
        "nxrm add --kind <kind>".cyan()
    );

    Ok(())
}
