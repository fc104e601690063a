//! Commands operating on the configured server list

use colored::Colorize;
use nxrm_config::{
    ConfigStore, ConfigurationKind, DescriptorRegistry, Endpoint, FieldCheck, ProtocolCapability,
    ServerFields, ValidationReport, capability_of,
};
use serde_json::json;

use crate::error::{CliError, Result};

/// Arguments of the add command
#[derive(Debug, Clone, Copy)]
pub struct AddArgs<'a> {
    pub kind: &'a str,
    pub id: &'a str,
    pub internal_id: Option<&'a str>,
    pub display_name: &'a str,
    pub server_url: &'a str,
    pub credentials_id: &'a str,
}

fn describe_version(capability: ProtocolCapability) -> String {
    match capability {
        ProtocolCapability::Known(version) => version.to_string(),
        ProtocolCapability::Unknown => "unspecified".to_string(),
    }
}

fn print_warnings(report: &ValidationReport) {
    for entry in report.warnings() {
        if let FieldCheck::Warning(message) = &entry.check {
            eprintln!(
                "{} [{}] {}: {}",
                "warning:".yellow().bold(),
                entry.server_id,
                entry.field,
                message
            );
        }
    }
}

/// Run the list command
pub fn run_list(store: &ConfigStore, as_json: bool) -> Result<()> {
    let global = store.load_global()?;

    if as_json {
        let servers: Vec<_> = global
            .iter()
            .map(|server| {
                json!({
                    "kind": server.kind().slug(),
                    "id": server.id(),
                    "internalId": server.internal_id(),
                    "displayName": server.display_name(),
                    "serverUrl": server.server_url(),
                    "credentialsId": server.credentials_id(),
                    "version": server.version().map(|v| v.to_string()),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&servers)?);
        return Ok(());
    }

    if global.is_empty() {
        println!("No servers configured. Use {} to add one.", "nxrm add".cyan());
        return Ok(());
    }

    println!("{}", "Configured Servers".bold());
    println!();
    for server in global.iter() {
        println!(
            "  {:<16} {} {} ({})",
            server.id().green(),
            server.display_name(),
            server.server_url().dimmed(),
            describe_version(capability_of(server))
        );
    }

    Ok(())
}

/// Run the show command
pub fn run_show(store: &ConfigStore, id: &str) -> Result<()> {
    let global = store.load_global()?;
    let server = global
        .get(id)
        .ok_or_else(|| CliError::user(format!("Server not found: {id}")))?;

    let registry = DescriptorRegistry::with_builtins();
    let kind_label = registry
        .get(server.kind())
        .map(|d| d.display_name.as_str())
        .unwrap_or_else(|| server.kind().slug());

    println!("{}", server.display_name().bold());
    println!("  {:<14} {}", "id:", server.id());
    println!("  {:<14} {}", "internal id:", server.internal_id());
    println!("  {:<14} {}", "kind:", kind_label);
    println!("  {:<14} {}", "server url:", server.server_url());
    println!("  {:<14} {}", "credentials:", server.credentials_id());
    println!(
        "  {:<14} {}",
        "version:",
        describe_version(capability_of(server))
    );

    let endpoint = Endpoint::parse(server.fields())?;
    tracing::debug!(base = %endpoint.base(), "Resolved endpoint");

    Ok(())
}

/// Run the add command
pub fn run_add(store: &ConfigStore, args: AddArgs<'_>) -> Result<()> {
    let kind: ConfigurationKind = args.kind.parse()?;
    let registry = DescriptorRegistry::with_builtins();
    let descriptor = registry
        .get(kind)
        .ok_or_else(|| CliError::user(format!("No descriptor registered for {kind}")))?;

    let fields = match args.internal_id {
        Some(internal_id) => ServerFields::new(
            args.id,
            internal_id,
            args.display_name,
            args.server_url,
            args.credentials_id,
        ),
        None => ServerFields::with_generated_internal_id(
            args.id,
            args.display_name,
            args.server_url,
            args.credentials_id,
        ),
    };

    let mut global = store.load_global()?;
    let servers = global.with_added(descriptor.create(fields));
    let report = global.replace_all(servers)?;
    print_warnings(&report);
    store.save_global(&global)?;

    println!(
        "{} Added {} ({})",
        "OK".green().bold(),
        args.id.cyan(),
        descriptor.display_name
    );
    Ok(())
}

/// Run the remove command
pub fn run_remove(store: &ConfigStore, id: &str) -> Result<()> {
    let mut global = store.load_global()?;
    let servers = global.without(id)?;
    global.replace_all(servers)?;
    store.save_global(&global)?;

    println!("{} Removed {}", "OK".green().bold(), id.cyan());
    Ok(())
}

/// Run the check command
pub fn run_check(store: &ConfigStore) -> Result<()> {
    let global = store.load_global()?;
    let report = global.validate()?;
    print_warnings(&report);

    println!(
        "{} {} server(s) valid",
        "OK".green().bold(),
        global.len()
    );
    Ok(())
}
