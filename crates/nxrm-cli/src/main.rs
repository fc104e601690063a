//! Nexus Repository Manager server configuration CLI

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use nxrm_config::ConfigStore;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "error" };
    if let Err(e) = nxrm_config::logging::init(level) {
        eprintln!("{} could not set up logging: {}", "warning:".yellow().bold(), e);
    }
    tracing::debug!(config = %cli.config.display(), "Using server list");

    let store = ConfigStore::new(&cli.config);

    match cli.command {
        Some(cmd) => execute_command(&store, cmd),
        None => {
            println!("{} Nexus Repository Manager servers", "nxrm".green().bold());
            println!();
            println!("Run {} for available commands.", "nxrm --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(store: &ConfigStore, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Descriptors => commands::run_descriptors(),
        Commands::List { json } => commands::run_list(store, json),
        Commands::Show { id } => commands::run_show(store, &id),
        Commands::Add {
            kind,
            id,
            internal_id,
            display_name,
            server_url,
            credentials_id,
        } => commands::run_add(
            store,
            commands::AddArgs {
                kind: &kind,
                id: &id,
                internal_id: internal_id.as_deref(),
                display_name: &display_name,
                server_url: &server_url,
                credentials_id: &credentials_id,
            },
        ),
        Commands::Remove { id } => commands::run_remove(store, &id),
        Commands::Check => commands::run_check(store),
    }
}
