//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Manage the Nexus Repository Manager servers known to this host
#[derive(Parser, Debug)]
#[command(name = "nxrm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Server list file (.toml or .json)
    #[arg(short, long, global = true, env = "NXRM_CONFIG", default_value = "nxrm.toml")]
    pub config: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List the server kinds that can be configured
    Descriptors,

    /// List configured servers
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show one configured server
    Show {
        /// Server id
        id: String,
    },

    /// Add a server to the list
    ///
    /// Examples:
    ///   nxrm add --kind nxrm3 --id main --display-name Main --server-url https://nexus.example.com
    ///   nxrm add --kind simple --id test --display-name Test --server-url http://localhost:8081
    Add {
        /// Server kind (nxrm2, nxrm3, simple)
        #[arg(short, long)]
        kind: String,

        /// Unique server id
        #[arg(long)]
        id: String,

        /// Internal id (generated when omitted)
        #[arg(long)]
        internal_id: Option<String>,

        /// Human-readable name
        #[arg(long)]
        display_name: String,

        /// Base URL of the server
        #[arg(long)]
        server_url: String,

        /// Credential store reference
        #[arg(long, default_value = "")]
        credentials_id: String,
    },

    /// Remove a server from the list
    Remove {
        /// Server id
        id: String,
    },

    /// Validate the server list
    Check,
}
