//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod context;
pub mod init;
pub mod status;
pub mod team;

pub use args::{GlobalOptions, OutputFormat, SchemaArgs};
pub use context::CommandContext;

use crate::client::ApiVersion;

/// teamdir CLI - companion for the platform team directory
#[derive(Parser, Debug)]
#[command(name = "teamdir")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(long, global = true, env = "TEAMDIR_FORMAT", hide_env = true)]
    pub format: Option<OutputFormat>,

    /// Directory endpoint override (bypasses config file)
    #[arg(long, global = true, env = "TEAMDIR_ENDPOINT", hide_env = true)]
    pub endpoint: Option<String>,

    /// Directory API revision to target (v0, v1)
    #[arg(long, global = true, env = "TEAMDIR_API_VERSION", hide_env = true)]
    pub api_version: Option<ApiVersion>,

    /// Override config file location
    #[arg(long, global = true, env = "TEAMDIR_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "TEAMDIR_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize teamdir configuration
    Init,

    /// Show configuration status
    Status,

    /// Display version information
    Version,

    /// Query the team directory
    #[command(subcommand)]
    Team(TeamCommands),
}

/// Team directory queries
#[derive(Subcommand, Debug)]
pub enum TeamCommands {
    /// List teams in directory order
    List(SchemaArgs),

    /// List teams keyed by team id
    Map(SchemaArgs),
}
