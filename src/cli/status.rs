//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "Team Directory Configuration".bold());

    let path = Config::resolve_path(opts.config_ref())?;
    if path.exists() {
        println!("Config file: {}", path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            path.display().to_string().cyan(),
            "(not created yet)".dimmed()
        );
    }

    let config = Config::load_or_default(opts.config_ref())?;

    // Endpoint provenance: override beats the config file.
    if let Some(endpoint) = opts.endpoint_ref() {
        println!(
            "{} Directory endpoint: {} {}",
            "✓".green(),
            endpoint,
            "(from flag or environment)".dimmed()
        );
    } else if let Some(ref endpoint) = config.endpoint {
        println!(
            "{} Directory endpoint: {} {}",
            "✓".green(),
            endpoint,
            "(from config file)".dimmed()
        );
    } else {
        println!("{} Directory endpoint not configured", "✗".red());
        println!("  → Set TEAMDIR_ENDPOINT or run 'teamdir init'");
    }

    let version = opts.api_version.unwrap_or(config.api_version);
    println!("{} Directory API revision: {}", "○".dimmed(), version);

    Ok(())
}
