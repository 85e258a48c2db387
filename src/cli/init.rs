//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::client::{DirectoryApi, DirectoryClient};
use crate::config::Config;
use crate::error::Result;

/// Run the init command
///
/// Prompts for the directory endpoint, verifies it with a single fetch,
/// and saves the configuration file.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to teamdir!".bold().green());
    println!("Let's point the CLI at your team directory.\n");

    let mut config = Config::load_or_default(opts.config_ref())?;

    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme).with_prompt("Team directory endpoint URL");
    if let Some(endpoint) = opts
        .endpoint_ref()
        .map(str::to_string)
        .or_else(|| config.endpoint.clone())
    {
        input = input.default(endpoint);
    }
    let endpoint = input.interact_text()?;

    let version = opts.api_version.unwrap_or(config.api_version);

    println!("\n{}", "Verifying directory endpoint...".cyan());
    let client = DirectoryClient::new(&endpoint, version)?;
    let teams = client.fetch_teams().await?;
    println!(
        "{} Directory reachable ({} teams)",
        "✓".green(),
        teams.len()
    );

    config.endpoint = Some(endpoint);
    config.api_version = version;
    config.save_at(opts.config_ref())?;

    let path = Config::resolve_path(opts.config_ref())?;
    println!(
        "{} Configuration saved to {}",
        "✓".green(),
        path.display().to_string().cyan()
    );

    Ok(())
}
