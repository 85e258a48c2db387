//! teamdir CLI - companion for the platform team directory

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod output;
mod schema;

use cli::{Cli, Commands, GlobalOptions, TeamCommands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("teamdir version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Team(team_cmd) => match team_cmd {
            TeamCommands::List(schema_args) => cli::team::list(&opts, &schema_args).await,
            TeamCommands::Map(schema_args) => cli::team::map(&opts, &schema_args).await,
        },
    }
}

fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    let _ = builder.try_init();
}
