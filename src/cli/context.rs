//! Command execution context
//!
//! Bundles config loading, endpoint resolution, and client construction so
//! command handlers do not repeat the same setup.

use crate::cli::args::{GlobalOptions, OutputFormat};
use crate::client::DirectoryClient;
use crate::config::Config;
use crate::error::Result;

/// Context for command execution containing config, client, and format.
pub struct CommandContext {
    /// Loaded configuration (empty if no config file exists)
    pub config: Config,

    /// Directory client bound to the resolved endpoint and API revision
    pub client: DirectoryClient,

    /// Resolved output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// Resolves the endpoint (flag/env over config file) and constructs the
    /// client, so a missing or malformed endpoint fails here, before any
    /// directory request is attempted.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_or_default(opts.config_ref())?;

        let format = match opts.format {
            Some(format) => format,
            None => match config.preferences.format.as_deref() {
                Some(name) => name.parse()?,
                None => OutputFormat::Table,
            },
        };

        let endpoint = config.resolve_endpoint(opts.endpoint_ref())?;
        let version = opts.api_version.unwrap_or(config.api_version);
        let client = DirectoryClient::new(&endpoint, version)?;

        Ok(Self {
            config,
            client,
            format,
        })
    }
}
