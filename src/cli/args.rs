//! Shared CLI argument types

use std::str::FromStr;

use clap::{Args, ValueEnum};

use crate::cli::Cli;
use crate::client::ApiVersion;
use crate::error::{ConfigError, Result};
use crate::schema::{FieldSpec, OutputSchema, OutputShape, TeamField};

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::UnknownFormat(other.to_string())),
        }
    }
}

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// For each option: CLI flag > environment variable > config file > default.
/// This struct captures the flag/env layer; config file fallbacks are
/// resolved later in `CommandContext`.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format (table, json)
    pub format: Option<OutputFormat>,

    /// Directory endpoint override (bypasses config file)
    pub endpoint: Option<String>,

    /// Directory API revision override (bypasses config file)
    pub api_version: Option<ApiVersion>,

    /// Custom config file path (defaults to ~/.teamdir/config.yaml)
    pub config: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            endpoint: cli.endpoint.clone(),
            api_version: cli.api_version,
            config: cli.config.clone(),
        }
    }

    /// Get endpoint override as `Option<&str>`.
    pub fn endpoint_ref(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }
}

/// Output schema declaration for team queries
#[derive(Debug, Clone, Args, Default)]
pub struct SchemaArgs {
    /// Attributes to include in the output (comma-separated; default: all)
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<String>,

    /// Attributes every team must supply (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub require: Vec<String>,
}

impl SchemaArgs {
    /// Build the declared output schema.
    ///
    /// Unknown attribute names and required attributes outside the field
    /// set are rejected here, before any request is made.
    pub fn to_schema(&self, shape: OutputShape) -> Result<OutputSchema> {
        let fields: Vec<TeamField> = if self.fields.is_empty() {
            TeamField::ALL.to_vec()
        } else {
            self.fields
                .iter()
                .map(|name| name.parse())
                .collect::<std::result::Result<_, ConfigError>>()?
        };

        let required: Vec<TeamField> = self
            .require
            .iter()
            .map(|name| name.parse())
            .collect::<std::result::Result<_, ConfigError>>()?;

        for field in &required {
            if !fields.contains(field) {
                return Err(ConfigError::RequiredFieldExcluded(field.name().to_string()).into());
            }
        }

        let specs = fields
            .into_iter()
            .map(|field| FieldSpec {
                field,
                required: required.contains(&field),
            })
            .collect();

        Ok(OutputSchema::new(shape, specs))
    }
}
