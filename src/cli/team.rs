//! Team directory commands

use log::debug;

use crate::cli::args::{GlobalOptions, OutputFormat, SchemaArgs};
use crate::cli::context::CommandContext;
use crate::client::DirectoryApi;
use crate::error::Result;
use crate::output::{json, table};
use crate::schema::{AttributeMap, OutputCollection, OutputSchema, OutputShape};

/// Run the team list command (teams in directory order)
pub async fn list(opts: &GlobalOptions, schema_args: &SchemaArgs) -> Result<()> {
    run(opts, schema_args, OutputShape::Sequence).await
}

/// Run the team map command (teams keyed by id)
pub async fn map(opts: &GlobalOptions, schema_args: &SchemaArgs) -> Result<()> {
    run(opts, schema_args, OutputShape::Keyed).await
}

async fn run(opts: &GlobalOptions, schema_args: &SchemaArgs, shape: OutputShape) -> Result<()> {
    // Validate the declared schema before any network traffic.
    let schema = schema_args.to_schema(shape)?;
    let ctx = CommandContext::new(opts)?;

    debug!(
        "Fetching teams from {} ({})",
        ctx.client.endpoint(),
        ctx.client.version()
    );
    let teams = ctx.client.fetch_teams().await?;
    debug!("Fetched {} teams", teams.len());

    let output = schema.project(teams)?;
    debug!("Projected {} output entries", output.len());

    match ctx.format {
        OutputFormat::Table => println!("{}", render_table(&schema, &output)),
        OutputFormat::Json => println!("{}", json::format_json(&output)?),
    }

    Ok(())
}

fn render_table(schema: &OutputSchema, output: &OutputCollection) -> String {
    let columns: Vec<String> = schema
        .fields()
        .iter()
        .map(|spec| spec.field.name().to_uppercase())
        .collect();

    let rows: Vec<Vec<String>> = match output {
        OutputCollection::Keyed(map) => map.values().map(|attrs| row(schema, attrs)).collect(),
        OutputCollection::Sequence(items) => {
            items.iter().map(|attrs| row(schema, attrs)).collect()
        }
    };

    table::format_records(columns, rows)
}

fn row(schema: &OutputSchema, attrs: &AttributeMap) -> Vec<String> {
    schema
        .fields()
        .iter()
        .map(|spec| {
            attrs
                .get(spec.field.name())
                .cloned()
                .flatten()
                .unwrap_or_else(|| "-".to_string())
        })
        .collect()
}
