//! Table output formatting

use tabled::{
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Render rows under the given header columns.
///
/// The column set is chosen by the declared schema at runtime, so the table
/// is built dynamically instead of from a derive.
pub fn format_records(columns: Vec<String>, rows: Vec<Vec<String>>) -> String {
    if rows.is_empty() {
        return "No teams found.".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(columns);
    for row in rows {
        builder.push_record(row);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}
