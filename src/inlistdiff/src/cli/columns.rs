// inlistdiff/src/cli/columns.rs

use crate::columns::{append_columns, merge_column_lists};
use crate::config::OutputFormat;
use anyhow::Context;
use std::path::Path;

/// Merge two column lists, appending the result to `output` or printing it
pub fn merge_columns(
    list1: &Path,
    list2: &Path,
    output: Option<&Path>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let columns = merge_column_lists(list1, list2)?;

    match (output, format) {
        (Some(path), _) => append_columns(path, &columns)?,
        (None, OutputFormat::Json) => {
            let json = serde_json::to_string_pretty(&columns)
                .context("Error serializing the merged columns")?;
            println!("{}", json);
        }
        (None, OutputFormat::Text) => {
            for column in &columns {
                println!("{}", column);
            }
        }
    }

    Ok(())
}
