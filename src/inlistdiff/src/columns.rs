// inlistdiff/src/columns.rs

//! Merging of MESA column selection lists (`history_columns.list` and
//! friends) into one list with the columns of both.

use crate::error::CompareError;
use log::info;
use std::collections::BTreeSet;
use std::fmt;
use std::io::Write;
use std::path::Path;

/// Which output a column list selects columns for, told by its file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnListKind {
    Profile,
    History,
    BinaryHistory,
    Unknown,
}

impl ColumnListKind {
    pub fn from_path(path: &Path) -> Self {
        let name = path.to_string_lossy();
        if name.contains("profile_columns.list") {
            ColumnListKind::Profile
        } else if name.contains("binary_history_columns.list") {
            // contains "history_columns.list" too
            ColumnListKind::BinaryHistory
        } else if name.contains("history_columns.list") {
            ColumnListKind::History
        } else {
            ColumnListKind::Unknown
        }
    }

    pub fn is_known(&self) -> bool {
        *self != ColumnListKind::Unknown
    }
}

impl fmt::Display for ColumnListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnListKind::Profile => "profile_columns",
            ColumnListKind::History => "history_columns",
            ColumnListKind::BinaryHistory => "binary_columns",
            ColumnListKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Columns named in a list file, comments and blank lines dropped.
pub fn read_column_list(path: &Path) -> Result<Vec<String>, CompareError> {
    let content = fs_err::read_to_string(path)?;
    Ok(parse_column_list(&content))
}

pub fn parse_column_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('!'))
        .map(|line| match line.split_once('!') {
            Some((column, _comment)) => column.trim_end().to_string(),
            None => line.to_string(),
        })
        .collect()
}

/// Sorted union of the columns of two lists of the same kind.
pub fn merge_column_lists(list1: &Path, list2: &Path) -> Result<Vec<String>, CompareError> {
    let left = ColumnListKind::from_path(list1);
    let right = ColumnListKind::from_path(list2);
    if left != right || !left.is_known() {
        return Err(CompareError::IncompatibleColumnLists { left, right });
    }

    let mut columns: BTreeSet<String> = read_column_list(list1)?.into_iter().collect();
    columns.extend(read_column_list(list2)?);

    Ok(columns.into_iter().collect())
}

/// Append columns to `output`, one per line, creating the file if needed.
pub fn append_columns(output: &Path, columns: &[String]) -> Result<(), CompareError> {
    let mut file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(output)?;

    for column in columns {
        writeln!(file, "{}", column)?;
    }

    info!("appended {} columns to {}", columns.len(), output.display());
    Ok(())
}
