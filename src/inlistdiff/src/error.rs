// inlistdiff/src/error.rs

use crate::columns::ColumnListKind;
use inlistrs::{InlistError, NamelistKind};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompareError {
    #[error("MESA_DIR is not set: pass --mesa-dir, export MESA_DIR or set mesa_dir in the config file")]
    MesaDirUnset,

    #[error("{kind} namelist not found in {}", mesa_dir.display())]
    MissingOptionalDefaults { kind: NamelistKind, mesa_dir: PathBuf },

    #[error("defaults for {kind} not found at {}", path.display())]
    MissingDefaults { kind: NamelistKind, path: PathBuf },

    #[error("{} has no inlist to start from", work_dir.display())]
    MissingFirstInlist { work_dir: PathBuf },

    #[error("cannot compare a single star setup with a binary setup: {left} is {}, {right} is {}",
        binary_label(*left_binary), binary_label(*right_binary))]
    RunKindMismatch {
        left: String,
        right: String,
        left_binary: bool,
        right_binary: bool,
    },

    #[error("{kind} include cycle detected: {}", format_chain(chain))]
    IncludeCycle {
        kind: NamelistKind,
        chain: Vec<PathBuf>,
    },

    #[error("{flag} is set in {} but no inlist name is given", source_file.display())]
    MissingIncludeName { flag: String, source_file: PathBuf },

    #[error("no {key} in binary_job and none in its defaults either")]
    MissingStarInlist { key: String },

    #[error("column list types incompatible: 1: {left}, 2: {right}")]
    IncompatibleColumnLists {
        left: ColumnListKind,
        right: ColumnListKind,
    },

    #[error(transparent)]
    Inlist(#[from] InlistError),

    /// File access through `fs_err`, whose message names the path
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn binary_label(binary: bool) -> &'static str {
    if binary {
        "a binary"
    } else {
        "a single star"
    }
}

fn format_chain(chain: &[PathBuf]) -> String {
    chain
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
