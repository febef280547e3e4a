// inlistdiff/src/lib.rs

pub mod cli;
pub mod columns;
pub mod compare;
pub mod config;
pub mod constants;
pub mod defaults;
pub mod diff;
pub mod error;
pub mod include;

// Re-export commonly used types
pub use compare::{CompareOptions, Comparator};
pub use config::{MesaDir, Settings};
pub use defaults::DefaultsTable;
pub use diff::{NamelistDiff, Report, ReportBlock};
pub use error::CompareError;
