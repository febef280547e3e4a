// inlistdiff/src/diff/mod.rs

pub mod differ;
pub mod report;

pub use differ::{diff_namelists, Finding, Labeled, NamelistDiff};
pub use report::{Report, ReportBlock};
