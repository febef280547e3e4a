// inlistdiff/src/cli/compare.rs

use crate::cli::RunSettings;
use crate::compare::Comparator;
use crate::config::OutputFormat;
use crate::diff::Report;
use anyhow::Context;
use std::io::{self, Write};
use std::path::Path;

/// Compare two inlist files and print the differences
pub fn compare_files(inlist1: &Path, inlist2: &Path, run: &RunSettings) -> anyhow::Result<()> {
    let mut comparator = Comparator::new(run.mesa_dir.clone(), run.options);
    let report = comparator.compare_files(inlist1, inlist2)?;
    print_report(&report, run.format)
}

/// Compare two MESA work directories, following nested inlists
pub fn compare_dirs(work_dir1: &Path, work_dir2: &Path, run: &RunSettings) -> anyhow::Result<()> {
    let mut comparator = Comparator::new(run.mesa_dir.clone(), run.options);
    let report = comparator.compare_work_dirs(work_dir1, work_dir2)?;
    print_report(&report, run.format)
}

fn print_report(report: &Report, format: OutputFormat) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    report
        .write(&mut out, format)
        .context("Error writing the report to stdout")?;
    out.flush().context("Error flushing stdout")?;
    Ok(())
}
