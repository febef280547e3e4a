// inlistdiff/src/compare/mod.rs

pub mod work_dir;

pub use work_dir::{first_inlist, is_binary_work_dir, report_label, WorkDir};

use crate::config::MesaDir;
use crate::constants::STAR_INLIST_KEYS;
use crate::defaults::DefaultsTable;
use crate::diff::{diff_namelists, Labeled, NamelistDiff, Report};
use crate::error::CompareError;
use crate::include::{resolve_inlist_path, resolve_namelist};
use inlistrs::{read_section, NamelistKind, NamelistRead, OptionMap, Section};
use log::info;
use std::path::{Path, PathBuf};

const INDIVIDUAL_STARS_BANNER: [&str; 9] = [
    "",
    "------------------------------------",
    " Now compare the individual stars...",
    "------------------------------------",
    "",
    "*************************",
    "* Compare primary stars *",
    "*************************",
    "",
];

const SECONDARIES_BANNER: [&str; 5] = [
    "**************************",
    "*  Done with primaries   *",
    "**************************",
    " Compare secondaries now *",
    "**************************",
];

const DONE_BANNER: [&str; 3] = [
    "**************************",
    "* Done with secondaries  *",
    "**************************",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompareOptions {
    /// Also compare the pgstar namelists
    pub pgstar: bool,
    /// Report matching values too
    pub verbose: bool,
}

/// Compares inlists and run directories against each other and the MESA
/// defaults.
#[derive(Debug)]
pub struct Comparator {
    defaults: DefaultsTable,
    options: CompareOptions,
}

impl Comparator {
    pub fn new(mesa_dir: MesaDir, options: CompareOptions) -> Self {
        Self {
            defaults: DefaultsTable::new(mesa_dir),
            options,
        }
    }

    /// Compare two inlist files on their own, without following any
    /// `read_extra_*` flags.
    pub fn compare_files(&mut self, left: &Path, right: &Path) -> Result<Report, CompareError> {
        info!("comparing inlists {} and {}", left.display(), right.display());
        let labels = (report_label(1, left), report_label(2, right));

        let mut sections = vec![Section::Job, Section::Eos, Section::Kap, Section::Controls];
        if self.options.pgstar {
            sections.push(Section::Pgstar);
        }

        // Every section carries its own header: a file may hold `&binary_controls`
        // without any job section.
        let mut reads = Vec::with_capacity(sections.len());
        for section in sections {
            let pair = read_pair(left, right, section)?;
            check_run_kinds(&labels, &pair)?;
            reads.push((section, pair));
        }

        let mut report = Report::new();
        for (section, (left_read, right_read)) in reads {
            let kind = section.kind(left_read.is_binary());
            report.push_namelist(self.diff(
                kind,
                Labeled::new(&labels.0, &left_read.options),
                Labeled::new(&labels.1, &right_read.options),
            )?);
        }
        Ok(report)
    }

    /// Compare two MESA run directories, following the inlists each of them
    /// reads from its `inlist`.
    pub fn compare_work_dirs(&mut self, left: &Path, right: &Path) -> Result<Report, CompareError> {
        let left = WorkDir::open(left, 1)?;
        let right = WorkDir::open(right, 2)?;

        let left_binary = left.is_binary()?;
        let right_binary = right.is_binary()?;
        if left_binary != right_binary {
            return Err(CompareError::RunKindMismatch {
                left: left.label,
                right: right.label,
                left_binary,
                right_binary,
            });
        }

        info!(
            "comparing {} run directories {} and {}",
            if left_binary { "binary" } else { "single star" },
            left.root.display(),
            right.root.display()
        );

        let mut report = Report::new();
        if left_binary {
            self.compare_binary_runs(&mut report, &left, &right)?;
        } else {
            self.compare_star(
                &mut report,
                (&left, &left.first_inlist),
                (&right, &right.first_inlist),
            )?;
        }
        Ok(report)
    }

    fn compare_binary_runs(
        &mut self,
        report: &mut Report,
        left: &WorkDir,
        right: &WorkDir,
    ) -> Result<(), CompareError> {
        let jobs = (
            resolve_namelist(NamelistKind::BinaryJob, &left.first_inlist, &left.root)?,
            resolve_namelist(NamelistKind::BinaryJob, &right.first_inlist, &right.root)?,
        );
        let diff = self.diff(
            NamelistKind::BinaryJob,
            Labeled::new(&left.label, &jobs.0),
            Labeled::new(&right.label, &jobs.1),
        )?;
        report.push_namelist(diff);

        let mut kinds = vec![NamelistKind::BinaryControls];
        if self.options.pgstar {
            kinds.push(NamelistKind::BinaryPgstar);
        }
        for kind in kinds {
            self.compare_resolved(
                report,
                kind,
                (left, &left.first_inlist),
                (right, &right.first_inlist),
            )?;
        }

        let mut star_inlists = Vec::with_capacity(STAR_INLIST_KEYS.len());
        for key in STAR_INLIST_KEYS {
            star_inlists.push((
                self.star_inlist(&jobs.0, key, &left.root)?,
                self.star_inlist(&jobs.1, key, &right.root)?,
            ));
        }

        report.push_banner(INDIVIDUAL_STARS_BANNER);
        for (star, (left_inlist, right_inlist)) in star_inlists.iter().enumerate() {
            if star > 0 {
                report.push_banner(SECONDARIES_BANNER);
            }
            self.compare_star(report, (left, left_inlist), (right, right_inlist))?;
        }
        report.push_banner(DONE_BANNER);

        Ok(())
    }

    /// Namelists of one star, each resolved from the star's starting inlist
    fn compare_star(
        &mut self,
        report: &mut Report,
        left: (&WorkDir, &PathBuf),
        right: (&WorkDir, &PathBuf),
    ) -> Result<(), CompareError> {
        let mut kinds = vec![
            NamelistKind::StarJob,
            NamelistKind::Eos,
            NamelistKind::Kap,
            NamelistKind::Controls,
        ];
        if self.options.pgstar {
            kinds.push(NamelistKind::Pgstar);
        }

        for kind in kinds {
            self.compare_resolved(report, kind, left, right)?;
        }
        Ok(())
    }

    fn compare_resolved(
        &mut self,
        report: &mut Report,
        kind: NamelistKind,
        (left, left_inlist): (&WorkDir, &PathBuf),
        (right, right_inlist): (&WorkDir, &PathBuf),
    ) -> Result<(), CompareError> {
        let left_options = resolve_namelist(kind, left_inlist, &left.root)?;
        let right_options = resolve_namelist(kind, right_inlist, &right.root)?;

        let diff = self.diff(
            kind,
            Labeled::new(&left.label, &left_options),
            Labeled::new(&right.label, &right_options),
        )?;
        report.push_namelist(diff);
        Ok(())
    }

    /// Starting inlist of one star of a binary, from `&binary_job` or its
    /// defaults.
    fn star_inlist(
        &mut self,
        job: &OptionMap,
        key: &str,
        work_dir: &Path,
    ) -> Result<PathBuf, CompareError> {
        let name = match job.get_unquoted(key) {
            Some(name) => name,
            None => self
                .defaults
                .get(NamelistKind::BinaryJob)?
                .get_unquoted(key)
                .ok_or_else(|| CompareError::MissingStarInlist {
                    key: key.to_string(),
                })?,
        };
        Ok(resolve_inlist_path(work_dir, name.trim()))
    }

    fn diff(
        &mut self,
        kind: NamelistKind,
        left: Labeled<'_>,
        right: Labeled<'_>,
    ) -> Result<NamelistDiff, CompareError> {
        let verbose = self.options.verbose;
        let defaults = self.defaults.get(kind)?;
        Ok(diff_namelists(kind, left, right, defaults, verbose))
    }
}

fn read_pair(
    left: &Path,
    right: &Path,
    section: Section,
) -> Result<(NamelistRead, NamelistRead), CompareError> {
    Ok((read_section(left, section)?, read_section(right, section)?))
}

fn check_run_kinds(
    labels: &(String, String),
    reads: &(NamelistRead, NamelistRead),
) -> Result<(), CompareError> {
    let left_binary = reads.0.is_binary();
    let right_binary = reads.1.is_binary();
    if left_binary == right_binary {
        return Ok(());
    }
    Err(CompareError::RunKindMismatch {
        left: labels.0.clone(),
        right: labels.1.clone(),
        left_binary,
        right_binary,
    })
}
