// inlistrs/src/namelist.rs

//! The namelists a MESA run is configured with.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the namelists MESA reads from an inlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamelistKind {
    StarJob,
    BinaryJob,
    Eos,
    Kap,
    Controls,
    BinaryControls,
    Pgstar,
    BinaryPgstar,
}

impl NamelistKind {
    pub const ALL: [NamelistKind; 8] = [
        NamelistKind::StarJob,
        NamelistKind::BinaryJob,
        NamelistKind::Eos,
        NamelistKind::Kap,
        NamelistKind::Controls,
        NamelistKind::BinaryControls,
        NamelistKind::Pgstar,
        NamelistKind::BinaryPgstar,
    ];

    /// Name as written after `&` in an inlist
    pub fn name(&self) -> &'static str {
        match self {
            NamelistKind::StarJob => "star_job",
            NamelistKind::BinaryJob => "binary_job",
            NamelistKind::Eos => "eos",
            NamelistKind::Kap => "kap",
            NamelistKind::Controls => "controls",
            NamelistKind::BinaryControls => "binary_controls",
            NamelistKind::Pgstar => "pgstar",
            NamelistKind::BinaryPgstar => "binary_pgstar",
        }
    }

    /// Section header opening this namelist, e.g. `&star_job`
    pub fn header(&self) -> String {
        format!("&{}", self.name())
    }

    /// Location of the defaults file relative to the MESA root
    pub fn defaults_path(&self) -> &'static str {
        match self {
            NamelistKind::StarJob => "star/defaults/star_job.defaults",
            NamelistKind::BinaryJob => "binary/defaults/binary_job.defaults",
            NamelistKind::Eos => "eos/defaults/eos.defaults",
            NamelistKind::Kap => "kap/defaults/kap.defaults",
            NamelistKind::Controls => "star/defaults/controls.defaults",
            NamelistKind::BinaryControls => "binary/defaults/binary_controls.defaults",
            NamelistKind::Pgstar => "star/defaults/pgstar.defaults",
            NamelistKind::BinaryPgstar => "binary/defaults/binary_pgstar.defaults",
        }
    }

    /// Namelists that only exist in some MESA releases
    pub fn is_optional(&self) -> bool {
        matches!(self, NamelistKind::Eos | NamelistKind::Kap)
    }

    pub fn is_binary(&self) -> bool {
        matches!(
            self,
            NamelistKind::BinaryJob | NamelistKind::BinaryControls | NamelistKind::BinaryPgstar
        )
    }

    pub fn section(&self) -> Section {
        match self {
            NamelistKind::StarJob | NamelistKind::BinaryJob => Section::Job,
            NamelistKind::Eos => Section::Eos,
            NamelistKind::Kap => Section::Kap,
            NamelistKind::Controls | NamelistKind::BinaryControls => Section::Controls,
            NamelistKind::Pgstar | NamelistKind::BinaryPgstar => Section::Pgstar,
        }
    }

    /// Keys that switch on the extra inlist with the given index.
    ///
    /// MESA has spelled these two ways over time: `read_extra_controls_inlist1`
    /// and `read_extra_controls_inlist(1)`.
    pub fn read_extra_keys(&self, index: usize) -> [String; 2] {
        let name = self.name();
        [
            format!("read_extra_{name}_inlist{index}"),
            format!("read_extra_{name}_inlist({index})"),
        ]
    }

    /// Keys naming the extra inlist with the given index.
    pub fn extra_name_keys(&self, index: usize) -> [String; 2] {
        let name = self.name();
        [
            format!("extra_{name}_inlist{index}_name"),
            format!("extra_{name}_inlist_name({index})"),
        ]
    }
}

impl fmt::Display for NamelistKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Group of namelists that share a reader.
///
/// A single star inlist has `&star_job`, a binary one `&binary_job`; both are
/// read as the job section and the match tells which kind of run it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Job,
    Eos,
    Kap,
    Controls,
    Pgstar,
}

impl Section {
    /// Kinds recognized by this section, single star variant first
    pub fn kinds(&self) -> &'static [NamelistKind] {
        match self {
            Section::Job => &[NamelistKind::StarJob, NamelistKind::BinaryJob],
            Section::Eos => &[NamelistKind::Eos],
            Section::Kap => &[NamelistKind::Kap],
            Section::Controls => &[NamelistKind::Controls, NamelistKind::BinaryControls],
            Section::Pgstar => &[NamelistKind::Pgstar, NamelistKind::BinaryPgstar],
        }
    }

    /// The kind of this section for a single star or binary run
    pub fn kind(&self, binary: bool) -> NamelistKind {
        let kinds = self.kinds();
        if binary {
            kinds
                .iter()
                .copied()
                .find(NamelistKind::is_binary)
                .unwrap_or(kinds[0])
        } else {
            kinds[0]
        }
    }

    /// Match a comment-free, trimmed line against the section headers.
    pub fn match_header(&self, line: &str) -> Option<NamelistKind> {
        let line = line.to_lowercase();
        self.kinds()
            .iter()
            .copied()
            .find(|kind| kind.header() == line)
    }
}
