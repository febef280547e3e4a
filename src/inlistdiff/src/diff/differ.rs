// inlistdiff/src/diff/differ.rs

use inlistrs::{InlistValue, NamelistKind, OptionMap};
use log::warn;
use serde::Serialize;

/// A namelist mapping together with the label it is reported under
#[derive(Debug, Clone, Copy)]
pub struct Labeled<'a> {
    pub label: &'a str,
    pub options: &'a OptionMap,
}

impl<'a> Labeled<'a> {
    pub fn new(label: &'a str, options: &'a OptionMap) -> Self {
        Self { label, options }
    }
}

/// One line item of a namelist comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Finding {
    /// Set in both, to different values
    Mismatch {
        key: String,
        left_label: String,
        left: InlistValue,
        right_label: String,
        right: InlistValue,
    },
    /// Set in both, to the same value (verbose only)
    Match {
        key: String,
        left_label: String,
        left: InlistValue,
        right_label: String,
        right: InlistValue,
    },
    /// Set on one side only, to something other than the default
    DiffersFromDefault {
        key: String,
        label: String,
        value: InlistValue,
        missing_label: String,
        default: InlistValue,
    },
    /// Set on one side only, to the default (verbose only)
    MatchesDefault {
        key: String,
        label: String,
        value: InlistValue,
        default: InlistValue,
    },
    /// Set on one side only and unknown to the defaults
    NotInDefaults { key: String, label: String },
}

impl Finding {
    pub fn key(&self) -> &str {
        match self {
            Finding::Mismatch { key, .. }
            | Finding::Match { key, .. }
            | Finding::DiffersFromDefault { key, .. }
            | Finding::MatchesDefault { key, .. }
            | Finding::NotInDefaults { key, .. } => key,
        }
    }

    /// Whether the finding is an actual difference between the two setups
    pub fn is_difference(&self) -> bool {
        matches!(
            self,
            Finding::Mismatch { .. } | Finding::DiffersFromDefault { .. }
        )
    }
}

/// Result of comparing one namelist of two setups
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamelistDiff {
    pub kind: NamelistKind,
    pub findings: Vec<Finding>,
}

impl NamelistDiff {
    pub fn differences(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.is_difference())
    }

    pub fn has_differences(&self) -> bool {
        self.differences().next().is_some()
    }
}

/// Compare two mappings of the same namelist.
///
/// Keys set on both sides are compared with each other. Keys set on one side
/// only are compared with the defaults, since that is what the other side
/// runs with. Matches are only reported when `verbose` is set.
pub fn diff_namelists(
    kind: NamelistKind,
    left: Labeled<'_>,
    right: Labeled<'_>,
    defaults: &OptionMap,
    verbose: bool,
) -> NamelistDiff {
    let mut findings = Vec::new();

    for (key, left_value) in left.options {
        let Some(right_value) = right.options.get(key) else {
            continue;
        };
        if left_value != right_value {
            findings.push(Finding::Mismatch {
                key: key.clone(),
                left_label: left.label.to_string(),
                left: left_value.clone(),
                right_label: right.label.to_string(),
                right: right_value.clone(),
            });
        } else if verbose {
            findings.push(Finding::Match {
                key: key.clone(),
                left_label: left.label.to_string(),
                left: left_value.clone(),
                right_label: right.label.to_string(),
                right: right_value.clone(),
            });
        }
    }

    compare_with_defaults(&mut findings, left, right, defaults, verbose);
    compare_with_defaults(&mut findings, right, left, defaults, verbose);

    NamelistDiff { kind, findings }
}

/// Report keys of `present` that `other` does not set.
fn compare_with_defaults(
    findings: &mut Vec<Finding>,
    present: Labeled<'_>,
    other: Labeled<'_>,
    defaults: &OptionMap,
    verbose: bool,
) {
    for (key, value) in present.options {
        if other.options.contains_key(key) {
            continue;
        }

        let Some(default) = defaults.get(key) else {
            warn!("{} not in defaults", key);
            findings.push(Finding::NotInDefaults {
                key: key.clone(),
                label: present.label.to_string(),
            });
            continue;
        };

        if value != default {
            findings.push(Finding::DiffersFromDefault {
                key: key.clone(),
                label: present.label.to_string(),
                value: value.clone(),
                missing_label: other.label.to_string(),
                default: default.clone(),
            });
        } else if verbose {
            findings.push(Finding::MatchesDefault {
                key: key.clone(),
                label: present.label.to_string(),
                value: value.clone(),
                default: default.clone(),
            });
        }
    }
}
