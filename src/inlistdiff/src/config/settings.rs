// inlistdiff/src/config/settings.rs

use crate::constants::DEFAULT_CONFIG_NAME;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How the report is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored, human readable diff
    #[default]
    Text,
    /// Machine readable JSON
    Json,
}

/// Persistent defaults for the command line flags, read from a YAML file.
///
/// ```yaml
/// mesa_dir: /opt/mesa-r15140
/// pgstar: true
/// verbose: false
/// format: text
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub mesa_dir: Option<PathBuf>,
    #[serde(default)]
    pub pgstar: Option<bool>,
    #[serde(default)]
    pub verbose: Option<bool>,
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

impl Settings {
    /// Load the settings file given on the command line, or the default one
    /// in `cwd` if present, or empty settings.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Self::try_from(path),
            None => {
                let default_path = cwd.join(DEFAULT_CONFIG_NAME);
                if default_path.is_file() {
                    log::debug!("using settings from {}", default_path.display());
                    Self::try_from(default_path.as_path())
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

impl TryFrom<&Path> for Settings {
    type Error = anyhow::Error;

    fn try_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs_err::read_to_string(path)
            .context(format!("Error reading {} to string.", path.display()))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_saphyr::from_str::<Settings>(&content)
            .context(format!("Error parsing YAML file: {}", path.display()))
    }
}

impl TryFrom<&PathBuf> for Settings {
    type Error = anyhow::Error;

    fn try_from(path: &PathBuf) -> anyhow::Result<Self> {
        Self::try_from(path.as_path())
    }
}
