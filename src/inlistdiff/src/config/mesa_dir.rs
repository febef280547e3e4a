// inlistdiff/src/config/mesa_dir.rs

use crate::error::CompareError;
use inlistrs::NamelistKind;
use std::path::{Path, PathBuf};

/// Root of a MESA installation, where the `.defaults` files live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MesaDir(PathBuf);

impl MesaDir {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self(root.into())
    }

    /// Pick the first non-empty candidate, in order of precedence.
    ///
    /// The command line value already carries the `MESA_DIR` environment
    /// fallback, the settings file comes after it.
    pub fn resolve<I>(candidates: I) -> Result<Self, CompareError>
    where
        I: IntoIterator<Item = Option<PathBuf>>,
    {
        candidates
            .into_iter()
            .flatten()
            .find(|path| !path.as_os_str().is_empty())
            .map(Self)
            .ok_or(CompareError::MesaDirUnset)
    }

    pub fn root(&self) -> &Path {
        &self.0
    }

    /// Location of the defaults file of a namelist
    pub fn defaults_file(&self, kind: NamelistKind) -> PathBuf {
        self.0.join(kind.defaults_path())
    }
}
