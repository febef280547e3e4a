// inlistdiff/src/defaults.rs

use crate::config::MesaDir;
use crate::error::CompareError;
use inlistrs::{read_defaults, NamelistKind, OptionMap};
use log::debug;
use std::collections::HashMap;

/// Default values of every namelist, loaded from the MESA installation on
/// first use and kept for the rest of the run.
#[derive(Debug)]
pub struct DefaultsTable {
    mesa_dir: MesaDir,
    loaded: HashMap<NamelistKind, OptionMap>,
}

impl DefaultsTable {
    pub fn new(mesa_dir: MesaDir) -> Self {
        Self {
            mesa_dir,
            loaded: HashMap::new(),
        }
    }

    /// Defaults of one namelist, reading its file if not done yet
    pub fn get(&mut self, kind: NamelistKind) -> Result<&OptionMap, CompareError> {
        if !self.loaded.contains_key(&kind) {
            let defaults = load_defaults(kind, &self.mesa_dir)?;
            self.loaded.insert(kind, defaults);
        }
        Ok(&self.loaded[&kind])
    }
}

/// Read the defaults file of one namelist.
pub fn load_defaults(kind: NamelistKind, mesa_dir: &MesaDir) -> Result<OptionMap, CompareError> {
    let path = mesa_dir.defaults_file(kind);

    if !path.is_file() {
        return Err(if kind.is_optional() {
            CompareError::MissingOptionalDefaults {
                kind,
                mesa_dir: mesa_dir.root().to_path_buf(),
            }
        } else {
            CompareError::MissingDefaults { kind, path }
        });
    }

    debug!("loading {} defaults from {}", kind, path.display());
    Ok(read_defaults(&path)?)
}
