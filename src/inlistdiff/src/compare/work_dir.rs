// inlistdiff/src/compare/work_dir.rs

use crate::constants::FIRST_INLIST_NAME;
use crate::error::CompareError;
use inlistrs::{read_section, Section};
use std::path::{Path, PathBuf};

/// A MESA run directory and the inlist it starts from
#[derive(Debug, Clone)]
pub struct WorkDir {
    pub root: PathBuf,
    pub first_inlist: PathBuf,
    pub label: String,
}

impl WorkDir {
    /// Open the `index`-th run directory of a comparison.
    pub fn open(root: &Path, index: usize) -> Result<Self, CompareError> {
        Ok(Self {
            root: root.to_path_buf(),
            first_inlist: first_inlist(root)?,
            label: report_label(index, root),
        })
    }

    /// Whether the starting inlist configures a binary run
    pub fn is_binary(&self) -> Result<bool, CompareError> {
        is_binary_inlist(&self.first_inlist)
    }
}

/// The inlist MESA reads first in a work directory
pub fn first_inlist(work_dir: &Path) -> Result<PathBuf, CompareError> {
    let inlist = work_dir.join(FIRST_INLIST_NAME);
    if inlist.is_file() {
        Ok(inlist)
    } else {
        Err(CompareError::MissingFirstInlist {
            work_dir: work_dir.to_path_buf(),
        })
    }
}

pub fn is_binary_work_dir(work_dir: &Path) -> Result<bool, CompareError> {
    is_binary_inlist(&first_inlist(work_dir)?)
}

fn is_binary_inlist(inlist: &Path) -> Result<bool, CompareError> {
    Ok(read_section(inlist, Section::Job)?.is_binary())
}

/// `"<index>: <last path component>"`, as shown in front of every value.
///
/// Paths without a last component (`.`, `..`) are named after the directory
/// they point to.
pub fn report_label(index: usize, path: &Path) -> String {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .or_else(|| {
            fs_err::canonicalize(path)
                .ok()
                .and_then(|p| p.file_name().map(|name| name.to_string_lossy().into_owned()))
        })
        .unwrap_or_else(|| path.display().to_string());
    format!("{}: {}", index, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_report_label() {
        assert_eq!(report_label(1, Path::new("/runs/inlist_a")), "1: inlist_a");
        assert_eq!(report_label(2, Path::new("runs/work_b/")), "2: work_b");
    }

    #[test]
    fn test_missing_first_inlist() {
        let temp_dir = TempDir::new().unwrap();

        let result = WorkDir::open(temp_dir.path(), 1);
        assert!(matches!(
            result,
            Err(CompareError::MissingFirstInlist { .. })
        ));
    }

    #[test]
    fn test_binary_work_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs_err::write(
            temp_dir.path().join("inlist"),
            "&binary_job\n  inlist_names(1) = 'inlist1'\n/\n",
        )
        .unwrap();

        assert!(is_binary_work_dir(temp_dir.path()).unwrap());
        assert!(WorkDir::open(temp_dir.path(), 1).unwrap().is_binary().unwrap());
    }

    #[test]
    fn test_single_star_work_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs_err::write(
            temp_dir.path().join("inlist"),
            "&star_job\n  pgstar_flag = .true.\n/\n",
        )
        .unwrap();

        assert!(!is_binary_work_dir(temp_dir.path()).unwrap());
    }
}
