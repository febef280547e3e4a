// inlistdiff/src/include/resolver.rs

use crate::constants::MAX_EXTRA_INLISTS;
use crate::error::CompareError;
use inlistrs::{read_section, NamelistKind, OptionMap};
use log::info;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// An inlist waiting to be read, with the files that led to it
struct Pending {
    path: PathBuf,
    ancestry: Vec<PathBuf>,
}

/// Build a namelist the way MESA sees it: read it from `first_inlist`, then
/// follow its `read_extra_<kind>_inlist` flags, merging every extra inlist
/// over what has been read so far.
///
/// Extra inlists are read in the order they are discovered. Each file's own
/// flags decide which files it pulls in; in the merged result only the last
/// file setting a given flag is visible, as in MESA.
///
/// Relative include paths are taken relative to `work_dir`, the directory
/// MESA runs from.
pub fn resolve_namelist(
    kind: NamelistKind,
    first_inlist: &Path,
    work_dir: &Path,
) -> Result<OptionMap, CompareError> {
    let mut merged = read_section(first_inlist, kind.section())?.options;

    let root = vec![canonical(first_inlist)];
    let mut pending: VecDeque<Pending> = extra_inlists(&merged, kind, work_dir, first_inlist)?
        .into_iter()
        .map(|path| Pending {
            path,
            ancestry: root.clone(),
        })
        .collect();

    while let Some(Pending { path, mut ancestry }) = pending.pop_front() {
        let key = canonical(&path);
        if ancestry.contains(&key) {
            ancestry.push(key);
            return Err(CompareError::IncludeCycle {
                kind,
                chain: ancestry,
            });
        }

        info!("...reading {} {} namelist", path.display(), kind);
        let options = read_section(&path, kind.section())?.options;
        let includes = extra_inlists(&options, kind, work_dir, &path)?;
        merged.merge(options);

        ancestry.push(key);
        pending.extend(includes.into_iter().map(|include| Pending {
            path: include,
            ancestry: ancestry.clone(),
        }));
    }

    Ok(merged)
}

/// Paths of the extra inlists a mapping asks to read, in flag order.
pub fn extra_inlists(
    options: &OptionMap,
    kind: NamelistKind,
    work_dir: &Path,
    source_file: &Path,
) -> Result<Vec<PathBuf>, CompareError> {
    let mut paths = Vec::new();

    for index in 1..=MAX_EXTRA_INLISTS {
        let Some(flag) = kind
            .read_extra_keys(index)
            .into_iter()
            .find(|key| options.get(key).is_some_and(|v| v.is_true()))
        else {
            continue;
        };

        let name = kind
            .extra_name_keys(index)
            .iter()
            .find_map(|key| options.get_unquoted(key))
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| CompareError::MissingIncludeName {
                flag,
                source_file: source_file.to_path_buf(),
            })?;

        paths.push(resolve_inlist_path(work_dir, name.trim()));
    }

    Ok(paths)
}

/// Absolute names are kept, relative ones are taken from the work directory.
pub fn resolve_inlist_path(work_dir: &Path, name: &str) -> PathBuf {
    let path = Path::new(name);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        work_dir.join(path)
    }
}

fn canonical(path: &Path) -> PathBuf {
    fs_err::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use inlistrs::InlistValue;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs_err::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_no_includes_returns_first_inlist() {
        let temp_dir = TempDir::new().unwrap();
        let first = write(
            temp_dir.path(),
            "inlist",
            "&controls\n  initial_mass = 2\n  read_extra_controls_inlist1 = .false.\n/\n",
        );

        let merged = resolve_namelist(NamelistKind::Controls, &first, temp_dir.path()).unwrap();
        let direct = read_section(&first, NamelistKind::Controls.section())
            .unwrap()
            .options;

        assert_eq!(merged, direct);
    }

    #[test]
    fn test_later_inlist_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let first = write(
            temp_dir.path(),
            "inlist",
            "&controls\n  read_extra_controls_inlist1 = .true.\n  extra_controls_inlist1_name = 'inlist_project'\n  initial_mass = 2\n  initial_z = 0.02\n/\n",
        );
        write(
            temp_dir.path(),
            "inlist_project",
            "&controls\n  initial_mass = 15\n/\n",
        );

        let merged = resolve_namelist(NamelistKind::Controls, &first, temp_dir.path()).unwrap();

        assert_eq!(merged.get("initial_mass"), Some(&InlistValue::Real(15.0)));
        assert_eq!(merged.get("initial_z"), Some(&InlistValue::Real(0.02)));
    }

    #[test]
    fn test_nested_includes_and_array_spelling() {
        let temp_dir = TempDir::new().unwrap();
        let first = write(
            temp_dir.path(),
            "inlist",
            "&star_job\n  read_extra_star_job_inlist(1) = .true.\n  extra_star_job_inlist_name(1) = 'inlist_a'\n/\n",
        );
        write(
            temp_dir.path(),
            "inlist_a",
            "&star_job\n  read_extra_star_job_inlist2 = .true.\n  extra_star_job_inlist2_name = \"inlist_b\"\n  pgstar_flag = .true.\n/\n",
        );
        write(
            temp_dir.path(),
            "inlist_b",
            "&star_job\n  pgstar_flag = .false.\n  new_z = 0.014\n/\n",
        );

        let merged = resolve_namelist(NamelistKind::StarJob, &first, temp_dir.path()).unwrap();

        assert_eq!(merged.get("pgstar_flag"), Some(&InlistValue::Logical(false)));
        assert_eq!(merged.get("new_z"), Some(&InlistValue::Real(0.014)));
    }

    #[test]
    fn test_repeated_flag_index_last_file_wins_in_merge() {
        let temp_dir = TempDir::new().unwrap();
        let first = write(
            temp_dir.path(),
            "inlist",
            "&controls\n  read_extra_controls_inlist1 = .true.\n  extra_controls_inlist1_name = 'inlist_a'\n/\n",
        );
        write(
            temp_dir.path(),
            "inlist_a",
            "&controls\n  read_extra_controls_inlist1 = .true.\n  extra_controls_inlist1_name = 'inlist_b'\n  from_a = 1\n/\n",
        );
        write(temp_dir.path(), "inlist_b", "&controls\n  from_b = 2\n/\n");

        let merged = resolve_namelist(NamelistKind::Controls, &first, temp_dir.path()).unwrap();

        // Both files were read, the merged name points at the last one
        assert!(merged.contains_key("from_a"));
        assert!(merged.contains_key("from_b"));
        assert_eq!(
            merged.get_unquoted("extra_controls_inlist1_name").as_deref(),
            Some("inlist_b")
        );
    }

    #[test]
    fn test_include_cycle_detected() {
        let temp_dir = TempDir::new().unwrap();
        let first = write(
            temp_dir.path(),
            "inlist",
            "&controls\n  read_extra_controls_inlist1 = .true.\n  extra_controls_inlist1_name = 'inlist_a'\n/\n",
        );
        write(
            temp_dir.path(),
            "inlist_a",
            "&controls\n  read_extra_controls_inlist1 = .true.\n  extra_controls_inlist1_name = 'inlist'\n/\n",
        );

        let result = resolve_namelist(NamelistKind::Controls, &first, temp_dir.path());

        match result {
            Err(CompareError::IncludeCycle { kind, chain }) => {
                assert_eq!(kind, NamelistKind::Controls);
                assert_eq!(chain.len(), 3);
                assert_eq!(chain.first(), chain.last());
            }
            other => panic!("expected an include cycle, got {:?}", other),
        }
    }

    #[test]
    fn test_self_include_is_a_cycle() {
        let temp_dir = TempDir::new().unwrap();
        let first = write(
            temp_dir.path(),
            "inlist",
            "&kap\n  read_extra_kap_inlist3 = .true.\n  extra_kap_inlist3_name = 'inlist'\n/\n",
        );

        let result = resolve_namelist(NamelistKind::Kap, &first, temp_dir.path());
        assert!(matches!(result, Err(CompareError::IncludeCycle { .. })));
    }

    #[test]
    fn test_diamond_is_not_a_cycle() {
        let temp_dir = TempDir::new().unwrap();
        let first = write(
            temp_dir.path(),
            "inlist",
            "&eos\n  read_extra_eos_inlist1 = .true.\n  extra_eos_inlist1_name = 'inlist_a'\n  read_extra_eos_inlist2 = .true.\n  extra_eos_inlist2_name = 'inlist_b'\n/\n",
        );
        let shared = "&eos\n  read_extra_eos_inlist1 = .true.\n  extra_eos_inlist1_name = 'inlist_common'\n/\n";
        write(temp_dir.path(), "inlist_a", shared);
        write(temp_dir.path(), "inlist_b", shared);
        write(temp_dir.path(), "inlist_common", "&eos\n  use_fancy = .true.\n/\n");

        let merged = resolve_namelist(NamelistKind::Eos, &first, temp_dir.path()).unwrap();
        assert_eq!(merged.get("use_fancy"), Some(&InlistValue::Logical(true)));
    }

    #[test]
    fn test_flag_without_name() {
        let mut options = OptionMap::new();
        options.insert("read_extra_pgstar_inlist2", true);

        let result = extra_inlists(
            &options,
            NamelistKind::Pgstar,
            Path::new("/run"),
            Path::new("/run/inlist"),
        );
        match result {
            Err(CompareError::MissingIncludeName { flag, .. }) => {
                assert_eq!(flag, "read_extra_pgstar_inlist2")
            }
            other => panic!("expected a missing name, got {:?}", other),
        }
    }

    #[test]
    fn test_extra_inlists_paths() {
        let mut options = OptionMap::new();
        options.insert("read_extra_binary_job_inlist1", true);
        options.insert("extra_binary_job_inlist1_name", "'inlist_extra'");
        options.insert("read_extra_binary_job_inlist2", false);
        options.insert("extra_binary_job_inlist2_name", "'ignored'");
        options.insert("read_extra_binary_job_inlist5", true);
        options.insert("extra_binary_job_inlist5_name", "'/abs/inlist_five'");

        let paths = extra_inlists(
            &options,
            NamelistKind::BinaryJob,
            Path::new("/run"),
            Path::new("/run/inlist"),
        )
        .unwrap();

        assert_eq!(
            paths,
            vec![
                PathBuf::from("/run/inlist_extra"),
                PathBuf::from("/abs/inlist_five")
            ]
        );
    }
}
