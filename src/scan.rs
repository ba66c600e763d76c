use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Reserved subdirectory scanned inside every search-path entry. This is the
/// only place scanning descends; everything else is non-recursive.
pub const SITE_ALIAS_SUBDIR: &str = "site-aliases";

/// Directory name of the per-site alias convention under an application root.
pub const ALIAS_DIR: &str = "waypoint";

/// Build the priority-ordered, deduplicated search path.
///
/// Priority: CLI paths, then configured paths, then the conventions derived
/// from the application root R (`R/waypoint`, `R/sites/all/waypoint`,
/// `R/../waypoint`). Each entry is followed by its `site-aliases` subdirectory
/// when that exists. Entries that do not exist on disk are kept; scanning
/// them later simply contributes nothing.
pub fn search_path(
    cli_paths: &[PathBuf],
    config_paths: &[PathBuf],
    app_root: Option<&Path>,
) -> Vec<PathBuf> {
    fn push(dir: PathBuf, ordered: &mut Vec<PathBuf>, seen: &mut BTreeSet<PathBuf>) {
        let sub = dir.join(SITE_ALIAS_SUBDIR);
        if seen.insert(dir.clone()) {
            ordered.push(dir);
        }
        if sub.is_dir() && seen.insert(sub.clone()) {
            ordered.push(sub);
        }
    }

    let mut ordered: Vec<PathBuf> = Vec::new();
    let mut seen: BTreeSet<PathBuf> = BTreeSet::new();

    for p in cli_paths.iter().chain(config_paths) {
        push(p.clone(), &mut ordered, &mut seen);
    }

    if let Some(root) = app_root {
        push(root.join(ALIAS_DIR), &mut ordered, &mut seen);
        push(root.join("sites").join("all").join(ALIAS_DIR), &mut ordered, &mut seen);
        if let Some(parent) = root.parent() {
            push(parent.join(ALIAS_DIR), &mut ordered, &mut seen);
        }
    }

    debug!(entries = ordered.len(), "alias search path assembled");
    ordered
}

/// Candidate alias-definition files in one directory, in stable name order.
/// A missing or unreadable directory contributes nothing.
pub fn candidate_files(dir: &Path) -> Vec<PathBuf> {
    let pattern = dir.join("*.yml");
    let Some(pattern) = pattern.to_str().map(str::to_string) else {
        return Vec::new();
    };

    let mut files: Vec<PathBuf> = match glob::glob(&pattern) {
        Ok(paths) => paths
            .filter_map(Result::ok)
            .filter(|p| p.is_file() && is_alias_file_name(p))
            .collect(),
        Err(_) => Vec::new(),
    };
    files.sort();
    files
}

fn is_alias_file_name(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name == "aliases.yml"
        || name.strip_suffix(".alias.yml").is_some_and(|s| !s.is_empty())
        || name.strip_suffix(".aliases.yml").is_some_and(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_directory_contributes_no_candidates() {
        let tmp = tempfile::tempdir().unwrap();
        let files = candidate_files(&tmp.path().join("does-not-exist"));
        assert!(files.is_empty());
    }

    #[test]
    fn candidates_match_naming_conventions_only() {
        let tmp = tempfile::tempdir().unwrap();
        for name in [
            "earth.alias.yml",
            "elements.aliases.yml",
            "aliases.yml",
            "notes.yml",
            "readme.txt",
            ".alias.yml",
        ] {
            fs::write(tmp.path().join(name), "").unwrap();
        }

        let names: Vec<String> = candidate_files(tmp.path())
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, ["aliases.yml", "earth.alias.yml", "elements.aliases.yml"]);
    }

    #[test]
    fn scanning_does_not_recurse_past_site_aliases() {
        let tmp = tempfile::tempdir().unwrap();
        let sub = tmp.path().join(SITE_ALIAS_SUBDIR);
        fs::create_dir_all(sub.join("deeper")).unwrap();
        fs::write(sub.join("earth.alias.yml"), "").unwrap();
        fs::write(sub.join("deeper").join("wind.alias.yml"), "").unwrap();

        let path = search_path(&[tmp.path().to_path_buf()], &[], None);
        assert_eq!(path, vec![tmp.path().to_path_buf(), sub.clone()]);

        let files = candidate_files(&sub);
        assert_eq!(files, vec![sub.join("earth.alias.yml")]);
    }

    #[test]
    fn derived_conventions_follow_the_app_root() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("app");
        fs::create_dir_all(root.join(ALIAS_DIR)).unwrap();

        let path = search_path(&[], &[], Some(&root));
        assert_eq!(
            path,
            vec![
                root.join(ALIAS_DIR),
                root.join("sites").join("all").join(ALIAS_DIR),
                tmp.path().join(ALIAS_DIR),
            ]
        );
    }

    #[test]
    fn duplicates_keep_their_first_position() {
        let dir = PathBuf::from("/etc/waypoint/aliases");
        let path = search_path(&[dir.clone()], &[dir.clone()], None);
        assert_eq!(path, vec![dir]);
    }
}
