use std::path::{Path, PathBuf};

use crate::record::AliasRecord;

/// The live local application context, if any.
///
/// `@self` synthesizes its record from this; the derived search-path
/// conventions hang off `root`. Discovery walks upward from the working
/// directory looking for the site marker (`sites/default`), so running
/// anywhere inside an application tree bootstraps it.
#[derive(Debug, Clone, Default)]
pub struct BootContext {
    pub root: Option<PathBuf>,
    pub uri: Option<String>,
}

impl BootContext {
    /// Discover a context starting at `cwd`. Returns an empty context when no
    /// application root is found; that is not an error.
    pub fn discover(cwd: &Path) -> Self {
        Self {
            root: find_app_root(cwd),
            uri: None,
        }
    }

    /// Apply explicit overrides (CLI `--root` / `--uri`). An explicit root
    /// replaces the discovered one even if it does not look like a site.
    pub fn with_overrides(mut self, root: Option<PathBuf>, uri: Option<String>) -> Self {
        if root.is_some() {
            self.root = root;
        }
        if uri.is_some() {
            self.uri = uri;
        }
        self
    }

    pub fn is_bootstrapped(&self) -> bool {
        self.root.is_some()
    }

    /// The `@self` record, if a site is bootstrapped.
    pub fn self_record(&self) -> Option<AliasRecord> {
        self.root
            .as_ref()
            .map(|root| AliasRecord::self_record(root.clone(), self.uri.clone()))
    }
}

fn find_app_root(start: &Path) -> Option<PathBuf> {
    let mut dir = Some(start);
    while let Some(d) = dir {
        if looks_like_app_root(d) {
            return Some(d.to_path_buf());
        }
        dir = d.parent();
    }
    None
}

fn looks_like_app_root(dir: &Path) -> bool {
    dir.join("sites").join("default").is_dir()
}
