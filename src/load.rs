use std::path::Path;

use serde_yaml::Value;
use tracing::{debug, warn};

use crate::record::{AliasId, AliasRecord, OptionMap};
use crate::scan;

/// Shape of an alias-definition file, discriminated by filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileShape {
    /// `NAME.alias.yml`: one site, top-level keys are environments.
    Single { site: String },
    /// `NAME.aliases.yml`: a group; content must carry a top-level `sites` key.
    Group { group: String },
    /// `aliases.yml`: multiple ungrouped sites.
    Ungrouped,
}

/// Classify a path by its filename convention. `None` means the file is not
/// an alias file at all and was never a candidate.
pub fn classify(path: &Path) -> Option<FileShape> {
    let name = path.file_name()?.to_str()?;
    if name == "aliases.yml" {
        return Some(FileShape::Ungrouped);
    }
    if let Some(site) = name.strip_suffix(".alias.yml") {
        if !site.is_empty() {
            return Some(FileShape::Single { site: site.to_string() });
        }
    }
    if let Some(group) = name.strip_suffix(".aliases.yml") {
        if !group.is_empty() {
            return Some(FileShape::Group { group: group.to_string() });
        }
    }
    None
}

/// Load every record a single file contributes. Malformed or unrecognizable
/// files are warned about and contribute nothing; this is never fatal.
pub fn load_file(path: &Path) -> Vec<AliasRecord> {
    let Some(shape) = classify(path) else {
        return Vec::new();
    };

    let text = match std::fs::read_to_string(path) {
        Ok(t) => t,
        Err(err) => {
            warn!(path = %path.display(), %err, "skipping unreadable alias file");
            return Vec::new();
        }
    };

    let doc: Value = match serde_yaml::from_str(&text) {
        Ok(v) => v,
        Err(err) => {
            warn!(path = %path.display(), %err, "skipping malformed alias file");
            return Vec::new();
        }
    };

    let records = match &shape {
        FileShape::Single { site } => environment_records(None, site, &doc, path),
        FileShape::Group { group } => match doc.get("sites") {
            Some(sites) => site_records(Some(group.as_str()), sites, path),
            None => {
                warn!(
                    path = %path.display(),
                    "skipping group file without a top-level `sites` key"
                );
                Vec::new()
            }
        },
        FileShape::Ungrouped => site_records(None, &doc, path),
    };

    debug!(path = %path.display(), count = records.len(), "loaded alias file");
    records
}

/// Load all records from one search-path directory, in candidate-file order.
pub fn load_dir(dir: &Path) -> Vec<AliasRecord> {
    scan::candidate_files(dir)
        .iter()
        .flat_map(|f| load_file(f))
        .collect()
}

/// Walk a `site -> environment -> options` tree.
fn site_records(group: Option<&str>, sites: &Value, path: &Path) -> Vec<AliasRecord> {
    let Some(map) = sites.as_mapping() else {
        warn!(path = %path.display(), "expected a mapping of sites, skipping file");
        return Vec::new();
    };

    let mut out = Vec::new();
    for (site, envs) in map {
        match site.as_str().map(str::trim).filter(|s| !s.is_empty()) {
            Some(site) => out.extend(environment_records(group, site, envs, path)),
            None => warn!(path = %path.display(), "skipping site with a non-string or empty name"),
        }
    }
    out
}

/// Walk an `environment -> options` tree for one site.
fn environment_records(
    group: Option<&str>,
    site: &str,
    envs: &Value,
    path: &Path,
) -> Vec<AliasRecord> {
    let Some(map) = envs.as_mapping() else {
        warn!(
            path = %path.display(),
            site,
            "expected a mapping of environments, skipping site"
        );
        return Vec::new();
    };

    let mut out = Vec::new();
    for (env, options) in map {
        let Some(env) = env.as_str().map(str::trim).filter(|s| !s.is_empty()) else {
            warn!(path = %path.display(), site, "skipping environment with a non-string or empty name");
            continue;
        };
        let Some(options) = option_map(options) else {
            warn!(path = %path.display(), site, env, "environment is not an option map, skipping");
            continue;
        };
        out.push(AliasRecord::new(AliasId::new(group, site, env), options));
    }
    out
}

fn option_map(value: &Value) -> Option<OptionMap> {
    let map = value.as_mapping()?;
    let mut out = OptionMap::new();
    for (k, v) in map {
        if let Some(k) = k.as_str() {
            out.insert(k.to_string(), v.clone());
        }
    }
    Some(out)
}
