use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::record::AliasRecord;

/// Reference names served by the resolver itself; file-defined aliases can
/// never claim them.
pub const BUILTIN_NAMES: [&str; 2] = ["self", "none"];

pub fn is_builtin(name: &str) -> bool {
    BUILTIN_NAMES.contains(&name)
}

/// Flat namespace of fully-qualified alias names, immutable once built.
///
/// Search-path priority is encoded at build time: the first directory batch
/// to define a name keeps it. Within one directory batch the last record
/// wins, so an `.aliases.yml` entry can shadow an earlier `.alias.yml` entry
/// from the same directory.
#[derive(Debug, Default)]
pub struct AliasRegistry {
    records: BTreeMap<String, AliasRecord>,
}

impl AliasRegistry {
    /// Build from per-directory record batches in search-path priority order.
    pub fn build<I>(batches: I) -> Self
    where
        I: IntoIterator<Item = Vec<AliasRecord>>,
    {
        let mut records: BTreeMap<String, AliasRecord> = BTreeMap::new();

        for batch in batches {
            let mut pass: BTreeMap<String, AliasRecord> = BTreeMap::new();
            for rec in batch {
                if rec.id.group.is_none() && is_builtin(&rec.id.site) {
                    warn!(name = %rec.id, "ignoring alias shadowing a built-in name");
                    continue;
                }
                // last-in wins within a single directory pass
                pass.insert(rec.id.fq_name(), rec);
            }
            for (name, rec) in pass {
                // first directory to define a name keeps it
                records.entry(name).or_insert(rec);
            }
        }

        debug!(count = records.len(), "alias registry built");
        Self { records }
    }

    pub fn lookup(&self, fq_name: &str) -> Option<&AliasRecord> {
        self.records.get(fq_name)
    }

    /// Sorted fully-qualified names of every registered alias.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{AliasId, OptionMap};
    use serde_yaml::Value;

    fn record(site: &str, env: &str, root: &str) -> AliasRecord {
        let mut options = OptionMap::new();
        options.insert("root".to_string(), Value::String(root.to_string()));
        AliasRecord::new(AliasId::new(None, site, env), options)
    }

    #[test]
    fn earlier_search_path_entries_win() {
        let reg = AliasRegistry::build(vec![
            vec![record("earth", "dev", "/from-a")],
            vec![record("earth", "dev", "/from-b")],
        ]);
        let rec = reg.lookup("earth.dev").unwrap();
        assert_eq!(rec.root().unwrap().to_string_lossy(), "/from-a");
    }

    #[test]
    fn last_record_wins_within_one_directory_pass() {
        let reg = AliasRegistry::build(vec![vec![
            record("earth", "dev", "/first"),
            record("earth", "dev", "/second"),
        ]]);
        let rec = reg.lookup("earth.dev").unwrap();
        assert_eq!(rec.root().unwrap().to_string_lossy(), "/second");
    }

    #[test]
    fn builtin_names_cannot_be_claimed() {
        let reg = AliasRegistry::build(vec![vec![
            record("self", "dev", "/evil"),
            record("none", "dev", "/evil"),
            record("earth", "dev", "/ok"),
        ]]);
        assert!(reg.lookup("self.dev").is_none());
        assert!(reg.lookup("none.dev").is_none());
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn grouped_sites_may_reuse_builtin_words() {
        let rec = AliasRecord::new(AliasId::new(Some("g"), "self", "dev"), OptionMap::new());
        let reg = AliasRegistry::build(vec![vec![rec]]);
        assert!(reg.lookup("g.self.dev").is_some());
    }

    #[test]
    fn names_are_sorted() {
        let reg = AliasRegistry::build(vec![vec![
            record("wind", "dev", "/w"),
            record("earth", "dev", "/e"),
        ]]);
        let names: Vec<&str> = reg.names().collect();
        assert_eq!(names, ["earth.dev", "wind.dev"]);
    }
}
