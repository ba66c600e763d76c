use std::collections::BTreeMap;
use std::path::PathBuf;

use serde_yaml::Value;

use crate::transport::Os;

/// Environment assumed when a reference omits one (`@site` == `@site.dev`).
pub const DEFAULT_ENVIRONMENT: &str = "dev";

/// Option map attached to every alias: string keys, arbitrary YAML values
/// (nested maps for `paths` and `command`).
pub type OptionMap = BTreeMap<String, Value>;

/// Fully-qualified alias identity: optional group, site, environment.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct AliasId {
    pub group: Option<String>,
    pub site: String,
    pub environment: String,
}

impl AliasId {
    pub fn new(group: Option<&str>, site: &str, environment: &str) -> Self {
        Self {
            group: group.map(str::to_string),
            site: site.to_string(),
            environment: environment.to_string(),
        }
    }

    /// `group.site.environment`, or `site.environment` for ungrouped aliases.
    pub fn fq_name(&self) -> String {
        match &self.group {
            Some(g) => format!("{}.{}.{}", g, self.site, self.environment),
            None => format!("{}.{}", self.site, self.environment),
        }
    }
}

impl std::fmt::Display for AliasId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}", self.fq_name())
    }
}

/// One resolved alias: identity plus its raw option map.
///
/// Records are built once during the load phase and never mutated afterwards;
/// command-scoped overrides are applied by [`crate::merge::merge`] into a
/// fresh map, not back into the record.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasRecord {
    pub id: AliasId,
    pub options: OptionMap,
}

impl AliasRecord {
    pub fn new(id: AliasId, options: OptionMap) -> Self {
        Self { id, options }
    }

    /// The `@none` pseudo-record: no site context, no options.
    pub fn none() -> Self {
        Self::new(AliasId::new(None, "none", DEFAULT_ENVIRONMENT), OptionMap::new())
    }

    /// The `@self` pseudo-record, synthesized from the live local context.
    pub fn self_record(root: PathBuf, uri: Option<String>) -> Self {
        let mut options = OptionMap::new();
        options.insert(
            "root".to_string(),
            Value::String(root.to_string_lossy().to_string()),
        );
        if let Some(uri) = uri {
            options.insert("uri".to_string(), Value::String(uri));
        }
        Self::new(AliasId::new(None, "self", DEFAULT_ENVIRONMENT), options)
    }

    // ---------- typed accessors for the recognized attributes ----------

    fn str_option(&self, key: &str) -> Option<&str> {
        self.options
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn root(&self) -> Option<PathBuf> {
        self.str_option("root").map(PathBuf::from)
    }

    pub fn uri(&self) -> Option<&str> {
        self.str_option("uri")
    }

    pub fn host(&self) -> Option<&str> {
        self.str_option("host")
    }

    pub fn user(&self) -> Option<&str> {
        self.str_option("user")
    }

    pub fn ssh_options(&self) -> Option<&str> {
        self.str_option("ssh-options")
    }

    /// Operating system of the target. Explicit `os` wins; a remote record
    /// without one is assumed Linux; a local record follows the platform the
    /// process runs on.
    pub fn os(&self) -> Os {
        if let Some(os) = self.str_option("os").and_then(Os::parse) {
            return os;
        }
        if self.host().is_some() {
            Os::Linux
        } else {
            Os::local()
        }
    }

    /// The `paths` map (symbolic name -> path), string entries only.
    pub fn paths(&self) -> BTreeMap<String, String> {
        let mut out = BTreeMap::new();
        if let Some(map) = self.options.get("paths").and_then(Value::as_mapping) {
            for (k, v) in map {
                if let (Some(k), Some(v)) = (k.as_str(), v.as_str()) {
                    out.insert(k.to_string(), v.to_string());
                }
            }
        }
        out
    }
}
