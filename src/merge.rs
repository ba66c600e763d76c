use serde_yaml::Value;

use crate::record::{AliasRecord, OptionMap};

/// Key holding the per-command override tree inside an option map.
pub const COMMAND_KEY: &str = "command";

/// Compute the effective options for running `command_path` against a record.
///
/// Starts from the record's base options minus the `command` tree, then walks
/// `command` through each token of the path in order, overlaying every nested
/// `options` map it finds. Deeper overlays win over shallower ones and over
/// the base. Tokens with no matching subtree contribute nothing.
pub fn merge<S: AsRef<str>>(record: &AliasRecord, command_path: &[S]) -> OptionMap {
    let mut out: OptionMap = record
        .options
        .iter()
        .filter(|(k, _)| k.as_str() != COMMAND_KEY)
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    let mut node = record.options.get(COMMAND_KEY);
    for token in command_path {
        node = node.and_then(|v| v.get(token.as_ref()));
        let Some(overlay) = node.and_then(|v| v.get("options")).and_then(Value::as_mapping) else {
            continue;
        };
        for (k, v) in overlay {
            if let Some(k) = k.as_str() {
                out.insert(k.to_string(), v.clone());
            }
        }
    }

    out
}
