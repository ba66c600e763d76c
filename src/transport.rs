use std::path::PathBuf;

use crate::record::AliasRecord;

/// Operating system of an execution target, as hinted by the `os` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    Linux,
    Windows,
}

impl Os {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Linux" => Some(Os::Linux),
            "Windows" => Some(Os::Windows),
            _ => None,
        }
    }

    /// The platform this process runs on.
    pub fn local() -> Self {
        if cfg!(target_os = "windows") {
            Os::Windows
        } else {
            Os::Linux
        }
    }
}

impl std::fmt::Display for Os {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Os::Linux => f.write_str("Linux"),
            Os::Windows => f.write_str("Windows"),
        }
    }
}

/// Connection parameters handed to the external transport (ssh/rsync style).
/// Derived from a record at classification time, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSpec {
    pub host: String,
    /// Absent means the transport supplies its own default login.
    pub user: Option<String>,
    pub os: Os,
    /// Raw pass-through string for the ssh client.
    pub ssh_options: Option<String>,
}

/// Where a resolved alias executes.
///
/// `Local` with `root: None` is the `@none` case ("no target site"); callers
/// that need a bootstrapped site must check `root` themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Local {
        root: Option<PathBuf>,
        uri: Option<String>,
    },
    Remote(ConnectionSpec),
}

impl Target {
    pub fn is_remote(&self) -> bool {
        matches!(self, Target::Remote(_))
    }
}

/// A record is remote iff it carries a non-empty `host`.
pub fn classify(record: &AliasRecord) -> Target {
    match record.host() {
        Some(host) => Target::Remote(ConnectionSpec {
            host: host.to_string(),
            user: record.user().map(str::to_string),
            os: record.os(),
            ssh_options: record.ssh_options().map(str::to_string),
        }),
        None => Target::Local {
            root: record.root(),
            uri: record.uri().map(str::to_string),
        },
    }
}
