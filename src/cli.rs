use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "waypoint", version, about)]
pub struct Args {
    /// Alias reference to resolve, e.g. @elements.earth.live
    /// (lists known aliases when omitted)
    pub reference: Option<String>,

    /// Additional alias search directory, highest priority (repeatable)
    #[arg(long = "alias-path", value_name = "DIR")]
    pub alias_paths: Vec<std::path::PathBuf>,

    /// Path to config.toml (overrides the XDG default)
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,

    /// Command token for per-command option overrides, in order
    /// (e.g. --command sql --command sync)
    #[arg(long = "command", value_name = "TOKEN")]
    pub command: Vec<String>,

    /// Application root for @self, skipping upward discovery
    #[arg(long)]
    pub root: Option<std::path::PathBuf>,

    /// Site URI for @self
    #[arg(long)]
    pub uri: Option<String>,
}
