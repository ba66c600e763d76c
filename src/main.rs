use anyhow::{Context as _, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use waypoint::cli::Args;
use waypoint::transport::Target;
use waypoint::{classify, load, merge, scan, AliasRegistry, BootContext, Config, Resolver};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let cfg = Config::load(args.config.as_deref())?;

    let cwd = std::env::current_dir().context("could not determine working directory")?;
    let ctx = BootContext::discover(&cwd).with_overrides(args.root.clone(), args.uri.clone());

    let search = scan::search_path(&args.alias_paths, &cfg.aliases.paths, ctx.root.as_deref());
    let registry = AliasRegistry::build(search.iter().map(|dir| load::load_dir(dir)));

    let Some(reference) = args.reference.as_deref() else {
        for name in registry.names() {
            println!("@{name}");
        }
        return Ok(());
    };

    let resolver =
        Resolver::new(&registry, &ctx).with_default_environment(&cfg.aliases.default_environment);
    let record = resolver.resolve(reference)?;
    let effective = merge(&record, &args.command);

    println!("alias: {}", record.id);
    match classify(&record) {
        Target::Local { root, uri } => {
            println!("target: local");
            if let Some(root) = root {
                println!("root: {}", root.display());
            }
            if let Some(uri) = uri {
                println!("uri: {uri}");
            }
        }
        Target::Remote(spec) => {
            println!("target: remote");
            println!("host: {}", spec.host);
            if let Some(user) = &spec.user {
                println!("user: {user}");
            }
            println!("os: {}", spec.os);
            if let Some(ssh) = &spec.ssh_options {
                println!("ssh-options: {ssh}");
            }
        }
    }

    if !effective.is_empty() {
        let yaml = serde_yaml::to_string(&effective).context("failed to render options")?;
        println!("options:");
        for line in yaml.lines() {
            println!("  {line}");
        }
    }

    Ok(())
}
