pub mod check;
pub mod export;
pub mod tree;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use docnav_core::SiteConfig;

/// Args shared by every subcommand.
pub fn add_common_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Site configuration file [default: ./docnav.toml]"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log at info level")
                .action(ArgAction::SetTrue),
        )
}

pub(crate) fn read_site(path: &str) -> Result<SiteConfig> {
    tracing::info!(path, "reading site config");
    SiteConfig::read(path).with_context(|| format!("invalid site config {path}"))
}
