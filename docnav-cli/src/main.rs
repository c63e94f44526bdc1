mod cmd;
mod config;

use anyhow::Result;
use clap::Command;
use tracing_subscriber::EnvFilter;

use crate::config::DocnavConfig;

fn main() -> Result<()> {
    let matches = Command::new("docnav")
        .about("Check and export documentation site navigation")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(cmd::check::make_subcommand())
        .subcommand(cmd::tree::make_subcommand())
        .subcommand(cmd::export::make_subcommand())
        .get_matches();

    let Some((name, args)) = matches.subcommand() else {
        unreachable!("subcommand_required is set");
    };

    let config = DocnavConfig::load(args)?;

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if config.cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match name {
        "check" => cmd::check::execute(&config),
        "tree" => cmd::tree::execute(&config),
        "export" => cmd::export::execute(&config),
        _ => unreachable!("unknown subcommand {name}"),
    }
}
