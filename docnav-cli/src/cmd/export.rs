use anyhow::Result;
use clap::Command;

use super::{add_common_args, read_site};
use crate::config::DocnavConfig;

pub fn make_subcommand() -> Command {
    add_common_args(Command::new("export"))
        .about("Print the validated configuration as JSON for the renderer")
}

pub fn execute(config: &DocnavConfig) -> Result<()> {
    let site = read_site(&config.cli.config)?;
    println!("{}", serde_json::to_string_pretty(&site)?);
    Ok(())
}
