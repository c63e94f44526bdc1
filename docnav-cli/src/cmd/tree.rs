use anyhow::Result;
use clap::Command;
use docnav_core::SidebarNode;

use super::{add_common_args, read_site};
use crate::config::DocnavConfig;

pub fn make_subcommand() -> Command {
    add_common_args(Command::new("tree")).about("Print the sidebar tree")
}

pub fn execute(config: &DocnavConfig) -> Result<()> {
    let site = read_site(&config.cli.config)?;
    print!("{}", render_tree(&site.sidebar));
    Ok(())
}

/// One line per node, two spaces of indent per level.
pub fn render_tree(nodes: &[SidebarNode]) -> String {
    let mut out = String::new();
    push_nodes(&mut out, nodes, 0);
    out
}

fn push_nodes(out: &mut String, nodes: &[SidebarNode], level: usize) {
    for node in nodes {
        out.push_str(&"  ".repeat(level));
        out.push_str(&node.text);
        if let Some(link) = &node.link {
            out.push_str(&format!(" ({link})"));
        }
        if node.collapsed == Some(true) {
            out.push_str(" [collapsed]");
        }
        out.push('\n');
        push_nodes(out, &node.children, level + 1);
    }
}
