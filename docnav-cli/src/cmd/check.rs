use anyhow::Result;
use clap::{Arg, Command};
use docnav_core::{App, DocsTheme, SiteConfig, install_theme};
use serde::Serialize;
use std::fmt;

use super::{add_common_args, read_site};
use crate::config::{DocnavConfig, OutputFormat};

pub fn make_subcommand() -> Command {
    add_common_args(Command::new("check"))
        .about("Validate the site configuration and summarize it")
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .value_parser(["text", "json"])
                .help("Report format"),
        )
}

pub fn execute(config: &DocnavConfig) -> Result<()> {
    let site = read_site(&config.cli.config)?;

    let mut app = App::new();
    install_theme(&DocsTheme::default(), &mut app);

    let report = Report::new(&site, &app);
    match config.cli.format {
        OutputFormat::Text => print!("{report}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

/// Summary of a site configuration that passed validation.
#[derive(Debug, Serialize)]
pub struct Report {
    pub title: String,
    pub source_root: String,
    pub nav_items: usize,
    pub sections: usize,
    pub pages: usize,
    pub links: usize,
    pub depth: usize,
    pub social_links: Vec<String>,
    pub components: Vec<String>,
}

impl Report {
    pub fn new(site: &SiteConfig, app: &App) -> Self {
        Self {
            title: site.meta.title.clone(),
            source_root: site.meta.source_root().to_string(),
            nav_items: site.nav.len(),
            sections: site.sidebar.len(),
            pages: site.leaves().len(),
            links: site.links().len(),
            depth: site.depth(),
            social_links: site
                .social_links
                .iter()
                .map(|s| s.platform.to_string())
                .collect(),
            components: app
                .components()
                .names()
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (source: {})", self.title, self.source_root)?;
        writeln!(f, "  nav items:  {}", self.nav_items)?;
        writeln!(
            f,
            "  sidebar:    {} sections, {} pages, {} links, depth {}",
            self.sections, self.pages, self.links, self.depth
        )?;
        if !self.social_links.is_empty() {
            writeln!(f, "  social:     {}", self.social_links.join(", "))?;
        }
        writeln!(f, "  components: {}", self.components.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SITE: &str = r#"
title = "Frontend Notes"

[[nav]]
text = "Home"
link = "/"

[[sidebar]]
text = "HTML"
link = "/html"
items = [{ text = "defer、async", link = "/html/defer-async" }]

[[sidebar]]
text = "CSS"
items = [{ text = "selector", link = "/selector" }]

[[socialLinks]]
icon = "github"
link = "https://github.com/example/notes"
"#;

    fn report() -> Report {
        let site = SiteConfig::from_toml_str(SITE).unwrap();
        let mut app = App::new();
        install_theme(&DocsTheme::default(), &mut app);
        Report::new(&site, &app)
    }

    #[test]
    fn test_report_counts() {
        let report = report();
        assert_eq!(report.source_root, ".");
        assert_eq!(report.nav_items, 1);
        assert_eq!(report.sections, 2);
        assert_eq!(report.pages, 2);
        assert_eq!(report.links, 3);
        assert_eq!(report.depth, 2);
        assert_eq!(report.social_links, vec!["github"]);
        assert_eq!(report.components, vec!["CodeDemo"]);
    }

    #[test]
    fn test_bundled_site_config() {
        let site = SiteConfig::from_toml_str(include_str!("../../../docnav.toml")).unwrap();
        assert_eq!(site.meta.source_root(), "./docs");
        assert_eq!(
            site.active_trail("/js/event-loop"),
            Some(vec!["JavaScript", "Async", "Event loop"])
        );
        assert_eq!(site.leaves().len(), 10);
    }

    #[test]
    fn test_report_text() {
        let text = report().to_string();
        assert!(text.starts_with("Frontend Notes (source: .)\n"));
        assert!(text.contains("2 sections, 2 pages, 3 links, depth 2"));
        assert!(text.contains("social:     github"));
        assert!(text.ends_with("components: CodeDemo\n"));
    }
}
