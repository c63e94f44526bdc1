use anyhow::Result;
use clap::ArgMatches;
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI settings merged from CLI args, env vars, the site config file, and defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DocnavConfig {
    /// Settings read from the `[cli]` table
    pub cli: CliConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    /// Site configuration file
    pub config: String,
    /// Output format for `check`
    pub format: OutputFormat,
    /// Log at info level
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            config: "./docnav.toml".to_string(),
            format: OutputFormat::Text,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl DocnavConfig {
    /// Load settings with cascading precedence:
    /// 1. CLI arguments (highest priority)
    /// 2. Environment variables (DOCNAV_*)
    /// 3. `[cli]` table of the site configuration file
    /// 4. Defaults (lowest priority)
    pub fn load(args: &ArgMatches) -> Result<Self> {
        let defaults = Self::default();
        let config_file = arg(args, "config").unwrap_or_else(|| defaults.cli.config.clone());

        let mut builder = ConfigBuilder::builder().add_source(ConfigBuilder::try_from(&defaults)?);

        if Path::new(&config_file).exists() {
            // The site file is TOML whatever its extension
            builder = builder.add_source(File::from(Path::new(&config_file)).format(FileFormat::Toml));
        }

        builder = builder.add_source(
            Environment::with_prefix("DOCNAV")
                .prefix_separator("_")
                .separator("__"), // Use double underscore for nested keys
        );

        if let Some(config) = arg(args, "config") {
            builder = builder.set_override("cli.config", config)?;
        }
        if let Some(format) = arg(args, "format") {
            builder = builder.set_override("cli.format", format)?;
        }
        if args.try_get_one::<bool>("verbose").ok().flatten() == Some(&true) {
            builder = builder.set_override("cli.verbose", true)?;
        }

        let config: DocnavConfig = builder.build()?.try_deserialize()?;
        Ok(config)
    }
}

// Only args defined for the current command are consulted.
fn arg(args: &ArgMatches, id: &str) -> Option<String> {
    args.try_get_one::<String>(id).ok().flatten().cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd;
    use std::io::Write;

    fn matches(argv: &[&str]) -> ArgMatches {
        cmd::check::make_subcommand()
            .try_get_matches_from(argv)
            .unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = DocnavConfig::default();
        assert_eq!(config.cli.config, "./docnav.toml");
        assert_eq!(config.cli.format, OutputFormat::Text);
        assert!(!config.cli.verbose);
    }

    #[test]
    fn test_config_file_cli_table() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "title = \"Docs\"\n\n[cli]\nformat = \"json\"").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let config = DocnavConfig::load(&matches(&["test", "--config", &path])).unwrap();
        assert_eq!(config.cli.config, path);
        assert_eq!(config.cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_cli_args_override_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "title = \"Docs\"\n\n[cli]\nformat = \"json\"").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let config = DocnavConfig::load(&matches(&[
            "test", "--config", &path, "--format", "text", "--verbose",
        ]))
        .unwrap();
        assert_eq!(config.cli.format, OutputFormat::Text);
        assert!(config.cli.verbose);
    }

    #[test]
    fn test_config_file_without_toml_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.conf");
        std::fs::write(&path, "title = \"Docs\"\n\n[cli]\nformat = \"json\"\n").unwrap();
        let path = path.to_string_lossy().to_string();

        let config = DocnavConfig::load(&matches(&["test", "--config", &path])).unwrap();
        assert_eq!(config.cli.format, OutputFormat::Json);
        assert_eq!(docnav_core::SiteConfig::read(&path).unwrap().meta.title, "Docs");
    }

    #[test]
    fn test_format_only_on_check() {
        let tree = cmd::tree::make_subcommand().try_get_matches_from(["tree", "--format", "json"]);
        assert!(tree.is_err());

        let export = cmd::export::make_subcommand().try_get_matches_from(["export", "--format", "text"]);
        assert!(export.is_err());

        let config = DocnavConfig::load(
            &cmd::tree::make_subcommand()
                .try_get_matches_from(["tree", "--verbose"])
                .unwrap(),
        )
        .unwrap();
        assert!(config.cli.verbose);
    }

    #[test]
    fn test_missing_config_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml").to_string_lossy().to_string();

        let config = DocnavConfig::load(&matches(&["test", "--config", &path])).unwrap();
        assert_eq!(config.cli.config, path);
        assert_eq!(config.cli.format, OutputFormat::Text);
    }
}
