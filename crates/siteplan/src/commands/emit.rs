//! `siteplan emit` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use siteplan_config::{CliSettings, Settings, SiteConfig};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the emit command.
#[derive(Args)]
pub(crate) struct EmitArgs {
    /// Path to configuration file (default: auto-discover siteplan.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Document root directory (overrides config).
    #[arg(short, long)]
    docs_dir: Option<PathBuf>,

    /// Site title (overrides config).
    #[arg(long)]
    title: Option<String>,

    /// Site description (overrides config).
    #[arg(long)]
    description: Option<String>,

    /// Write the JSON to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit compact JSON on a single line.
    #[arg(long)]
    compact: bool,

    /// Enable verbose output (show generation timing logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl EmitArgs {
    /// Execute the emit command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, sidebar generation, or
    /// writing the result fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        // Build CLI settings from args
        let cli_settings = CliSettings {
            docs_dir: self.docs_dir,
            title: self.title,
            description: self.description,
        };

        // Load config
        let settings = Settings::load(self.config.as_deref(), Some(&cli_settings))?;

        let config = SiteConfig::build(&settings)?;
        let json = render_json(&config, self.compact)?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, &json)?;
                output.success(&format!(
                    "Site configuration written to {}",
                    path.display()
                ));
            }
            None => {
                // Status goes to stderr, so stdout stays clean JSON
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(json.as_bytes())?;
            }
        }

        Ok(())
    }
}

/// Render the site configuration as JSON with a trailing newline.
fn render_json(config: &SiteConfig, compact: bool) -> Result<String, CliError> {
    let json = if compact {
        serde_json::to_string(config)?
    } else {
        serde_json::to_string_pretty(config)?
    };
    Ok(format!("{json}\n"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn build_config(docs_dir: &std::path::Path) -> SiteConfig {
        let mut settings = Settings::default();
        settings.sidebar_resolved.docs_dir = docs_dir.to_path_buf();
        SiteConfig::build(&settings).unwrap()
    }

    #[test]
    fn test_render_json_compact_is_single_line() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = build_config(temp_dir.path());

        let json = render_json(&config, true).unwrap();

        assert_eq!(json.lines().count(), 1);
        assert!(json.ends_with('\n'));
    }

    #[test]
    fn test_render_json_pretty_is_multi_line() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = build_config(temp_dir.path());

        let json = render_json(&config, false).unwrap();

        assert!(json.lines().count() > 1);
        assert!(json.contains("\"themeConfig\""));
    }

    #[test]
    fn test_render_json_round_trips_schema_keys() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("guide.md"), "# Guide").unwrap();
        let config = build_config(temp_dir.path());

        let json = render_json(&config, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["themeConfig"]["outline"], "deep");
        assert_eq!(value["themeConfig"]["sidebar"][0]["link"], "/guide");
        assert_eq!(value["themeConfig"]["socialLinks"][0]["icon"], "github");
    }
}
