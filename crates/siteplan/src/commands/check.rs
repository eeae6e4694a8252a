//! `siteplan check` command implementation.

use std::path::PathBuf;

use clap::Args;
use siteplan_config::{CliSettings, Settings};
use siteplan_sidebar::{SidebarItem, generate};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover siteplan.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Document root directory (overrides config).
    #[arg(short, long)]
    docs_dir: Option<PathBuf>,

    /// Enable verbose output (show generation timing logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid or the sidebar
    /// generator fails on the configured document root.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            docs_dir: self.docs_dir,
            ..Default::default()
        };
        let settings = Settings::load(self.config.as_deref(), Some(&cli_settings))?;

        // Re-validate after CLI overrides
        settings.validate()?;

        match &settings.config_path {
            Some(path) => output.info(&format!("Config file: {}", path.display())),
            None => output.info("Config file: none (using defaults)"),
        }
        output.info(&format!(
            "Document root: {}",
            settings.sidebar_resolved.docs_dir.display()
        ));

        let sidebar = generate(&settings.sidebar_resolved)?;
        let entry_count = count_entries(&sidebar);

        output.info(&format!(
            "Navigation entries: {}",
            settings.site.nav.len()
        ));
        output.info(&format!("Social links: {}", settings.site.social.len()));
        output.info(&format!(
            "Sidebar entries: {entry_count} ({} top-level)",
            sidebar.len()
        ));

        if sidebar.is_empty() {
            output.warning("Sidebar is empty: no markdown documents found");
        }

        output.success("Site configuration is valid");

        Ok(())
    }
}

/// Count all entries in a sidebar tree.
fn count_entries(items: &[SidebarItem]) -> usize {
    items
        .iter()
        .map(|item| 1 + count_entries(&item.items))
        .sum()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn leaf(text: &str) -> SidebarItem {
        SidebarItem {
            text: text.to_string(),
            link: Some(format!("/{text}")),
            collapsed: None,
            items: Vec::new(),
        }
    }

    #[test]
    fn test_count_entries_empty() {
        assert_eq!(count_entries(&[]), 0);
    }

    #[test]
    fn test_count_entries_counts_nested_items() {
        let group = SidebarItem {
            text: "Group".to_string(),
            link: None,
            collapsed: Some(false),
            items: vec![leaf("a"), leaf("b")],
        };

        assert_eq!(count_entries(&[group, leaf("c")]), 4);
    }
}
