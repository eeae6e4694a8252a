//! Configuration management for siteplan.
//!
//! Parses `siteplan.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. Defaults reproduce
//! the built-in site exactly, so a missing config file is not an error.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.title`
//! - `site.description`
//! - `site.social[].link`

mod expand;
mod site;

pub use site::{NavEntry, Outline, SiteConfig, SocialLink, ThemeConfig};

use std::path::{Path, PathBuf};

use serde::Deserialize;
use siteplan_sidebar::SidebarOptions;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "siteplan.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override document root directory.
    pub docs_dir: Option<PathBuf>,
    /// Override site title.
    pub title: Option<String>,
    /// Override site description.
    pub description: Option<String>,
}

/// Application settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Site identity and theme entries.
    pub site: SiteSettings,
    /// Sidebar generation options (paths are relative strings from TOML).
    #[serde(default)]
    sidebar: SidebarSettingsRaw,

    /// Resolved sidebar options (set after loading).
    #[serde(skip)]
    pub sidebar_resolved: SidebarOptions,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site identity and theme entries.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
    /// Outline display mode for page tables of contents.
    pub outline: Outline,
    /// Navigation bar entries.
    pub nav: Vec<NavEntry>,
    /// Social links shown in the navigation bar.
    pub social: Vec<SocialLink>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            title: "StudyLog".to_owned(),
            description: "A Site Description".to_owned(),
            outline: Outline::Deep,
            nav: vec![
                NavEntry::new("Home", "/"),
                NavEntry::new("Examples", "/Misc/markdown-examples"),
            ],
            social: vec![SocialLink::new(
                "github",
                "https://github.com/vuejs/vitepress",
            )],
        }
    }
}

/// Raw sidebar settings as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SidebarSettingsRaw {
    docs_dir: Option<String>,
    use_title_from_heading: Option<bool>,
    collapsed: Option<bool>,
    collapse_depth: Option<u32>,
    numeric_sort: Option<bool>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.title`").
        field: String,
        /// Error message (e.g., "${`SITE_TITLE`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Settings {
    /// Load settings from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `siteplan.toml` in current directory and
    /// parents, falling back to defaults when none exists.
    ///
    /// CLI settings are applied after loading and path resolution, allowing
    /// CLI arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut settings = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(overrides) = cli_settings {
            settings.apply_cli_settings(overrides);
        }

        Ok(settings)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(docs_dir) = &settings.docs_dir {
            self.sidebar_resolved.docs_dir.clone_from(docs_dir);
        }
        if let Some(title) = &settings.title {
            self.site.title.clone_from(title);
        }
        if let Some(description) = &settings.description {
            self.site.description.clone_from(description);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default settings with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default settings with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteSettings::default(),
            sidebar: SidebarSettingsRaw::default(),
            sidebar_resolved: SidebarOptions::new(base.join("docs")),
            config_path: None,
        }
    }

    /// Load settings from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut settings: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        settings.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        settings.resolve_paths(config_dir);
        settings.config_path = Some(path.to_path_buf());

        // Validate configuration after loading and resolution
        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are properly set and contain valid
    /// values. Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;

        for entry in &self.site.nav {
            require_non_empty(&entry.text, "site.nav text")?;
            require_non_empty(&entry.link, "site.nav link")?;
            if !entry.link.starts_with('/') {
                return Err(ConfigError::Validation(format!(
                    "site.nav link must start with '/': {}",
                    entry.link
                )));
            }
        }

        for social in &self.site.social {
            require_non_empty(&social.icon, "site.social icon")?;
            require_http_url(&social.link, "site.social link")?;
        }

        if self.sidebar_resolved.collapse_depth == 0 {
            return Err(ConfigError::Validation(
                "sidebar.collapse_depth must be greater than 0".to_owned(),
            ));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.title = expand::expand_env(&self.site.title, "site.title")?;
        self.site.description = expand::expand_env(&self.site.description, "site.description")?;

        for social in &mut self.site.social {
            social.link = expand::expand_env(&social.link, "site.social link")?;
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.sidebar_resolved = SidebarOptions {
            docs_dir: config_dir.join(self.sidebar.docs_dir.as_deref().unwrap_or("docs")),
            use_title_from_heading: self.sidebar.use_title_from_heading.unwrap_or(true),
            collapsed: self.sidebar.collapsed.unwrap_or(true),
            collapse_depth: self.sidebar.collapse_depth.unwrap_or(2),
            numeric_sort: self.sidebar.numeric_sort.unwrap_or(true),
        };
    }
}
