//! Emitted site configuration.
//!
//! [`SiteConfig`] is the value the external static-site build tool consumes.
//! Field names and nesting follow the tool's configuration schema exactly
//! (`title`, `description`, `themeConfig.nav`, `themeConfig.sidebar`,
//! `themeConfig.socialLinks`, `themeConfig.outline`). The sidebar is the
//! only computed field; it is produced by the sidebar generator and passed
//! through unmodified, so swapping the generation strategy never touches
//! the rest of the configuration.

use serde::{Deserialize, Serialize};
use siteplan_sidebar::{SidebarError, SidebarItem};

use crate::Settings;

/// Top-level configuration record consumed by the external build tool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
    /// Theme configuration.
    #[serde(rename = "themeConfig")]
    pub theme_config: ThemeConfig,
}

/// Theme section of the site configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ThemeConfig {
    /// Navigation bar entries.
    pub nav: Vec<NavEntry>,
    /// Sidebar tree, computed by the sidebar generator.
    pub sidebar: Vec<SidebarItem>,
    /// Social links shown in the navigation bar.
    #[serde(rename = "socialLinks")]
    pub social_links: Vec<SocialLink>,
    /// Outline display mode.
    pub outline: Outline,
}

/// Navigation bar entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Display text.
    pub text: String,
    /// Link target path.
    pub link: String,
}

impl NavEntry {
    /// Create a navigation entry.
    #[must_use]
    pub fn new(text: &str, link: &str) -> Self {
        Self {
            text: text.to_owned(),
            link: link.to_owned(),
        }
    }
}

/// Social link entry: a platform icon identifier paired with a target URL.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Platform icon identifier (e.g., "github").
    pub icon: String,
    /// Target URL.
    pub link: String,
}

impl SocialLink {
    /// Create a social link entry.
    #[must_use]
    pub fn new(icon: &str, link: &str) -> Self {
        Self {
            icon: icon.to_owned(),
            link: link.to_owned(),
        }
    }
}

/// Outline display mode, controlling how many heading levels appear in a
/// page's table of contents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outline {
    /// Show all nested heading levels.
    #[default]
    Deep,
}

impl SiteConfig {
    /// Build the full site configuration from settings.
    ///
    /// Static fields are taken from the settings as-is; the sidebar is
    /// computed by the sidebar generator. The result is deterministic for a
    /// fixed document tree.
    ///
    /// # Errors
    ///
    /// Propagates [`SidebarError`] from the generator unhandled; there are
    /// no failure modes of its own.
    pub fn build(settings: &Settings) -> Result<Self, SidebarError> {
        let sidebar = siteplan_sidebar::generate(&settings.sidebar_resolved)?;

        Ok(Self {
            title: settings.site.title.clone(),
            description: settings.site.description.clone(),
            theme_config: ThemeConfig {
                nav: settings.site.nav.clone(),
                sidebar,
                social_links: settings.site.social.clone(),
                outline: settings.site.outline,
            },
        })
    }
}
