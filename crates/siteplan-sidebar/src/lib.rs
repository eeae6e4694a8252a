//! Sidebar generation for the siteplan documentation site builder.
//!
//! Scans a markdown document tree and produces the sidebar structure that
//! the external build tool embeds in its theme configuration:
//!
//! - Markdown files become leaf entries linking to their page
//! - Directories become groups; an `index.md` gives the group its link
//! - Titles come from the first H1 heading, with filename fallback
//! - Entries at each level are ordered by name, numerically when configured
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use siteplan_sidebar::{SidebarOptions, generate};
//!
//! let options = SidebarOptions::new(PathBuf::from("docs"));
//! let sidebar = generate(&options)?;
//! for item in &sidebar {
//!     println!("{}", item.text);
//! }
//! ```

mod order;
mod scanner;
mod title;

use std::path::PathBuf;
use std::time::Instant;

use serde::Serialize;

/// Options controlling sidebar generation.
///
/// Mirrors the option record the external generator recognizes. All values
/// beyond the document root have fixed defaults, see [`SidebarOptions::new`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarOptions {
    /// Root directory of the markdown document tree.
    pub docs_dir: PathBuf,
    /// Derive entry titles from the first H1 heading of each document.
    pub use_title_from_heading: bool,
    /// Collapse menu groups by default.
    pub collapsed: bool,
    /// Depth up to which groups stay expanded (top level is 1).
    pub collapse_depth: u32,
    /// Order entries by numeric value of digit runs in their names.
    pub numeric_sort: bool,
}

impl SidebarOptions {
    /// Create options for a document root with the default policies:
    /// heading-derived titles, collapsed groups below depth 2, numeric
    /// ordering.
    #[must_use]
    pub fn new(docs_dir: PathBuf) -> Self {
        Self {
            docs_dir,
            use_title_from_heading: true,
            collapsed: true,
            collapse_depth: 2,
            numeric_sort: true,
        }
    }
}

impl Default for SidebarOptions {
    fn default() -> Self {
        Self::new(PathBuf::from("docs"))
    }
}

/// Sidebar entry consumed by the external build tool.
///
/// Leaves carry a `link` and no `items`; groups carry `items`, a `collapsed`
/// flag, and a `link` only when backed by an `index.md`. Absent fields are
/// omitted from serialization, matching the schema the tool expects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarItem {
    /// Display text.
    pub text: String,
    /// Link target path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Default collapse state, set only on groups with children.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    /// Child entries.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<SidebarItem>,
}

/// Sidebar generation error.
#[derive(Debug, thiserror::Error)]
pub enum SidebarError {
    /// Document root directory does not exist.
    #[error("Document root not found: {}", .0.display())]
    RootNotFound(PathBuf),
    /// I/O error while reading the document tree.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Generate the sidebar tree for a document root.
///
/// An existing but empty root yields an empty tree. A missing root is an
/// error; callers decide how to surface it.
///
/// # Errors
///
/// Returns [`SidebarError::RootNotFound`] if the document root does not
/// exist, or [`SidebarError::Io`] if a directory cannot be read.
pub fn generate(options: &SidebarOptions) -> Result<Vec<SidebarItem>, SidebarError> {
    let start = Instant::now();

    if !options.docs_dir.is_dir() {
        return Err(SidebarError::RootNotFound(options.docs_dir.clone()));
    }

    let items = scanner::scan_level(&options.docs_dir, "", 1, options)?;

    tracing::debug!(
        item_count = items.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Sidebar generated"
    );

    Ok(items)
}
