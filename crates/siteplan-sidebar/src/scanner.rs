//! Document tree walking for sidebar construction.
//!
//! Walks the document root one directory level at a time. Each level is
//! classified into markdown leaves and subdirectory groups, ordered by
//! entry name, and assembled into [`SidebarItem`]s. `index.md` files are
//! consumed by their directory (title and link source) and never appear
//! as leaves.

use std::fs;
use std::path::Path;

use crate::order::compare_names;
use crate::title;
use crate::{SidebarError, SidebarItem, SidebarOptions};

/// A directory entry that contributes to the sidebar, keyed by the name
/// used for ordering (file stem or directory name).
struct Candidate {
    name: String,
    item: SidebarItem,
}

/// Scan one directory level and build its sidebar items.
///
/// `url_prefix` is the URL path of the directory (`""` for the root),
/// `depth` is 1 for top-level entries.
pub(crate) fn scan_level(
    dir: &Path,
    url_prefix: &str,
    depth: u32,
    options: &SidebarOptions,
) -> Result<Vec<SidebarItem>, SidebarError> {
    let entries = fs::read_dir(dir).map_err(|e| io_error(dir, e))?;

    let mut candidates: Vec<Candidate> = Vec::new();

    for entry in entries.filter_map(Result::ok) {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }

        let path = entry.path();
        if entry.file_type().is_ok_and(|t| t.is_dir()) {
            if let Some(candidate) = scan_directory(&path, &name, url_prefix, depth, options)? {
                candidates.push(candidate);
            }
        } else if path.extension().is_some_and(|e| e == "md") {
            if name.to_lowercase() == "index.md" {
                continue;
            }
            let stem = name.strip_suffix(".md").unwrap_or(&name);
            candidates.push(scan_file(&path, stem, url_prefix, options));
        }
    }

    candidates.sort_by(|a, b| compare_names(&a.name, &b.name, options.numeric_sort));

    Ok(candidates.into_iter().map(|c| c.item).collect())
}

/// Build a leaf item for a standalone markdown file.
fn scan_file(path: &Path, stem: &str, url_prefix: &str, options: &SidebarOptions) -> Candidate {
    let text = title::derive(Some(path), stem, options.use_title_from_heading);
    let link = format!("/{}", join_url(url_prefix, stem));

    Candidate {
        name: stem.to_owned(),
        item: SidebarItem {
            text,
            link: Some(link),
            collapsed: None,
            items: Vec::new(),
        },
    }
}

/// Build a group item for a subdirectory.
///
/// Returns `None` for directories that contribute nothing: no markdown
/// anywhere below and no `index.md` of their own.
fn scan_directory(
    path: &Path,
    name: &str,
    url_prefix: &str,
    depth: u32,
    options: &SidebarOptions,
) -> Result<Option<Candidate>, SidebarError> {
    let child_url = join_url(url_prefix, name);
    let items = scan_level(path, &child_url, depth + 1, options)?;

    let index_path = path.join("index.md");
    let has_index = index_path.is_file();
    if items.is_empty() && !has_index {
        return Ok(None);
    }

    let content = has_index.then_some(index_path.as_path());
    let text = title::derive(content, name, options.use_title_from_heading);
    let link = has_index.then(|| format!("/{child_url}/"));
    let collapsed =
        (!items.is_empty()).then(|| options.collapsed && depth >= options.collapse_depth);

    Ok(Some(Candidate {
        name: name.to_owned(),
        item: SidebarItem {
            text,
            link,
            collapsed,
            items,
        },
    }))
}

/// Combine a URL prefix with a child segment.
fn join_url(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_owned()
    } else {
        format!("{prefix}/{name}")
    }
}

fn io_error(path: &Path, source: std::io::Error) -> SidebarError {
    SidebarError::Io {
        path: path.to_path_buf(),
        source,
    }
}
