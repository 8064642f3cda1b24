use std::path::{Component, Path, PathBuf};

use bumpbot_core::PackageEntry;
use tracing::debug;

use crate::descriptor::{DESCRIPTOR_FILE, Descriptor, read_descriptor};
use crate::error::WorkspaceError;

const IGNORED_DIR: &str = "node_modules";

/// Lists the root package followed by every workspace package it declares.
///
/// Workspace packages appear in pattern order, and within one pattern in glob
/// expansion order. Any unreadable descriptor aborts the whole discovery.
///
/// # Errors
///
/// Returns `WorkspaceError` if the root descriptor is missing or invalid, a
/// pattern is malformed, or any matched descriptor cannot be read.
pub fn discover_packages(root: &Path) -> Result<Vec<PackageEntry>, WorkspaceError> {
    let root_file = root.join(DESCRIPTOR_FILE);
    let root_descriptor = read_descriptor(&root_file)?;
    let workspaces = root_descriptor.workspaces.clone();

    let mut packages = vec![package_entry(root_descriptor, root_file).as_root()];

    let Some(patterns) = workspaces else {
        return Ok(packages);
    };

    for pattern in &patterns {
        for descriptor_path in expand_workspace_pattern(root, pattern)? {
            let descriptor = read_descriptor(&descriptor_path)?;
            packages.push(package_entry(descriptor, descriptor_path));
        }
    }

    debug!(root = %root.display(), count = packages.len(), "discovered packages");

    Ok(packages)
}

fn package_entry(descriptor: Descriptor, file: PathBuf) -> PackageEntry {
    PackageEntry::new(descriptor.name, descriptor.version, file)
        .with_description(descriptor.description)
}

fn expand_workspace_pattern(root: &Path, pattern: &str) -> Result<Vec<PathBuf>, WorkspaceError> {
    let root_str = root.to_str().ok_or_else(|| WorkspaceError::NonUtf8Path {
        path: root.to_path_buf(),
    })?;

    let full_pattern = Path::new(&glob::Pattern::escape(root_str))
        .join(pattern)
        .join(DESCRIPTOR_FILE);
    let full_pattern = full_pattern
        .to_str()
        .ok_or_else(|| WorkspaceError::NonUtf8Path {
            path: full_pattern.clone(),
        })?;

    let paths = glob::glob(full_pattern).map_err(|source| WorkspaceError::GlobPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut matches = Vec::new();
    for path in paths {
        let path = path?;
        if is_ignored(root, &path) {
            continue;
        }
        matches.push(path);
    }

    debug!(pattern, count = matches.len(), "expanded workspace pattern");

    Ok(matches)
}

fn is_ignored(root: &Path, path: &Path) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .any(|c| matches!(c, Component::Normal(name) if name == IGNORED_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_paths_inside_node_modules() {
        let root = Path::new("/repo");

        assert!(is_ignored(
            root,
            Path::new("/repo/packages/a/node_modules/dep/package.json")
        ));
        assert!(!is_ignored(root, Path::new("/repo/packages/a/package.json")));
    }

    #[test]
    fn node_modules_above_root_is_not_ignored() {
        let root = Path::new("/home/node_modules/repo");

        assert!(!is_ignored(
            root,
            Path::new("/home/node_modules/repo/packages/a/package.json")
        ));
    }
}
