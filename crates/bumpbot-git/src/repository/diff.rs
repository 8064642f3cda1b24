use std::path::PathBuf;

use crate::{FileChange, FileStatus, GitError, Result};

use super::Repository;

impl Repository {
    /// Files touched by `commit` relative to its first parent.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RefNotFound`] if the commit cannot be resolved and
    /// [`GitError::NoParent`] for a root commit or a shallow clone that lacks
    /// the parent.
    pub fn files_changed_in_commit(&self, commit: &str) -> Result<Vec<FileChange>> {
        let head = self.resolve_commit(commit)?;
        let parent = head.parent(0).map_err(|_| GitError::NoParent {
            commit: commit.to_string(),
        })?;

        let diff = self
            .inner
            .diff_tree_to_tree(Some(&parent.tree()?), Some(&head.tree()?), None)?;

        let mut changes = Vec::new();

        for delta in diff.deltas() {
            let status = match delta.status() {
                git2::Delta::Added => FileStatus::Added,
                git2::Delta::Deleted => FileStatus::Deleted,
                git2::Delta::Modified => FileStatus::Modified,
                git2::Delta::Renamed => FileStatus::Renamed,
                git2::Delta::Copied => FileStatus::Copied,
                _ => continue,
            };

            let path = delta
                .new_file()
                .path()
                .or_else(|| delta.old_file().path())
                .map(PathBuf::from)
                .ok_or(GitError::MissingDeltaPath)?;

            changes.push(FileChange::new(path, status));
        }

        Ok(changes)
    }
}
