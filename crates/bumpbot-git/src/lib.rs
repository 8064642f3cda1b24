mod error;
mod repository;
mod types;

pub use error::GitError;
pub use repository::Repository;
pub use types::{Committer, FileChange, FileStatus, TagInfo};

use std::path::Path;

pub type Result<T> = std::result::Result<T, GitError>;

/// # Errors
///
/// Returns an error if the path is not a git repository or the commit cannot
/// be resolved or has no parent.
pub fn files_changed_in_commit(path: &Path, commit: &str) -> Result<Vec<FileChange>> {
    Repository::open(path)?.files_changed_in_commit(commit)
}
