use std::path::{Path, PathBuf};

use bumpbot_git::{Committer, TagInfo};
use secrecy::SecretString;

use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRequest {
    pub name: String,
    pub target: String,
    pub message: String,
    pub committer: Committer,
}

pub trait CommitInspector: Send + Sync {
    /// Paths, relative to the repository root, changed by `commit` against its
    /// first parent.
    ///
    /// # Errors
    ///
    /// Returns an error if the commit cannot be resolved or diffed.
    fn files_changed_in_commit(&self, repo: &Path, commit: &str) -> Result<Vec<PathBuf>>;
}

pub trait TagPublisher: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the tag already exists or cannot be created.
    fn create_annotated_tag(&self, repo: &Path, request: &TagRequest) -> Result<TagInfo>;

    /// Pushes a single tag to `remote_url`, which may embed credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the push fails.
    fn push_tag(&self, repo: &Path, remote_url: &SecretString, tag: &str) -> Result<()>;
}
