use std::path::Path;

use crate::Result;

/// Working-copy operations used by the bump flow. Every call runs against the
/// repository at `repo`.
pub trait GitProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if fetching from the remotes fails.
    fn fetch_prune(&self, repo: &Path) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if the branch cannot be checked out.
    fn checkout(&self, repo: &Path, branch: &str) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if pulling `branch` from `remote` fails.
    fn pull(&self, repo: &Path, remote: &str, branch: &str) -> Result<()>;

    /// Pulls the upstream of the current branch.
    ///
    /// # Errors
    ///
    /// Returns an error if the pull fails.
    fn pull_current(&self, repo: &Path) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if the status cannot be read.
    fn has_uncommitted_changes(&self, repo: &Path) -> Result<bool>;

    /// Whether `refname` resolves. A failed lookup counts as absent.
    ///
    /// # Errors
    ///
    /// Implementations may return an error when the lookup cannot run at all.
    fn ref_exists(&self, repo: &Path, refname: &str) -> Result<bool>;

    /// Whether `refs/tags/<tag>` exists on `remote`. A failed query counts as
    /// absent.
    ///
    /// # Errors
    ///
    /// Implementations may return an error when the query cannot run at all.
    fn remote_tag_exists(&self, repo: &Path, remote: &str, tag: &str) -> Result<bool>;

    /// Creates `branch` from the current commit and switches to it.
    ///
    /// # Errors
    ///
    /// Returns an error if the branch cannot be created.
    fn create_branch(&self, repo: &Path, branch: &str) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if staging fails.
    fn stage_all(&self, repo: &Path) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if the commit cannot be created.
    fn commit(&self, repo: &Path, message: &str) -> Result<()>;

    /// Pushes `branch` to `remote` and sets it as upstream.
    ///
    /// # Errors
    ///
    /// Returns an error if the push fails.
    fn push_upstream(&self, repo: &Path, remote: &str, branch: &str) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if the branch cannot be deleted.
    fn delete_branch(&self, repo: &Path, branch: &str) -> Result<()>;

    /// Discards every uncommitted change in the working copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the reset fails.
    fn reset_hard(&self, repo: &Path) -> Result<()>;
}
