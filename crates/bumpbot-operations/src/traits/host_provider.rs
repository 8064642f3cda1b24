use std::path::Path;

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

/// Label attached to every bump pull request.
pub const BUMP_LABEL: Label = Label {
    name: "bump",
    description: "The package.json version was bumped. Artifacts will be published when the PR is merged.",
    color: "6EE7B7",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    pub base: String,
    pub head: String,
    pub title: String,
    pub label: String,
    pub body: String,
}

/// The code host where bump branches become pull requests.
pub trait HostProvider: Send + Sync {
    /// Whether the host CLI is available.
    fn is_cli_installed(&self) -> bool;

    /// Creates the label, or updates it if it already exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the label cannot be created.
    fn ensure_label(&self, repo: &Path, label: &Label) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if the pull request cannot be opened.
    fn create_pull_request(&self, repo: &Path, pull_request: &PullRequest) -> Result<()>;
}
