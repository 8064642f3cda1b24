use std::fmt::Write as _;
use std::path::PathBuf;

use thiserror::Error;

/// A rollback action that failed while undoing a bump.
#[derive(Debug)]
pub struct CompensationFailure {
    /// Name of the step whose compensation failed.
    pub step: String,
    /// What the compensation was trying to do.
    pub description: String,
    pub error: Box<OperationError>,
}

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Process(#[from] bumpbot_process::ProcessError),

    #[error(transparent)]
    Git(#[from] bumpbot_git::GitError),

    #[error(transparent)]
    Workspace(#[from] bumpbot_workspace::WorkspaceError),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("failed to write output '{name}' to '{path}'")]
    OutputWrite {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("GitHub CLI is not installed.\nRun \"brew install gh\"\nOr download from https://cli.github.com/")]
    GithubCliMissing,

    #[error(
        "You have uncommitted changes in your local repository. Commit or stash your changes before running bump."
    )]
    DirtyWorkingTree,

    #[error("operation cancelled")]
    Cancelled,

    #[error("interaction required but no terminal is available")]
    InteractionRequired,

    #[error("unknown package '{name}' (available: {available})")]
    UnknownPackage { name: String, available: String },

    #[error(
        "Branch \"{branch}\" already exists on remote \"{remote}\".\n  * Did someone else already bump \"{package}\" to v{version}?\n  * If a bump PR matching this version was closed, make sure the branch was deleted"
    )]
    RemoteBranchExists {
        branch: String,
        remote: String,
        package: String,
        version: String,
    },

    #[error(
        "Branch \"{branch}\" already exists in local repository.\n  * Did you already attempt to bump \"{package}\" to v{version}?\n  * Delete the local branch and try again"
    )]
    LocalBranchExists {
        branch: String,
        package: String,
        version: String,
    },

    #[error(
        "Tag \"{tag}\" already exists on remote \"{remote}\".\n  * It looks like someone already bumped and published \"{package}\" to v{version}?\n  * package.json version may be out of sync with remote tags\n  * Make sure you're using the correct base branch"
    )]
    RemoteTagExists {
        tag: String,
        remote: String,
        package: String,
        version: String,
    },

    #[error("invalid pull request title pattern")]
    TitlePattern(#[from] regex::Error),

    #[error("{}", render_title_failure(.title, .criteria))]
    InvalidTitle {
        title: String,
        criteria: Vec<String>,
    },

    #[error("Commit {commit} does not contain any changes to package.json")]
    NoDescriptorChanged { commit: String },

    #[error("Commit {commit} contains more than 1 package.json change ({count} changed)")]
    MultipleDescriptorsChanged { commit: String, count: usize },

    #[error("invalid publish target \"{target}\"")]
    InvalidPublishTarget { target: String },

    #[error("publish target \"{target}\" is not supported yet")]
    PublishTargetUnsupported { target: String },

    #[error("publishing to \"{target}\" is not implemented yet")]
    PublishNotImplemented { target: String },

    #[error("invalid repository \"{repository}\"; expected \"owner/name\"")]
    InvalidRepository { repository: String },

    #[error("failed to build remote URL")]
    RemoteUrl(#[from] url::ParseError),

    #[error("remote URL cannot carry credentials for actor \"{actor}\"")]
    RemoteCredentials { actor: String },
}

impl OperationError {
    /// True for the duplicate branch and tag checks that abort a bump.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::RemoteBranchExists { .. }
                | Self::LocalBranchExists { .. }
                | Self::RemoteTagExists { .. }
        )
    }
}

fn render_title_failure(title: &str, criteria: &[String]) -> String {
    let mut message = format!(
        "Pull request title \"{title}\" does not match PR title criteria. Titles must match one of the following:"
    );
    for (index, criterion) in criteria.iter().enumerate() {
        let _ = write!(message, "\n\t{}. {criterion}", index + 1);
    }
    message
}

pub type Result<T> = std::result::Result<T, OperationError>;
