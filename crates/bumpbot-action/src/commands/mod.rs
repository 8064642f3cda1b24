mod enforce_title;
mod publish;
mod tag;
mod workspace_info;

use std::path::PathBuf;

use bumpbot_operations::operations::{
    RELEASE_COMMITTER_EMAIL, RELEASE_COMMITTER_NAME, RemoteCredentials,
};
use bumpbot_operations::providers::{GithubOutputFile, StdoutOutputSink};
use bumpbot_operations::traits::OutputSink;
use clap::{Args, Subcommand};
use secrecy::SecretString;

use crate::error::{ActionError, Result};

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Fail unless the pull request title matches an accepted pattern
    EnforceTitle(EnforceTitleArgs),
    /// Create an annotated tag and push it to GitHub
    Tag(TagArgs),
    /// Report the package bumped by a commit as step outputs
    WorkspaceInfo(WorkspaceInfoArgs),
    /// Tag the package bumped by a commit and publish it
    PublishWorkspace(PublishArgs),
}

impl Commands {
    pub(crate) fn execute(self) -> Result<()> {
        match self {
            Self::EnforceTitle(args) => enforce_title::run(&args),
            Self::Tag(args) => tag::run(args),
            Self::WorkspaceInfo(args) => workspace_info::run(args),
            Self::PublishWorkspace(args) => publish::run(args),
        }
    }
}

#[derive(Args)]
pub(crate) struct EnforceTitleArgs {
    /// Pull request title to check
    #[arg(long, env = "INPUT_TITLE")]
    pub title: String,
}

/// The checked-out repository and the commit to inspect.
#[derive(Args)]
pub(crate) struct CommitArgs {
    /// Repository root
    #[arg(long, env = "GITHUB_WORKSPACE")]
    pub workspace: PathBuf,

    /// Commit to inspect
    #[arg(long, env = "INPUT_SHA")]
    pub sha: String,
}

impl CommitArgs {
    fn sha(&self) -> Result<&str> {
        non_empty("INPUT_SHA", &self.sha)
    }
}

#[derive(Args)]
pub(crate) struct RemoteArgs {
    /// User the push is made as
    #[arg(long, env = "GITHUB_ACTOR")]
    pub actor: String,

    /// Access token for the push
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Repository as owner/name
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: String,
}

impl RemoteArgs {
    fn into_credentials(self) -> Result<RemoteCredentials> {
        non_empty("GITHUB_ACTOR", &self.actor)?;
        non_empty("GITHUB_TOKEN", &self.token)?;
        Ok(RemoteCredentials::new(
            self.actor,
            SecretString::from(self.token),
            self.repository,
        ))
    }
}

#[derive(Args)]
pub(crate) struct TagArgs {
    #[command(flatten)]
    pub commit: CommitArgs,

    /// Tag to create (default: derived from the package bumped by the commit)
    #[arg(long, env = "INPUT_TAG_NAME")]
    pub tag_name: Option<String>,

    /// Tag message (default: the tag name)
    #[arg(long, env = "INPUT_TAG_MESSAGE")]
    pub tag_message: Option<String>,

    #[arg(long, env = "INPUT_COMMITTER_NAME", default_value = RELEASE_COMMITTER_NAME)]
    pub committer_name: String,

    #[arg(long, env = "INPUT_COMMITTER_EMAIL", default_value = RELEASE_COMMITTER_EMAIL)]
    pub committer_email: String,

    #[command(flatten)]
    pub remote: RemoteArgs,
}

#[derive(Args)]
pub(crate) struct WorkspaceInfoArgs {
    #[command(flatten)]
    pub commit: CommitArgs,

    /// File step outputs are appended to (default: standard output)
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub output_file: Option<PathBuf>,
}

#[derive(Args)]
pub(crate) struct PublishArgs {
    #[command(flatten)]
    pub commit: CommitArgs,

    #[command(flatten)]
    pub remote: RemoteArgs,
}

/// Where step outputs go for this run.
pub(crate) enum StepOutputs {
    File(GithubOutputFile),
    Stdout(StdoutOutputSink),
}

impl StepOutputs {
    pub(crate) fn new(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self::File(GithubOutputFile::new(path)),
            None => Self::Stdout(StdoutOutputSink),
        }
    }
}

impl OutputSink for StepOutputs {
    fn set_output(&self, name: &str, value: &str) -> bumpbot_operations::Result<()> {
        match self {
            Self::File(file) => file.set_output(name, value),
            Self::Stdout(stdout) => stdout.set_output(name, value),
        }
    }
}

fn non_empty<'a>(name: &'static str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ActionError::EmptyInput { name });
    }
    Ok(trimmed)
}
