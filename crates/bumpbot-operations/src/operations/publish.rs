use std::fmt;
use std::path::Path;
use std::str::FromStr;

use bumpbot_git::TagInfo;
use tracing::info;

use super::tag::{RemoteCredentials, create_and_push};
use super::{WorkspaceFacts, resolve_workspace_facts};
use crate::traits::{CommitInspector, TagPublisher, TagRequest, TargetPublisher, WorkspaceProvider};
use crate::{OperationError, Result};

/// Where a package's artifacts go, from `meta.publishTarget`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishTarget {
    AwsBucket,
    GithubPackages,
}

impl PublishTarget {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AwsBucket => "AWS_BUCKET",
            Self::GithubPackages => "GITHUB_PACKAGES",
        }
    }
}

impl fmt::Display for PublishTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PublishTarget {
    type Err = OperationError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "AWS_BUCKET" => Ok(Self::AwsBucket),
            "GITHUB_PACKAGES" => Ok(Self::GithubPackages),
            other => Err(OperationError::InvalidPublishTarget {
                target: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOutput {
    pub facts: WorkspaceFacts,
    pub target: PublishTarget,
    pub tag: TagInfo,
}

/// Tags the release commit and hands it to the package's publish target.
pub struct PublishOperation<G, W, B> {
    git: G,
    workspace: W,
    bucket: B,
}

impl<G, W, B> PublishOperation<G, W, B>
where
    G: CommitInspector + TagPublisher,
    W: WorkspaceProvider,
    B: TargetPublisher,
{
    pub fn new(git: G, workspace: W, bucket: B) -> Self {
        Self {
            git,
            workspace,
            bucket,
        }
    }

    /// The target is validated before anything is tagged, so an invalid or
    /// unsupported target leaves the remote untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the commit does not change exactly one descriptor,
    /// the publish target is invalid or unsupported, tagging fails, or the
    /// target publisher fails.
    pub fn execute(
        &self,
        root: &Path,
        commit: &str,
        credentials: &RemoteCredentials,
    ) -> Result<PublishOutput> {
        let facts = resolve_workspace_facts(&self.git, &self.workspace, root, commit)?;
        let target: PublishTarget = facts.publish_target.as_deref().unwrap_or_default().parse()?;
        let publisher = self.publisher_for(target)?;

        info!(
            "Publishing {} v{} to {target}",
            facts.package_name, facts.package_version
        );
        let tag = create_and_push(
            &self.git,
            root,
            &TagRequest::for_release(&facts, commit),
            credentials,
        )?;
        publisher.publish(&facts, &tag)?;

        Ok(PublishOutput { facts, target, tag })
    }

    fn publisher_for(&self, target: PublishTarget) -> Result<&dyn TargetPublisher> {
        match target {
            PublishTarget::AwsBucket => Ok(&self.bucket),
            PublishTarget::GithubPackages => Err(OperationError::PublishTargetUnsupported {
                target: target.to_string(),
            }),
        }
    }
}
