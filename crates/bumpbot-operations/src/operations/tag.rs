use std::path::Path;

use bumpbot_git::{Committer, TagInfo};
use secrecy::{ExposeSecret, SecretString};
use tracing::info;
use url::Url;

use super::{WorkspaceFacts, resolve_workspace_facts};
use crate::traits::{CommitInspector, TagPublisher, TagRequest, WorkspaceProvider};
use crate::{OperationError, Result};

pub const RELEASE_COMMITTER_NAME: &str = "bumpbot";
pub const RELEASE_COMMITTER_EMAIL: &str = "bumpbot@users.noreply.github.com";

const GITHUB_BASE: &str = "https://github.com/";

/// Who pushes release tags, and where.
#[derive(Debug, Clone)]
pub struct RemoteCredentials {
    pub actor: String,
    pub token: SecretString,
    /// `owner/name`
    pub repository: String,
}

impl RemoteCredentials {
    #[must_use]
    pub fn new(
        actor: impl Into<String>,
        token: SecretString,
        repository: impl Into<String>,
    ) -> Self {
        Self {
            actor: actor.into(),
            token,
            repository: repository.into(),
        }
    }

    /// `https://<actor>:<token>@github.com/<owner>/<name>.git`
    ///
    /// # Errors
    ///
    /// Returns an error if the repository is not `owner/name` or the URL
    /// cannot carry the credentials.
    pub fn authenticated_url(&self) -> Result<SecretString> {
        let valid = self
            .repository
            .split_once('/')
            .is_some_and(|(owner, name)| {
                !owner.is_empty() && !name.is_empty() && !name.contains('/')
            });
        if !valid {
            return Err(OperationError::InvalidRepository {
                repository: self.repository.clone(),
            });
        }

        let mut url = Url::parse(GITHUB_BASE)?.join(&format!("{}.git", self.repository))?;
        let credentials_error = || OperationError::RemoteCredentials {
            actor: self.actor.clone(),
        };
        url.set_username(&self.actor)
            .map_err(|()| credentials_error())?;
        url.set_password(Some(self.token.expose_secret()))
            .map_err(|()| credentials_error())?;

        Ok(SecretString::from(String::from(url)))
    }
}

impl TagRequest {
    /// The `<name>/v<version>` tag for the package a release commit bumped.
    #[must_use]
    pub fn for_release(facts: &WorkspaceFacts, target: &str) -> Self {
        Self {
            name: facts.workspace_tag.clone(),
            target: target.to_string(),
            message: format!("{} v{}", facts.package_name, facts.package_version),
            committer: Committer::new(RELEASE_COMMITTER_NAME, RELEASE_COMMITTER_EMAIL),
        }
    }
}

/// What the caller asked to tag. Blank names and messages count as absent.
#[derive(Debug, Clone)]
pub struct TagInput {
    pub name: Option<String>,
    pub message: Option<String>,
    pub target: String,
    pub committer: Committer,
}

/// Builds the tag request for `input`.
///
/// An explicit name is used as-is, with the message defaulting to the name.
/// Without one the tag follows the package the target commit bumped, keeping
/// the caller's committer.
///
/// # Errors
///
/// Returns an error if no name was given and the target commit does not
/// identify exactly one bumped package.
pub fn resolve_tag_request<C, W>(
    inspector: &C,
    workspace: &W,
    root: &Path,
    input: TagInput,
) -> Result<TagRequest>
where
    C: CommitInspector + ?Sized,
    W: WorkspaceProvider + ?Sized,
{
    let TagInput {
        name,
        message,
        target,
        committer,
    } = input;

    if let Some(name) = name.as_deref().map(str::trim).filter(|name| !name.is_empty()) {
        let message = message
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| name.to_string());
        return Ok(TagRequest {
            name: name.to_string(),
            target,
            message,
            committer,
        });
    }

    let facts = resolve_workspace_facts(inspector, workspace, root, &target)?;
    Ok(TagRequest {
        committer,
        ..TagRequest::for_release(&facts, &target)
    })
}

pub(super) fn create_and_push<T: TagPublisher + ?Sized>(
    publisher: &T,
    root: &Path,
    request: &TagRequest,
    credentials: &RemoteCredentials,
) -> Result<TagInfo> {
    let url = credentials.authenticated_url()?;

    info!("Creating tag \"{}\" on {}", request.name, request.target);
    let tag = publisher.create_annotated_tag(root, request)?;

    info!("Pushing tag to {}", credentials.repository);
    publisher.push_tag(root, &url, &tag.name)?;

    Ok(tag)
}

/// Creates an annotated tag and pushes it to the remote.
pub struct TagOperation<T> {
    publisher: T,
}

impl<T: TagPublisher> TagOperation<T> {
    pub fn new(publisher: T) -> Self {
        Self { publisher }
    }

    /// # Errors
    ///
    /// Returns an error if the credentials are unusable, the tag exists or
    /// cannot be created, or the push fails.
    pub fn execute(
        &self,
        root: &Path,
        request: &TagRequest,
        credentials: &RemoteCredentials,
    ) -> Result<TagInfo> {
        create_and_push(&self.publisher, root, request, credentials)
    }
}
