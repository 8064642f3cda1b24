use std::path::Path;

use bumpbot_core::{BumpNames, BumpResponse, PackageEntry, PullRequestBody, ReleaseType};
use tracing::{debug, info};

use super::compensation::Compensations;
use crate::traits::{
    BUMP_LABEL, BumpSelection, GitProvider, HostProvider, InteractionProvider, PackageManager,
    PullRequest, WorkspaceProvider,
};
use crate::{OperationError, Result};

/// Everything needed to bump one package once prompting is done.
#[derive(Debug, Clone)]
pub struct BumpRequest {
    pub base: String,
    pub remote: String,
    pub release_type: ReleaseType,
    pub package: PackageEntry,
}

impl BumpRequest {
    #[must_use]
    pub fn new(response: BumpResponse, package: PackageEntry) -> Self {
        Self {
            base: response.base,
            remote: response.remote,
            release_type: response.release_type,
            package,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOutput {
    pub package_name: String,
    pub previous_version: String,
    pub next_version: String,
    pub branch: String,
    pub tag: String,
    pub pull_request_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BumpOutcome {
    Bumped(BumpOutput),
    Cancelled,
}

pub struct BumpOperation<G, H, P, W, I> {
    git: G,
    host: H,
    package_manager: P,
    workspace: W,
    interaction: I,
}

impl<G, H, P, W, I> BumpOperation<G, H, P, W, I>
where
    G: GitProvider,
    H: HostProvider,
    P: PackageManager,
    W: WorkspaceProvider,
    I: InteractionProvider,
{
    pub fn new(git: G, host: H, package_manager: P, workspace: W, interaction: I) -> Self {
        Self {
            git,
            host,
            package_manager,
            workspace,
            interaction,
        }
    }

    /// Fails when the host CLI is missing or the working copy is dirty.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::GithubCliMissing`] or
    /// [`OperationError::DirtyWorkingTree`], or a git error if the status
    /// cannot be read.
    pub fn check_prerequisites(&self, workdir: &Path) -> Result<()> {
        if !self.host.is_cli_installed() {
            return Err(OperationError::GithubCliMissing);
        }
        if self.git.has_uncommitted_changes(workdir)? {
            return Err(OperationError::DirtyWorkingTree);
        }
        Ok(())
    }

    /// Checks prerequisites, discovers packages, prompts, then bumps the
    /// selected package.
    ///
    /// # Errors
    ///
    /// Returns an error if any prerequisite fails, discovery fails, the
    /// selected package is unknown, or the bump itself fails.
    pub fn execute(&self, workdir: &Path) -> Result<BumpOutcome> {
        self.check_prerequisites(workdir)?;

        let packages = self.workspace.discover_packages(workdir)?;
        debug!(count = packages.len(), "discovered packages");

        let response = match self.interaction.prompt_bump(&packages)? {
            BumpSelection::Selected(response) => response,
            BumpSelection::Cancelled => return Ok(BumpOutcome::Cancelled),
        };

        let Some(package) = packages
            .iter()
            .find(|p| p.name == response.package_name)
            .cloned()
        else {
            let available = packages
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(OperationError::UnknownPackage {
                name: response.package_name,
                available,
            });
        };

        info!("Starting bump");
        let output = self.bump(workdir, &BumpRequest::new(response, package))?;
        Ok(BumpOutcome::Bumped(output))
    }

    /// Syncs the base branch, increments the version, and opens a pull request
    /// from a fresh bump branch.
    ///
    /// If the bump branch or release tag already exists, the working copy is
    /// reset and the conflict is returned. Failures after the bump commit
    /// leave the repository as it is.
    ///
    /// # Errors
    ///
    /// Returns a conflict error for an existing branch or tag, or the first
    /// failing git, npm, or gh error.
    pub fn bump(&self, workdir: &Path, request: &BumpRequest) -> Result<BumpOutput> {
        let package = &request.package;

        info!(
            "Getting latest from \"{}/{}\"...",
            request.remote, request.base
        );
        self.git.fetch_prune(workdir)?;
        self.git.checkout(workdir, &request.base)?;
        self.git.pull(workdir, &request.remote, &request.base)?;

        info!(
            "Running 'npm version' with \"{}\" on {}",
            request.release_type, package.name
        );
        self.package_manager
            .increment_version(&package.directory, request.release_type)?;

        let previous_version = package.version.clone();
        let next_version = self.workspace.read_descriptor(&package.file)?.version;
        info!("Bump version: {previous_version} -> {next_version}");

        let names = BumpNames::new(&package.name_no_scope, &next_version);

        let mut compensations = Compensations::new();
        compensations.push(
            "increment_version",
            "reset local repository",
            || {
                info!("Resetting changes to local repository.");
                self.git.reset_hard(workdir)
            },
        );
        if let Err(err) = self.ensure_unclaimed(workdir, request, &names, &next_version) {
            let failures = compensations.unwind();
            debug!(failed = failures.len(), "rollback finished");
            return Err(err);
        }
        compensations.release();

        self.publish_branch(workdir, request, &names)?;

        info!("Creating pull request label");
        self.host.ensure_label(workdir, &BUMP_LABEL)?;

        let pull_request_title = names.pull_request_title(request.release_type);
        let body = PullRequestBody {
            package_name: &package.name,
            release_type: request.release_type,
            next_version: &next_version,
            previous_version: &previous_version,
        }
        .render();
        self.host.create_pull_request(
            workdir,
            &PullRequest {
                base: request.base.clone(),
                head: names.branch.clone(),
                title: pull_request_title.clone(),
                label: BUMP_LABEL.name.to_string(),
                body,
            },
        )?;

        Ok(BumpOutput {
            package_name: package.name.clone(),
            previous_version,
            next_version,
            branch: names.branch,
            tag: names.tag,
            pull_request_title,
        })
    }

    fn ensure_unclaimed(
        &self,
        workdir: &Path,
        request: &BumpRequest,
        names: &BumpNames,
        next_version: &str,
    ) -> Result<()> {
        let package = &request.package.name_no_scope;

        if self
            .git
            .ref_exists(workdir, &names.remote_branch(&request.remote))?
        {
            info!("A branch with the same name already exists on remote!");
            return Err(OperationError::RemoteBranchExists {
                branch: names.branch.clone(),
                remote: request.remote.clone(),
                package: package.clone(),
                version: next_version.to_string(),
            });
        }

        if self.git.ref_exists(workdir, &names.branch)? {
            info!("A branch with the same name already exists in local repository!");
            return Err(OperationError::LocalBranchExists {
                branch: names.branch.clone(),
                package: package.clone(),
                version: next_version.to_string(),
            });
        }

        if self
            .git
            .remote_tag_exists(workdir, &request.remote, &names.tag)?
        {
            info!("A tag matching this version exists on remote!");
            return Err(OperationError::RemoteTagExists {
                tag: names.tag.clone(),
                remote: request.remote.clone(),
                package: package.clone(),
                version: next_version.to_string(),
            });
        }

        Ok(())
    }

    fn publish_branch(&self, workdir: &Path, request: &BumpRequest, names: &BumpNames) -> Result<()> {
        info!("Creating local branch \"{}\"", names.branch);
        self.git.create_branch(workdir, &names.branch)?;
        self.git.stage_all(workdir)?;
        self.git.commit(workdir, &names.commit_message)?;

        info!("Pushing branch to {}", request.remote);
        self.git
            .push_upstream(workdir, &request.remote, &names.branch)?;
        self.git.pull_current(workdir)?;

        info!("Cleaning up");
        self.git.checkout(workdir, &request.base)?;
        self.git.delete_branch(workdir, &names.branch)?;
        Ok(())
    }
}
