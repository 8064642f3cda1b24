use std::path::Path;

use bumpbot_process::{Invocation, ProcessRunner, SystemProcessRunner};
use tracing::debug;

use crate::Result;
use crate::traits::{HostProvider, Label, PullRequest};

/// [`HostProvider`] backed by the `gh` executable.
pub struct GithubCliProvider<R = SystemProcessRunner> {
    runner: R,
}

impl<R: ProcessRunner> GithubCliProvider<R> {
    #[must_use]
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl Default for GithubCliProvider {
    fn default() -> Self {
        Self::new(SystemProcessRunner::new())
    }
}

impl<R: ProcessRunner> HostProvider for GithubCliProvider<R> {
    fn is_cli_installed(&self) -> bool {
        match self.runner.run(&Invocation::new("gh").arg("--version")) {
            Ok(output) => output.stderr.is_empty(),
            Err(err) => {
                debug!(error = %err, "gh --version failed");
                false
            }
        }
    }

    fn ensure_label(&self, repo: &Path, label: &Label) -> Result<()> {
        let invocation = Invocation::new("gh")
            .args(["label", "create", label.name])
            .args(["--description", label.description])
            .args(["--color", label.color])
            .arg("--force")
            .current_dir(repo);
        self.runner.run(&invocation)?;
        Ok(())
    }

    fn create_pull_request(&self, repo: &Path, pull_request: &PullRequest) -> Result<()> {
        let invocation = Invocation::new("gh")
            .args(["pr", "create"])
            .args(["--base", pull_request.base.as_str()])
            .args(["--head", pull_request.head.as_str()])
            .args(["--title", pull_request.title.as_str()])
            .args(["--label", pull_request.label.as_str()])
            .args(["--body", pull_request.body.as_str()])
            .current_dir(repo)
            .inherit_stdio();
        self.runner.run(&invocation)?;
        Ok(())
    }
}
