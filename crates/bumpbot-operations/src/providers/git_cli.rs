use std::path::Path;

use bumpbot_process::{Invocation, ProcessOutput, ProcessRunner, SystemProcessRunner};
use tracing::{debug, warn};

use crate::Result;
use crate::traits::GitProvider;

/// [`GitProvider`] backed by the `git` executable.
pub struct GitCliProvider<R = SystemProcessRunner> {
    runner: R,
}

impl<R: ProcessRunner> GitCliProvider<R> {
    #[must_use]
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    fn git<const N: usize>(&self, repo: &Path, args: [&str; N]) -> Result<ProcessOutput> {
        let invocation = Invocation::new("git").args(args).current_dir(repo);
        Ok(self.runner.run(&invocation)?)
    }
}

impl Default for GitCliProvider {
    fn default() -> Self {
        Self::new(SystemProcessRunner::new())
    }
}

impl<R: ProcessRunner> GitProvider for GitCliProvider<R> {
    fn fetch_prune(&self, repo: &Path) -> Result<()> {
        self.git(repo, ["fetch", "--prune"])?;
        Ok(())
    }

    fn checkout(&self, repo: &Path, branch: &str) -> Result<()> {
        self.git(repo, ["checkout", branch])?;
        Ok(())
    }

    fn pull(&self, repo: &Path, remote: &str, branch: &str) -> Result<()> {
        let invocation = Invocation::new("git")
            .args(["pull", remote, branch])
            .current_dir(repo)
            .inherit_stdio();
        self.runner.run(&invocation)?;
        Ok(())
    }

    fn pull_current(&self, repo: &Path) -> Result<()> {
        self.git(repo, ["pull"])?;
        Ok(())
    }

    fn has_uncommitted_changes(&self, repo: &Path) -> Result<bool> {
        let output = self.git(repo, ["status", "-s"])?;
        Ok(!output.stdout.is_empty())
    }

    fn ref_exists(&self, repo: &Path, refname: &str) -> Result<bool> {
        match self.git(repo, ["rev-parse", "--verify", refname]) {
            Ok(output) => Ok(!output.stdout.is_empty()),
            Err(err) => {
                debug!(refname, error = %err, "ref does not resolve");
                Ok(false)
            }
        }
    }

    fn remote_tag_exists(&self, repo: &Path, remote: &str, tag: &str) -> Result<bool> {
        let tag_ref = format!("refs/tags/{tag}");
        match self.git(repo, ["ls-remote", remote, tag_ref.as_str()]) {
            Ok(output) => Ok(!output.stdout.is_empty()),
            Err(err) => {
                warn!(
                    remote,
                    tag,
                    error = %err,
                    "could not query remote tags; assuming the tag does not exist"
                );
                Ok(false)
            }
        }
    }

    fn create_branch(&self, repo: &Path, branch: &str) -> Result<()> {
        self.git(repo, ["checkout", "-b", branch])?;
        Ok(())
    }

    fn stage_all(&self, repo: &Path) -> Result<()> {
        self.git(repo, ["add", "--all"])?;
        Ok(())
    }

    fn commit(&self, repo: &Path, message: &str) -> Result<()> {
        self.git(repo, ["commit", "-m", message])?;
        Ok(())
    }

    fn push_upstream(&self, repo: &Path, remote: &str, branch: &str) -> Result<()> {
        self.git(repo, ["push", "-u", remote, branch])?;
        Ok(())
    }

    fn delete_branch(&self, repo: &Path, branch: &str) -> Result<()> {
        self.git(repo, ["branch", "-d", branch])?;
        Ok(())
    }

    fn reset_hard(&self, repo: &Path) -> Result<()> {
        self.git(repo, ["reset", "--hard"])?;
        Ok(())
    }
}
