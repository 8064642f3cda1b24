use std::path::Path;

use bumpbot_core::ReleaseType;
use bumpbot_process::{Invocation, ProcessRunner, SystemProcessRunner};

use crate::Result;
use crate::traits::PackageManager;

/// [`PackageManager`] backed by `npm version`.
pub struct NpmProvider<R = SystemProcessRunner> {
    runner: R,
}

impl<R: ProcessRunner> NpmProvider<R> {
    #[must_use]
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl Default for NpmProvider {
    fn default() -> Self {
        Self::new(SystemProcessRunner::new())
    }
}

impl<R: ProcessRunner> PackageManager for NpmProvider<R> {
    fn increment_version(&self, package_dir: &Path, release_type: ReleaseType) -> Result<()> {
        let invocation = Invocation::new("npm")
            .args(["version", "--git-tag-version=false", release_type.as_str()])
            .current_dir(package_dir);
        self.runner.run(&invocation)?;
        Ok(())
    }
}
