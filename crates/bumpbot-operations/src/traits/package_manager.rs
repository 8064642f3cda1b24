use std::path::Path;

use bumpbot_core::ReleaseType;

use crate::Result;

pub trait PackageManager: Send + Sync {
    /// Increments the version in the descriptor under `package_dir` without
    /// committing or tagging.
    ///
    /// # Errors
    ///
    /// Returns an error if the package manager fails.
    fn increment_version(&self, package_dir: &Path, release_type: ReleaseType) -> Result<()>;
}
