use std::path::Path;

use bumpbot_core::PackageEntry;
use bumpbot_workspace::Descriptor;

use crate::Result;

pub trait WorkspaceProvider: Send + Sync {
    /// Root package first, then workspace members in pattern order.
    ///
    /// # Errors
    ///
    /// Returns an error if the root or any member descriptor is invalid.
    fn discover_packages(&self, root: &Path) -> Result<Vec<PackageEntry>>;

    /// # Errors
    ///
    /// Returns an error if the descriptor cannot be read or is invalid.
    fn read_descriptor(&self, path: &Path) -> Result<Descriptor>;
}
