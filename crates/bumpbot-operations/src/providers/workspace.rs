use std::path::Path;

use bumpbot_core::PackageEntry;
use bumpbot_workspace::Descriptor;

use crate::Result;
use crate::traits::WorkspaceProvider;

pub struct FileSystemWorkspaceProvider;

impl FileSystemWorkspaceProvider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemWorkspaceProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkspaceProvider for FileSystemWorkspaceProvider {
    fn discover_packages(&self, root: &Path) -> Result<Vec<PackageEntry>> {
        Ok(bumpbot_workspace::discover_packages(root)?)
    }

    fn read_descriptor(&self, path: &Path) -> Result<Descriptor> {
        Ok(bumpbot_workspace::read_descriptor(path)?)
    }
}
