use bumpbot_core::{BumpResponse, PackageEntry};

use crate::Result;

#[derive(Debug, Clone)]
pub enum BumpSelection {
    Selected(BumpResponse),
    Cancelled,
}

pub trait InteractionProvider: Send + Sync {
    /// Asks for base branch, remote, package and release type in that order.
    ///
    /// # Errors
    ///
    /// Returns an error if the interaction cannot be completed.
    fn prompt_bump(&self, packages: &[PackageEntry]) -> Result<BumpSelection>;
}
