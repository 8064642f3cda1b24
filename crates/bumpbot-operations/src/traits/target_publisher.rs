use bumpbot_git::TagInfo;

use crate::Result;
use crate::operations::WorkspaceFacts;

/// Ships the artifacts of a tagged release to one destination.
pub trait TargetPublisher: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if publishing fails.
    fn publish(&self, facts: &WorkspaceFacts, tag: &TagInfo) -> Result<()>;
}
