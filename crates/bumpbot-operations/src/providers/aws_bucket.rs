use bumpbot_git::TagInfo;
use tracing::warn;

use crate::operations::{PublishTarget, WorkspaceFacts};
use crate::traits::TargetPublisher;
use crate::{OperationError, Result};

/// Bucket uploads are not wired up yet. Publishing fails after the release
/// tag has been pushed.
#[derive(Debug, Default, Clone, Copy)]
pub struct AwsBucketPublisher;

impl TargetPublisher for AwsBucketPublisher {
    fn publish(&self, facts: &WorkspaceFacts, tag: &TagInfo) -> Result<()> {
        warn!(
            package = %facts.package_name,
            tag = %tag.name,
            "bucket upload skipped"
        );
        Err(OperationError::PublishNotImplemented {
            target: PublishTarget::AwsBucket.to_string(),
        })
    }
}
