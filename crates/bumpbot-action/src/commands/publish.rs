use bumpbot_operations::operations::PublishOperation;
use bumpbot_operations::providers::{AwsBucketPublisher, FileSystemWorkspaceProvider, Git2Provider};
use tracing::info;

use super::PublishArgs;
use crate::error::Result;

pub(crate) fn run(args: PublishArgs) -> Result<()> {
    let sha = args.commit.sha()?.to_string();
    let credentials = args.remote.into_credentials()?;
    let operation = PublishOperation::new(
        Git2Provider::default(),
        FileSystemWorkspaceProvider::new(),
        AwsBucketPublisher,
    );

    let output = operation.execute(&args.commit.workspace, &sha, &credentials)?;
    info!("Published {} to {}", output.tag.name, output.target);
    Ok(())
}
