use bumpbot_operations::operations::{WorkspaceInfoOperation, WorkspaceOutput};
use bumpbot_operations::providers::{FileSystemWorkspaceProvider, Git2Provider};

use super::{StepOutputs, WorkspaceInfoArgs};
use crate::error::Result;

pub(crate) fn run(args: WorkspaceInfoArgs) -> Result<()> {
    let sha = args.commit.sha()?;
    let operation = WorkspaceInfoOperation::new(
        Git2Provider::default(),
        FileSystemWorkspaceProvider::new(),
        StepOutputs::new(args.output_file),
    );

    let facts = operation.execute(&args.commit.workspace, sha, &WorkspaceOutput::ALL)?;
    tracing::info!(
        "Reported {} v{} from {}",
        facts.package_name,
        facts.package_version,
        facts.workspace_dir.display()
    );
    Ok(())
}
