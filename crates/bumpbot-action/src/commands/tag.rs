use bumpbot_git::Committer;
use bumpbot_operations::operations::{TagInput, TagOperation, resolve_tag_request};
use bumpbot_operations::providers::{FileSystemWorkspaceProvider, Git2Provider};
use tracing::info;

use super::{TagArgs, non_empty};
use crate::error::Result;

pub(crate) fn run(args: TagArgs) -> Result<()> {
    let git = Git2Provider::default();
    let root = args.commit.workspace.clone();
    let input = TagInput {
        name: args.tag_name,
        message: args.tag_message,
        target: args.commit.sha()?.to_string(),
        committer: Committer::new(
            non_empty("INPUT_COMMITTER_NAME", &args.committer_name)?,
            non_empty("INPUT_COMMITTER_EMAIL", &args.committer_email)?,
        ),
    };

    let request = resolve_tag_request(&git, &FileSystemWorkspaceProvider::new(), &root, input)?;
    let credentials = args.remote.into_credentials()?;
    let tag = TagOperation::new(git).execute(&root, &request, &credentials)?;
    info!("Tagged {} as {}", tag.target_sha, tag.name);
    Ok(())
}
