use bumpbot_operations::operations::TitleCheck;

use super::EnforceTitleArgs;
use crate::error::Result;

pub(crate) fn run(args: &EnforceTitleArgs) -> Result<()> {
    TitleCheck::pull_request_default()?.enforce(&args.title)?;
    Ok(())
}
