use std::path::PathBuf;

use bumpbot_operations::OperationError;
use thiserror::Error;

use crate::environment::NonInteractiveReason;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error("failed to determine current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error("working directory does not exist: {}", .path.display())]
    WorkdirNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("interactive mode requires a terminal ({reason})")]
    NotATty { reason: NonInteractiveReason },

    #[error("failed to install interrupt handler")]
    SignalHandler(#[from] ctrlc::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
