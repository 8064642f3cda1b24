use bumpbot_operations::OperationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error("{name} must not be empty")]
    EmptyInput { name: &'static str },
}

pub type Result<T> = std::result::Result<T, ActionError>;
