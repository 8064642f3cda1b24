use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("git operation failed")]
    Git(#[from] git2::Error),

    #[error("not a git repository: '{path}'")]
    NotARepository { path: PathBuf },

    #[error("failed to resolve reference '{refspec}'")]
    RefNotFound { refspec: String },

    #[error("commit '{commit}' has no parent to diff against; check out with a fetch depth of at least 2")]
    NoParent { commit: String },

    #[error("tag '{name}' already exists")]
    TagExists { name: String },

    #[error("diff delta has no file path")]
    MissingDeltaPath,
}
