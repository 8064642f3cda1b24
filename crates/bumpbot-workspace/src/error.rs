use std::path::PathBuf;

use thiserror::Error;

/// Why a parsed descriptor was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DescriptorProblem {
    #[error("package.json is not a JSON object")]
    NotAnObject,

    #[error("package.json is missing a \"version\" attribute")]
    MissingVersion,

    #[error("package.json \"version\" must be a string")]
    VersionNotString,

    #[error("package.json is missing a \"name\" attribute")]
    MissingName,

    #[error("package.json \"name\" attribute must be a string")]
    NameNotString,
}

#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("package.json does not exist in directory: {}", .path.display())]
    DescriptorNotFound { path: PathBuf },

    #[error("package.json could not be read: {}", .path.display())]
    DescriptorRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("package.json could not be parsed: {}", .path.display())]
    DescriptorParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid package.json: {}", .path.display())]
    InvalidDescriptor {
        path: PathBuf,
        #[source]
        problem: DescriptorProblem,
    },

    #[error("path is not valid UTF-8: {}", .path.display())]
    NonUtf8Path { path: PathBuf },

    #[error("failed to expand workspace pattern '{pattern}'")]
    GlobPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("glob iteration error")]
    GlobIteration(#[from] glob::GlobError),
}
