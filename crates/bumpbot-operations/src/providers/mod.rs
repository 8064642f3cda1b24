mod aws_bucket;
mod git;
mod git_cli;
mod github_cli;
mod npm;
mod output;
mod workspace;

pub use aws_bucket::AwsBucketPublisher;
pub use git::Git2Provider;
pub use git_cli::GitCliProvider;
pub use github_cli::GithubCliProvider;
pub use npm::NpmProvider;
pub use output::{GithubOutputFile, StdoutOutputSink};
pub use workspace::FileSystemWorkspaceProvider;
