mod git_provider;
mod host_provider;
mod interaction;
mod output_sink;
mod package_manager;
mod release_git;
mod target_publisher;
mod workspace_provider;

pub use git_provider::GitProvider;
pub use host_provider::{BUMP_LABEL, HostProvider, Label, PullRequest};
pub use interaction::{BumpSelection, InteractionProvider};
pub use output_sink::OutputSink;
pub use package_manager::PackageManager;
pub use release_git::{CommitInspector, TagPublisher, TagRequest};
pub use target_publisher::TargetPublisher;
pub use workspace_provider::WorkspaceProvider;
