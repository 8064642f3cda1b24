mod bump;
mod publish;
mod tag;
mod title;
mod workspace_info;

pub use bump::{BumpOperation, BumpOutcome, BumpOutput, BumpRequest};
pub use publish::{PublishOperation, PublishOutput, PublishTarget};
pub use tag::{
    RELEASE_COMMITTER_EMAIL, RELEASE_COMMITTER_NAME, RemoteCredentials, TagInput, TagOperation,
    resolve_tag_request,
};
pub use title::{TitleCheck, TitleRule};
pub use workspace_info::{
    WorkspaceFacts, WorkspaceInfoOperation, WorkspaceOutput, resolve_workspace_facts,
};
