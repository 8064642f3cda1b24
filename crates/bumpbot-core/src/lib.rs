mod names;
pub mod types;

pub use names::{BumpNames, PullRequestBody, release_tag};
pub use types::*;
