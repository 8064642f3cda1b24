use crate::types::ReleaseType;

const PR_TITLE_PREFIX: &str = "BUMP!";

/// Names derived from a package short name and the version it is bumped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpNames {
    pub branch: String,
    pub tag: String,
    pub commit_message: String,
    name_no_scope: String,
    next_version: String,
}

impl BumpNames {
    #[must_use]
    pub fn new(name_no_scope: &str, next_version: &str) -> Self {
        Self {
            branch: format!("bump/{name_no_scope}-v{next_version}"),
            tag: release_tag(name_no_scope, next_version),
            commit_message: format!("bump! {name_no_scope}-v{next_version}"),
            name_no_scope: name_no_scope.to_string(),
            next_version: next_version.to_string(),
        }
    }

    /// The branch as seen through a remote-tracking ref, e.g. `origin/bump/x-v1.0.0`.
    #[must_use]
    pub fn remote_branch(&self, remote: &str) -> String {
        format!("{remote}/{}", self.branch)
    }

    #[must_use]
    pub fn pull_request_title(&self, release_type: ReleaseType) -> String {
        format!(
            "{PR_TITLE_PREFIX} {} v{} ({release_type})",
            self.name_no_scope, self.next_version
        )
    }
}

/// `<nameNoScope>/v<version>`, shared by the bump guard and the tag actions.
#[must_use]
pub fn release_tag(name_no_scope: &str, version: &str) -> String {
    format!("{name_no_scope}/v{version}")
}

/// Markdown description of a bump pull request.
#[derive(Debug, Clone)]
pub struct PullRequestBody<'a> {
    pub package_name: &'a str,
    pub release_type: ReleaseType,
    pub next_version: &'a str,
    pub previous_version: &'a str,
}

impl PullRequestBody<'_> {
    #[must_use]
    pub fn render(&self) -> String {
        [
            format!("### :arrow_double_up: {}", self.package_name),
            format!("**Release type:** `{}`", self.release_type),
            format!("**Next version:** `{}`", self.next_version),
            format!("**Previous version:** `{}`", self.previous_version),
            "\n\n\n_Pull request created by bumpbot_ :godmode:".to_string(),
        ]
        .join("\n\n")
    }
}
