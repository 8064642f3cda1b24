use crate::{Committer, GitError, Result, TagInfo};

use super::Repository;

impl Repository {
    /// Creates an annotated tag on `target` with `committer` as the tagger.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::TagExists`] if the tag is already present, or an
    /// error if the target cannot be resolved.
    pub fn create_annotated_tag(
        &self,
        name: &str,
        target: &str,
        message: &str,
        committer: &Committer,
    ) -> Result<TagInfo> {
        if self
            .inner
            .find_reference(&format!("refs/tags/{name}"))
            .is_ok()
        {
            return Err(GitError::TagExists {
                name: name.to_string(),
            });
        }

        let commit = self.resolve_commit(target)?;
        let sig = git2::Signature::now(&committer.name, &committer.email)?;

        self.inner
            .tag(name, commit.as_object(), &sig, message, false)?;

        Ok(TagInfo {
            name: name.to_string(),
            target_sha: commit.id().to_string(),
        })
    }
}
