use std::path::{Path, PathBuf};

use bumpbot_core::{name_no_scope, release_tag};
use bumpbot_workspace::DESCRIPTOR_FILE;
use tracing::info;

use crate::traits::{CommitInspector, OutputSink, WorkspaceProvider};
use crate::{OperationError, Result};

/// What a release commit says about the package it bumped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceFacts {
    pub package_name: String,
    pub package_version: String,
    pub workspace_name: String,
    pub workspace_dir: PathBuf,
    pub workspace_tag: String,
    pub publish_target: Option<String>,
    pub descriptor: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceOutput {
    PackageName,
    PackageVersion,
    WorkspaceName,
    WorkspaceDir,
    WorkspaceTag,
    PublishTarget,
}

impl WorkspaceOutput {
    pub const ALL: [Self; 6] = [
        Self::PackageName,
        Self::PackageVersion,
        Self::WorkspaceName,
        Self::WorkspaceDir,
        Self::WorkspaceTag,
        Self::PublishTarget,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::PackageName => "package-name",
            Self::PackageVersion => "package-version",
            Self::WorkspaceName => "workspace-name",
            Self::WorkspaceDir => "workspace-dir",
            Self::WorkspaceTag => "workspace-tag",
            Self::PublishTarget => "publish-target",
        }
    }
}

impl WorkspaceFacts {
    #[must_use]
    pub fn value(&self, output: WorkspaceOutput) -> String {
        match output {
            WorkspaceOutput::PackageName => self.package_name.clone(),
            WorkspaceOutput::PackageVersion => self.package_version.clone(),
            WorkspaceOutput::WorkspaceName => self.workspace_name.clone(),
            WorkspaceOutput::WorkspaceDir => self.workspace_dir.display().to_string(),
            WorkspaceOutput::WorkspaceTag => self.workspace_tag.clone(),
            WorkspaceOutput::PublishTarget => self.publish_target.clone().unwrap_or_default(),
        }
    }
}

/// Finds the single descriptor changed by `commit` and reads it.
///
/// # Errors
///
/// Returns [`OperationError::NoDescriptorChanged`] or
/// [`OperationError::MultipleDescriptorsChanged`] unless exactly one
/// `package.json` changed, or an error if the commit or descriptor cannot be
/// read.
pub fn resolve_workspace_facts<C, W>(
    inspector: &C,
    workspace: &W,
    root: &Path,
    commit: &str,
) -> Result<WorkspaceFacts>
where
    C: CommitInspector + ?Sized,
    W: WorkspaceProvider + ?Sized,
{
    info!("Running git diff for SHA {commit}");
    let descriptors: Vec<PathBuf> = inspector
        .files_changed_in_commit(root, commit)?
        .into_iter()
        .filter(|path| path.to_string_lossy().ends_with(DESCRIPTOR_FILE))
        .collect();

    let relative = match descriptors.as_slice() {
        [] => {
            return Err(OperationError::NoDescriptorChanged {
                commit: commit.to_string(),
            });
        }
        [single] => single,
        many => {
            return Err(OperationError::MultipleDescriptorsChanged {
                commit: commit.to_string(),
                count: many.len(),
            });
        }
    };

    let descriptor_path = root.join(relative);
    info!("package.json changed in this commit: {}", descriptor_path.display());
    let descriptor = workspace.read_descriptor(&descriptor_path)?;

    let workspace_name = name_no_scope(&descriptor.name).to_string();
    let workspace_dir = match relative.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => root.join(parent),
        _ => root.to_path_buf(),
    };
    let workspace_tag = release_tag(&workspace_name, &descriptor.version);

    Ok(WorkspaceFacts {
        package_name: descriptor.name,
        package_version: descriptor.version,
        workspace_name,
        workspace_dir,
        workspace_tag,
        publish_target: descriptor.meta.publish_target,
        descriptor: descriptor_path,
    })
}

pub struct WorkspaceInfoOperation<C, W, O> {
    inspector: C,
    workspace: W,
    sink: O,
}

impl<C, W, O> WorkspaceInfoOperation<C, W, O>
where
    C: CommitInspector,
    W: WorkspaceProvider,
    O: OutputSink,
{
    pub fn new(inspector: C, workspace: W, sink: O) -> Self {
        Self {
            inspector,
            workspace,
            sink,
        }
    }

    /// Resolves the facts for `commit`, then emits the requested outputs.
    ///
    /// Nothing is emitted unless every fact resolves.
    ///
    /// # Errors
    ///
    /// Returns an error if resolution fails or an output cannot be written.
    pub fn execute(
        &self,
        root: &Path,
        commit: &str,
        outputs: &[WorkspaceOutput],
    ) -> Result<WorkspaceFacts> {
        let facts = resolve_workspace_facts(&self.inspector, &self.workspace, root, commit)?;
        for output in outputs {
            self.sink.set_output(output.key(), &facts.value(*output))?;
        }
        Ok(facts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{CallLog, MockOutputSink, MockReleaseGit, MockWorkspaceProvider};
    use bumpbot_workspace::{Descriptor, DescriptorMeta};

    const ROOT: &str = "/work";
    const SHA: &str = "3f2a1b9";

    fn widget_descriptor(publish_target: Option<&str>) -> Descriptor {
        Descriptor {
            name: "@acme/widget".to_string(),
            version: "1.3.0".to_string(),
            description: None,
            workspaces: None,
            meta: DescriptorMeta {
                publish_target: publish_target.map(String::from),
            },
        }
    }

    fn workspace() -> MockWorkspaceProvider {
        MockWorkspaceProvider::new().with_descriptor(
            "/work/packages/widget/package.json",
            widget_descriptor(Some("AWS_BUCKET")),
        )
    }

    #[test]
    fn resolves_facts_for_single_changed_descriptor() -> anyhow::Result<()> {
        let log = CallLog::new();
        let git = MockReleaseGit::new(log.clone())
            .with_changed("README.md")
            .with_changed("packages/widget/package.json");

        let facts = resolve_workspace_facts(&git, &workspace(), Path::new(ROOT), SHA)?;

        assert_eq!(
            facts,
            WorkspaceFacts {
                package_name: "@acme/widget".to_string(),
                package_version: "1.3.0".to_string(),
                workspace_name: "widget".to_string(),
                workspace_dir: PathBuf::from("/work/packages/widget"),
                workspace_tag: "widget/v1.3.0".to_string(),
                publish_target: Some("AWS_BUCKET".to_string()),
                descriptor: PathBuf::from("/work/packages/widget/package.json"),
            }
        );

        Ok(())
    }

    #[test]
    fn root_descriptor_maps_to_root_directory() -> anyhow::Result<()> {
        let log = CallLog::new();
        let git = MockReleaseGit::new(log.clone()).with_changed("package.json");
        let workspace = MockWorkspaceProvider::new()
            .with_descriptor("/work/package.json", widget_descriptor(None));

        let facts = resolve_workspace_facts(&git, &workspace, Path::new(ROOT), SHA)?;

        assert_eq!(facts.value(WorkspaceOutput::WorkspaceDir), "/work");
        assert_eq!(facts.value(WorkspaceOutput::PublishTarget), "");

        Ok(())
    }

    #[test]
    fn no_changed_descriptor_is_an_error() {
        let log = CallLog::new();
        let git = MockReleaseGit::new(log.clone()).with_changed("src/index.ts");

        let result = resolve_workspace_facts(&git, &workspace(), Path::new(ROOT), SHA);

        assert!(matches!(
            result,
            Err(OperationError::NoDescriptorChanged { ref commit }) if commit == SHA
        ));
    }

    #[test]
    fn several_changed_descriptors_are_an_error() {
        let log = CallLog::new();
        let git = MockReleaseGit::new(log.clone())
            .with_changed("packages/widget/package.json")
            .with_changed("packages/gadget/package.json");

        let result = resolve_workspace_facts(&git, &workspace(), Path::new(ROOT), SHA);

        assert!(matches!(
            result,
            Err(OperationError::MultipleDescriptorsChanged { count: 2, .. })
        ));
    }

    #[test]
    fn emits_outputs_in_requested_order() -> anyhow::Result<()> {
        let log = CallLog::new();
        let git = MockReleaseGit::new(log.clone()).with_changed("packages/widget/package.json");
        let op = WorkspaceInfoOperation::new(git, workspace(), MockOutputSink::new(log.clone()));

        op.execute(Path::new(ROOT), SHA, &WorkspaceOutput::ALL)?;

        assert_eq!(
            op.sink.outputs(),
            vec![
                ("package-name".to_string(), "@acme/widget".to_string()),
                ("package-version".to_string(), "1.3.0".to_string()),
                ("workspace-name".to_string(), "widget".to_string()),
                ("workspace-dir".to_string(), "/work/packages/widget".to_string()),
                ("workspace-tag".to_string(), "widget/v1.3.0".to_string()),
                ("publish-target".to_string(), "AWS_BUCKET".to_string()),
            ]
        );

        Ok(())
    }

    #[test]
    fn nothing_is_emitted_when_descriptor_cannot_be_read() {
        let log = CallLog::new();
        let git = MockReleaseGit::new(log.clone()).with_changed("packages/gadget/package.json");
        let op = WorkspaceInfoOperation::new(git, workspace(), MockOutputSink::new(log.clone()));

        let result = op.execute(Path::new(ROOT), SHA, &WorkspaceOutput::ALL);

        assert!(matches!(result, Err(OperationError::Workspace(_))));
        assert!(op.sink.outputs().is_empty());
    }

    #[test]
    fn subset_of_outputs_can_be_requested() -> anyhow::Result<()> {
        let log = CallLog::new();
        let git = MockReleaseGit::new(log.clone()).with_changed("packages/widget/package.json");
        let op = WorkspaceInfoOperation::new(git, workspace(), MockOutputSink::new(log.clone()));

        op.execute(Path::new(ROOT), SHA, &[WorkspaceOutput::WorkspaceTag])?;

        assert_eq!(
            op.sink.outputs(),
            vec![("workspace-tag".to_string(), "widget/v1.3.0".to_string())]
        );

        Ok(())
    }
}
