use std::collections::{HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use bumpbot_core::{PackageEntry, ReleaseType};
use bumpbot_git::TagInfo;
use bumpbot_process::{Invocation, ProcessError, ProcessOutput, ProcessRunner};
use bumpbot_workspace::{Descriptor, DescriptorMeta, WorkspaceError};
use secrecy::SecretString;

use crate::traits::{
    BumpSelection, CommitInspector, GitProvider, HostProvider, InteractionProvider, Label,
    OutputSink, PackageManager, PullRequest, TagPublisher, TagRequest, WorkspaceProvider,
};
use crate::{OperationError, Result};

fn mock_failure(program: &str, call: &str) -> OperationError {
    OperationError::Process(ProcessError::Exit {
        program: program.to_string(),
        code: Some(1),
        stderr: format!("mock failure in {call}"),
    })
}

/// Call log shared between mocks so tests can assert on cross-provider order.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn record(&self, entry: impl Into<String>) {
        self.0.lock().expect("lock poisoned").push(entry.into());
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.0.lock().expect("lock poisoned").clone()
    }

    #[must_use]
    pub fn contains(&self, entry: &str) -> bool {
        self.entries().iter().any(|e| e == entry)
    }

    #[must_use]
    pub fn position(&self, entry: &str) -> Option<usize> {
        self.entries().iter().position(|e| e == entry)
    }
}

pub struct MockProcessRunner {
    responses: Mutex<VecDeque<std::result::Result<ProcessOutput, ProcessError>>>,
    invocations: Mutex<Vec<Invocation>>,
}

impl MockProcessRunner {
    #[must_use]
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            invocations: Mutex::new(Vec::new()),
        }
    }

    /// Queues the result for the next call. Calls beyond the queue succeed
    /// with empty output.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn respond(self, response: std::result::Result<ProcessOutput, ProcessError>) -> Self {
        self.responses
            .lock()
            .expect("lock poisoned")
            .push_back(response);
        self
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().expect("lock poisoned").clone()
    }

    #[must_use]
    pub fn commands(&self) -> Vec<String> {
        self.invocations()
            .iter()
            .map(Invocation::display_command)
            .collect()
    }
}

impl Default for MockProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessRunner for MockProcessRunner {
    fn run(&self, invocation: &Invocation) -> bumpbot_process::Result<ProcessOutput> {
        self.invocations
            .lock()
            .expect("lock poisoned")
            .push(invocation.clone());
        self.responses
            .lock()
            .expect("lock poisoned")
            .pop_front()
            .unwrap_or_else(|| Ok(ProcessOutput::default()))
    }
}

pub struct MockGitProvider {
    log: CallLog,
    existing_refs: HashSet<String>,
    remote_tags: HashSet<String>,
    dirty: bool,
    failing: HashSet<&'static str>,
}

impl MockGitProvider {
    #[must_use]
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            existing_refs: HashSet::new(),
            remote_tags: HashSet::new(),
            dirty: false,
            failing: HashSet::new(),
        }
    }

    #[must_use]
    pub fn with_ref(mut self, refname: &str) -> Self {
        self.existing_refs.insert(refname.to_string());
        self
    }

    #[must_use]
    pub fn with_remote_tag(mut self, tag: &str) -> Self {
        self.remote_tags.insert(tag.to_string());
        self
    }

    #[must_use]
    pub fn dirty(mut self) -> Self {
        self.dirty = true;
        self
    }

    /// Makes the named trait method fail after it is recorded.
    #[must_use]
    pub fn failing_on(mut self, call: &'static str) -> Self {
        self.failing.insert(call);
        self
    }

    fn call(&self, call: &'static str, entry: String) -> Result<()> {
        self.log.record(entry);
        if self.failing.contains(call) {
            return Err(mock_failure("git", call));
        }
        Ok(())
    }
}

impl GitProvider for MockGitProvider {
    fn fetch_prune(&self, _repo: &Path) -> Result<()> {
        self.call("fetch_prune", "git fetch --prune".to_string())
    }

    fn checkout(&self, _repo: &Path, branch: &str) -> Result<()> {
        self.call("checkout", format!("git checkout {branch}"))
    }

    fn pull(&self, _repo: &Path, remote: &str, branch: &str) -> Result<()> {
        self.call("pull", format!("git pull {remote} {branch}"))
    }

    fn pull_current(&self, _repo: &Path) -> Result<()> {
        self.call("pull_current", "git pull".to_string())
    }

    fn has_uncommitted_changes(&self, _repo: &Path) -> Result<bool> {
        self.call("has_uncommitted_changes", "git status -s".to_string())?;
        Ok(self.dirty)
    }

    fn ref_exists(&self, _repo: &Path, refname: &str) -> Result<bool> {
        self.call("ref_exists", format!("git rev-parse --verify {refname}"))?;
        Ok(self.existing_refs.contains(refname))
    }

    fn remote_tag_exists(&self, _repo: &Path, remote: &str, tag: &str) -> Result<bool> {
        self.call(
            "remote_tag_exists",
            format!("git ls-remote {remote} refs/tags/{tag}"),
        )?;
        Ok(self.remote_tags.contains(tag))
    }

    fn create_branch(&self, _repo: &Path, branch: &str) -> Result<()> {
        self.call("create_branch", format!("git checkout -b {branch}"))
    }

    fn stage_all(&self, _repo: &Path) -> Result<()> {
        self.call("stage_all", "git add --all".to_string())
    }

    fn commit(&self, _repo: &Path, message: &str) -> Result<()> {
        self.call("commit", format!("git commit -m {message}"))
    }

    fn push_upstream(&self, _repo: &Path, remote: &str, branch: &str) -> Result<()> {
        self.call("push_upstream", format!("git push -u {remote} {branch}"))
    }

    fn delete_branch(&self, _repo: &Path, branch: &str) -> Result<()> {
        self.call("delete_branch", format!("git branch -d {branch}"))
    }

    fn reset_hard(&self, _repo: &Path) -> Result<()> {
        self.call("reset_hard", "git reset --hard".to_string())
    }
}

pub struct MockHostProvider {
    log: CallLog,
    installed: bool,
    pull_requests: Mutex<Vec<PullRequest>>,
}

impl MockHostProvider {
    #[must_use]
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            installed: true,
            pull_requests: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn not_installed(mut self) -> Self {
        self.installed = false;
        self
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn pull_requests(&self) -> Vec<PullRequest> {
        self.pull_requests.lock().expect("lock poisoned").clone()
    }
}

impl HostProvider for MockHostProvider {
    fn is_cli_installed(&self) -> bool {
        self.log.record("gh --version");
        self.installed
    }

    fn ensure_label(&self, _repo: &Path, label: &Label) -> Result<()> {
        self.log.record(format!("gh label create {}", label.name));
        Ok(())
    }

    fn create_pull_request(&self, _repo: &Path, pull_request: &PullRequest) -> Result<()> {
        self.log
            .record(format!("gh pr create {}", pull_request.title));
        self.pull_requests
            .lock()
            .expect("lock poisoned")
            .push(pull_request.clone());
        Ok(())
    }
}

pub struct MockPackageManager {
    log: CallLog,
}

impl MockPackageManager {
    #[must_use]
    pub fn new(log: CallLog) -> Self {
        Self { log }
    }
}

impl PackageManager for MockPackageManager {
    fn increment_version(&self, package_dir: &Path, release_type: ReleaseType) -> Result<()> {
        self.log.record(format!(
            "npm version {release_type} in {}",
            package_dir.display()
        ));
        Ok(())
    }
}

/// Serves a fixed package list. `read_descriptor` returns the post-bump state
/// registered with [`MockWorkspaceProvider::with_package`].
pub struct MockWorkspaceProvider {
    packages: Vec<PackageEntry>,
    descriptors: HashMap<PathBuf, Descriptor>,
}

impl MockWorkspaceProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            packages: Vec::new(),
            descriptors: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_package(mut self, entry: PackageEntry, version_on_disk: &str) -> Self {
        self.descriptors.insert(
            entry.file.clone(),
            Descriptor {
                name: entry.name.clone(),
                version: version_on_disk.to_string(),
                description: entry.description.clone(),
                workspaces: None,
                meta: DescriptorMeta::default(),
            },
        );
        self.packages.push(entry);
        self
    }

    #[must_use]
    pub fn with_descriptor(mut self, path: impl Into<PathBuf>, descriptor: Descriptor) -> Self {
        self.descriptors.insert(path.into(), descriptor);
        self
    }
}

impl Default for MockWorkspaceProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkspaceProvider for MockWorkspaceProvider {
    fn discover_packages(&self, _root: &Path) -> Result<Vec<PackageEntry>> {
        Ok(self.packages.clone())
    }

    fn read_descriptor(&self, path: &Path) -> Result<Descriptor> {
        self.descriptors
            .get(path)
            .cloned()
            .ok_or_else(|| {
                WorkspaceError::DescriptorNotFound {
                    path: path.to_path_buf(),
                }
                .into()
            })
    }
}

pub struct MockInteractionProvider {
    log: CallLog,
    selection: BumpSelection,
}

impl MockInteractionProvider {
    #[must_use]
    pub fn new(log: CallLog, selection: BumpSelection) -> Self {
        Self { log, selection }
    }
}

impl InteractionProvider for MockInteractionProvider {
    fn prompt_bump(&self, packages: &[PackageEntry]) -> Result<BumpSelection> {
        self.log.record(format!("prompt with {} packages", packages.len()));
        Ok(self.selection.clone())
    }
}

/// Commit inspection and tagging without a repository.
pub struct MockReleaseGit {
    log: CallLog,
    changed: Vec<PathBuf>,
    fail_push: bool,
}

impl MockReleaseGit {
    #[must_use]
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            changed: Vec::new(),
            fail_push: false,
        }
    }

    #[must_use]
    pub fn with_changed(mut self, path: impl Into<PathBuf>) -> Self {
        self.changed.push(path.into());
        self
    }

    #[must_use]
    pub fn failing_push(mut self) -> Self {
        self.fail_push = true;
        self
    }
}

impl CommitInspector for MockReleaseGit {
    fn files_changed_in_commit(&self, _repo: &Path, commit: &str) -> Result<Vec<PathBuf>> {
        self.log.record(format!("diff {commit}"));
        Ok(self.changed.clone())
    }
}

impl TagPublisher for MockReleaseGit {
    fn create_annotated_tag(&self, _repo: &Path, request: &TagRequest) -> Result<TagInfo> {
        self.log.record(format!(
            "tag {} on {} by {} <{}>: {}",
            request.name,
            request.target,
            request.committer.name,
            request.committer.email,
            request.message
        ));
        Ok(TagInfo {
            name: request.name.clone(),
            target_sha: request.target.clone(),
        })
    }

    fn push_tag(&self, _repo: &Path, _remote_url: &SecretString, tag: &str) -> Result<()> {
        self.log.record(format!("push tag {tag}"));
        if self.fail_push {
            return Err(mock_failure("git", "push_tag"));
        }
        Ok(())
    }
}

pub struct MockOutputSink {
    log: CallLog,
    outputs: Mutex<Vec<(String, String)>>,
}

impl MockOutputSink {
    #[must_use]
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            outputs: Mutex::new(Vec::new()),
        }
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn outputs(&self) -> Vec<(String, String)> {
        self.outputs.lock().expect("lock poisoned").clone()
    }
}

impl OutputSink for MockOutputSink {
    fn set_output(&self, name: &str, value: &str) -> Result<()> {
        self.log.record(format!("output {name}"));
        self.outputs
            .lock()
            .expect("lock poisoned")
            .push((name.to_string(), value.to_string()));
        Ok(())
    }
}
