use std::io::ErrorKind;

use bumpbot_core::{BumpResponse, PackageEntry, ReleaseType};
use bumpbot_operations::traits::{BumpSelection, InteractionProvider};
use bumpbot_operations::{OperationError, Result};
use dialoguer::{Input, Select};
use semver::Version;

use crate::cancel::PromptSession;
use crate::environment::PromptDefaults;

pub struct TerminalInteractionProvider {
    defaults: PromptDefaults,
}

impl TerminalInteractionProvider {
    #[must_use]
    pub fn new(defaults: PromptDefaults) -> Self {
        Self { defaults }
    }
}

impl InteractionProvider for TerminalInteractionProvider {
    fn prompt_bump(&self, packages: &[PackageEntry]) -> Result<BumpSelection> {
        let _session = PromptSession::start();

        let Some(base) = prompt_text("Base branch", &self.defaults.base)? else {
            return Ok(BumpSelection::Cancelled);
        };
        let Some(remote) = prompt_text("Remote name", &self.defaults.remote)? else {
            return Ok(BumpSelection::Cancelled);
        };

        let package_items: Vec<String> = packages.iter().map(package_label).collect();
        let Some(package_index) = answer(
            Select::new()
                .with_prompt("Choose a package to bump")
                .items(&package_items)
                .default(0)
                .interact_opt(),
        )?
        .flatten() else {
            return Ok(BumpSelection::Cancelled);
        };
        let package = &packages[package_index];

        let current = Version::parse(&package.version).ok();
        let release_items: Vec<String> = ReleaseType::ALL
            .iter()
            .map(|release_type| release_label(*release_type, current.as_ref()))
            .collect();
        let Some(release_index) = answer(
            Select::new()
                .with_prompt("Choose a release type")
                .items(&release_items)
                .default(0)
                .interact_opt(),
        )?
        .flatten() else {
            return Ok(BumpSelection::Cancelled);
        };

        Ok(BumpSelection::Selected(BumpResponse {
            base,
            remote,
            package_name: package.name.clone(),
            release_type: ReleaseType::ALL[release_index],
        }))
    }
}

fn prompt_text(prompt: &str, default: &str) -> Result<Option<String>> {
    answer(
        Input::<String>::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text(),
    )
}

/// An interrupted read (Ctrl-C) yields `None`; other terminal failures are errors.
fn answer<T>(result: std::result::Result<T, dialoguer::Error>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(dialoguer::Error::IO(e)) if e.kind() == ErrorKind::Interrupted => Ok(None),
        Err(dialoguer::Error::IO(e)) => Err(OperationError::Io(e)),
    }
}

fn package_label(package: &PackageEntry) -> String {
    format!("{} - {}", package.name_no_scope, package.hint())
}

fn release_label(release_type: ReleaseType, current: Option<&Version>) -> String {
    let base = format!("{release_type} - {}", release_type.description());
    match current.and_then(|version| Some((version, release_type.next_version(version)?))) {
        Some((version, next)) => format!("{base} ({version} -> {next})"),
        None => base,
    }
}
