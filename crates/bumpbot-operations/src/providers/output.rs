use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::traits::OutputSink;
use crate::{OperationError, Result};

const DELIMITER_PREFIX: &str = "bumpbot_output_";

/// Appends outputs to the file named by `GITHUB_OUTPUT`.
pub struct GithubOutputFile {
    path: PathBuf,
}

impl GithubOutputFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl OutputSink for GithubOutputFile {
    fn set_output(&self, name: &str, value: &str) -> Result<()> {
        let write_error = |source| OperationError::OutputWrite {
            name: name.to_string(),
            path: self.path.clone(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(write_error)?;
        file.write_all(format_output(name, value).as_bytes())
            .map_err(write_error)
    }
}

/// Prints `name=value` lines, for running outside a workflow.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutOutputSink;

impl OutputSink for StdoutOutputSink {
    fn set_output(&self, name: &str, value: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(format_output(name, value).as_bytes())?;
        Ok(())
    }
}

// Multiline values use the heredoc form. The delimiter must not occur in the value.
fn format_output(name: &str, value: &str) -> String {
    if !value.contains('\n') {
        return format!("{name}={value}\n");
    }
    let mut delimiter = format!("{DELIMITER_PREFIX}{name}");
    while value.contains(&delimiter) {
        delimiter.push('_');
    }
    format!("{name}<<{delimiter}\n{value}\n{delimiter}\n")
}
