use std::process::{Command, Stdio};

use tracing::debug;

use crate::{Invocation, ProcessError, Result, StdioMode};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    #[must_use]
    pub fn new(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }
}

pub trait ProcessRunner: Send + Sync {
    /// Runs the invocation to completion.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::Spawn`] if the program cannot be started and
    /// [`ProcessError::Exit`] if it exits with a non-zero status.
    fn run(&self, invocation: &Invocation) -> Result<ProcessOutput>;
}

impl<R: ProcessRunner + ?Sized> ProcessRunner for &R {
    fn run(&self, invocation: &Invocation) -> Result<ProcessOutput> {
        (**self).run(invocation)
    }
}

/// Runs commands with [`std::process::Command`], blocking until they exit.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, invocation: &Invocation) -> Result<ProcessOutput> {
        debug!(
            command = %invocation.display_command(),
            cwd = ?invocation.cwd(),
            "running external command"
        );

        let mut command = Command::new(invocation.program());
        command.args(invocation.arguments());
        if let Some(cwd) = invocation.cwd() {
            command.current_dir(cwd);
        }

        let spawn_error = |source| ProcessError::Spawn {
            program: invocation.program().to_string(),
            source,
        };

        match invocation.stdio() {
            StdioMode::Captured => {
                let output = command
                    .stdin(Stdio::null())
                    .output()
                    .map_err(spawn_error)?;
                let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
                let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

                if output.status.success() {
                    Ok(ProcessOutput { stdout, stderr })
                } else {
                    if !stdout.is_empty() {
                        debug!(program = invocation.program(), %stdout, "failed command output");
                    }
                    Err(ProcessError::Exit {
                        program: invocation.program().to_string(),
                        code: output.status.code(),
                        stderr,
                    })
                }
            }
            StdioMode::Inherited => {
                let status = command.status().map_err(spawn_error)?;
                if status.success() {
                    Ok(ProcessOutput::default())
                } else {
                    Err(ProcessError::Exit {
                        program: invocation.program().to_string(),
                        code: status.code(),
                        stderr: String::new(),
                    })
                }
            }
        }
    }
}
