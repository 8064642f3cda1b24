use std::fmt;
use std::path::{Path, PathBuf};

/// How the child's standard streams are connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StdioMode {
    /// Capture stdout and stderr.
    #[default]
    Captured,
    /// Let the child write straight to the terminal. Nothing is captured.
    Inherited,
}

/// A fully described external command.
#[derive(Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
    cwd: Option<PathBuf>,
    stdio: StdioMode,
    sensitive: bool,
}

impl Invocation {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            stdio: StdioMode::Captured,
            sensitive: false,
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub fn inherit_stdio(mut self) -> Self {
        self.stdio = StdioMode::Inherited;
        self
    }

    /// Marks the arguments as secret. They are left out of logs and `Debug`.
    #[must_use]
    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    #[must_use]
    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    #[must_use]
    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    #[must_use]
    pub fn stdio(&self) -> StdioMode {
        self.stdio
    }

    /// `program arg1 arg2`, or `program [REDACTED]` for sensitive invocations.
    #[must_use]
    pub fn display_command(&self) -> String {
        if self.sensitive {
            return format!("{} [REDACTED]", self.program);
        }
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Debug for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Invocation");
        debug.field("program", &self.program);
        if self.sensitive {
            debug.field("args", &"[REDACTED]");
        } else {
            debug.field("args", &self.args);
        }
        debug
            .field("cwd", &self.cwd)
            .field("stdio", &self.stdio)
            .finish()
    }
}
