//! Running external programs (`git`, `gh`, `npm`) with captured output.
//!
//! Every call goes through [`ProcessRunner`] so operations can be exercised
//! against a recording runner in tests.

mod error;
mod invocation;
mod runner;

pub use error::ProcessError;
pub use invocation::{Invocation, StdioMode};
pub use runner::{ProcessOutput, ProcessRunner, SystemProcessRunner};

pub type Result<T> = std::result::Result<T, ProcessError>;
