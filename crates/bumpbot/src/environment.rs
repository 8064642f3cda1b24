use std::fmt;
use std::io::IsTerminal;

const NO_TTY_ENV: &str = "BUMPBOT_NO_TTY";
const FORCE_TTY_ENV: &str = "BUMPBOT_FORCE_TTY";
const BASE_BRANCH_ENV: &str = "BUMPBOT_BASE_BRANCH";
const REMOTE_ENV: &str = "BUMPBOT_REMOTE";

const DEFAULT_BASE_BRANCH: &str = "master";
const DEFAULT_REMOTE: &str = "origin";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NonInteractiveReason {
    ExplicitDisable,
    CiDetected { env_var: String },
    NoTerminal,
}

impl fmt::Display for NonInteractiveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExplicitDisable => write!(f, "{NO_TTY_ENV} is set"),
            Self::CiDetected { env_var } => write!(f, "CI detected via {env_var}"),
            Self::NoTerminal => f.write_str("stdin is not a terminal"),
        }
    }
}

pub fn non_interactive_reason() -> Option<NonInteractiveReason> {
    if std::env::var(NO_TTY_ENV).is_ok() {
        return Some(NonInteractiveReason::ExplicitDisable);
    }

    if std::env::var(FORCE_TTY_ENV).is_ok() {
        return None;
    }

    if let Some(env_var) = detect_ci_env_var() {
        return Some(NonInteractiveReason::CiDetected { env_var });
    }

    if !std::io::stdin().is_terminal() {
        return Some(NonInteractiveReason::NoTerminal);
    }

    None
}

fn detect_ci_env_var() -> Option<String> {
    const CI_ENV_VARS: &[&str] = &[
        "CI",
        "GITHUB_ACTIONS",
        "GITLAB_CI",
        "CIRCLECI",
        "TRAVIS",
        "JENKINS_URL",
        "BUILDKITE",
        "TF_BUILD",
    ];

    CI_ENV_VARS
        .iter()
        .find(|var| std::env::var(var).is_ok())
        .map(|var| (*var).to_string())
}

/// Initial answers for the free-text prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptDefaults {
    pub base: String,
    pub remote: String,
}

impl PromptDefaults {
    pub fn from_env() -> Self {
        Self {
            base: env_or(BASE_BRANCH_ENV, DEFAULT_BASE_BRANCH),
            remote: env_or(REMOTE_ENV, DEFAULT_REMOTE),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}
