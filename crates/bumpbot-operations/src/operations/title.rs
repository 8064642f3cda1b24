use regex::Regex;
use tracing::info;

use crate::{OperationError, Result};

#[derive(Debug, Clone)]
pub struct TitleRule {
    pub description: String,
    pattern: Regex,
}

impl TitleRule {
    /// # Errors
    ///
    /// Returns [`OperationError::TitlePattern`] if `pattern` is not a valid
    /// regular expression.
    pub fn new(description: impl Into<String>, pattern: &str) -> Result<Self> {
        Ok(Self {
            description: description.into(),
            pattern: Regex::new(pattern)?,
        })
    }

    #[must_use]
    pub fn matches(&self, title: &str) -> bool {
        self.pattern.is_match(title)
    }
}

/// Accepts a pull request title if any rule matches.
#[derive(Debug, Clone)]
pub struct TitleCheck {
    rules: Vec<TitleRule>,
}

impl TitleCheck {
    #[must_use]
    pub fn new(rules: Vec<TitleRule>) -> Self {
        Self { rules }
    }

    /// Bump pull requests and ticket-prefixed titles.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in pattern fails to compile.
    pub fn pull_request_default() -> Result<Self> {
        Ok(Self::new(vec![
            TitleRule::new(
                "Version bump pull request starting with \"BUMP!\"",
                r"^BUMP!\s",
            )?,
            TitleRule::new(
                "JIRA ticket in the form of \"IHS-#######\"",
                r"^IHS-([0-9])+\s",
            )?,
        ]))
    }

    /// # Errors
    ///
    /// Returns [`OperationError::InvalidTitle`] listing every rule when none
    /// matches.
    pub fn enforce(&self, title: &str) -> Result<()> {
        info!("Checking pull request title \"{title}\"");
        if let Some(rule) = self.rules.iter().find(|rule| rule.matches(title)) {
            info!("Title matches: {}", rule.description);
            return Ok(());
        }
        Err(OperationError::InvalidTitle {
            title: title.to_string(),
            criteria: self.rules.iter().map(|r| r.description.clone()).collect(),
        })
    }
}
